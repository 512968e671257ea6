use site_core::{spin_angle, ParticleField, THEME_CYAN, THEME_VIOLET};

#[test]
fn field_has_requested_count() {
    let field = ParticleField::generate(500, 2000.0, 1);
    assert_eq!(field.len(), 500);
    assert!(!field.is_empty());
}

#[test]
fn particles_stay_inside_the_spread_cube() {
    let spread = 100.0;
    let field = ParticleField::generate(2000, spread, 7);
    let half = spread * 0.5;
    for p in &field.particles {
        assert!(p.position.x.abs() <= half);
        assert!(p.position.y.abs() <= half);
        assert!(p.position.z.abs() <= half);
        assert!(p.size > 0.0);
    }
}

#[test]
fn colors_come_from_the_theme_palette() {
    let field = ParticleField::generate(200, 2000.0, 42);
    for p in &field.particles {
        assert!(p.color == THEME_CYAN || p.color == THEME_VIOLET);
    }
    // With 200 draws both colors should appear.
    assert!(field.particles.iter().any(|p| p.color == THEME_CYAN));
    assert!(field.particles.iter().any(|p| p.color == THEME_VIOLET));
}

#[test]
fn generation_is_deterministic_per_seed() {
    let a = ParticleField::generate(64, 2000.0, 99);
    let b = ParticleField::generate(64, 2000.0, 99);
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.color, pb.color);
        assert_eq!(pa.size, pb.size);
    }
    let c = ParticleField::generate(64, 2000.0, 100);
    assert!(a
        .particles
        .iter()
        .zip(&c.particles)
        .any(|(pa, pc)| pa.position != pc.position));
}

#[test]
fn spin_drifts_backward_over_time() {
    assert_eq!(spin_angle(0.0), 0.0);
    assert!(spin_angle(10.0) < 0.0);
    assert!((spin_angle(10.0) - 2.0 * spin_angle(5.0)).abs() < 1e-6);
}
