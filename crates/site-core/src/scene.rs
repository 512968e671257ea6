use glam::Vec3;

/// A fixed world-space position tied to a DOM element by selector.
///
/// Anchors are created once at startup and never move; the camera does all the
/// travelling.
#[derive(Clone, Debug)]
pub struct SectionAnchor {
    pub selector: &'static str,
    pub position: Vec3,
}

/// The page's section layout, ordered by depth. Selectors that match nothing
/// are skipped by the web layer.
pub fn default_section_anchors() -> Vec<SectionAnchor> {
    [
        (".hero-section", 0.0),
        ("#experience", -1000.0),
        ("#skills", -2000.0),
        ("footer", -2500.0),
    ]
    .into_iter()
    .map(|(selector, z)| SectionAnchor {
        selector,
        position: Vec3::new(0.0, 0.0, z),
    })
    .collect()
}
