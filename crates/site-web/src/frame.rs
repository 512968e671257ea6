use crate::constants::{PARALLAX_LERP_FACTOR, PARALLAX_STRENGTH};
use crate::dom::{self, TrackedElement};
use crate::loop_control::LoopControl;
use crate::render;
use glam::{Vec2, Vec3};
use instant::Instant;
use site_core::{
    place_anchor, spin_angle, Camera, Carousel, ParticleField, ScrollCamera, SectionAnchor,
    Viewport, SECTION_FADE_THRESHOLD,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    /// Normalized offsets from the viewport center, both in [-1, 1].
    pub nx: f32,
    pub ny: f32,
}

/// Everything one animation frame needs, owned by a single controller instead
/// of module-level globals.
pub struct FrameContext<'a> {
    pub scroll: Rc<RefCell<ScrollCamera>>,
    pub carousel: Option<Rc<RefCell<Carousel>>>,
    pub viewport: Rc<RefCell<Viewport>>,
    pub pointer: Rc<RefCell<PointerState>>,

    pub anchors: Vec<SectionAnchor>,
    pub sections: Vec<TrackedElement>,
    pub cards: Vec<web::HtmlElement>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub reduced_motion: bool,
    pub parallax: Vec2,
    pub started_at: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    /// Forget the time spent paused so the next dt doesn't fast-forward tweens.
    pub fn reset_clock(&mut self) {
        self.last_instant = Instant::now();
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed_sec = (now - self.started_at).as_secs_f32();

        // Camera depth chases the scroll target.
        {
            let mut scroll = self.scroll.borrow_mut();
            if self.reduced_motion {
                scroll.snap();
            } else {
                scroll.step();
            }
        }

        // Pointer parallax, smoothed the same way the depth is.
        if self.reduced_motion {
            self.parallax = Vec2::ZERO;
        } else {
            let p = *self.pointer.borrow();
            let target = Vec2::new(p.nx, p.ny) * PARALLAX_STRENGTH;
            self.parallax = self.parallax.lerp(target, PARALLAX_LERP_FACTOR);
        }

        // Card machine: advance the in-flight transition, restyle every card.
        if let Some(carousel) = &self.carousel {
            let mut carousel = carousel.borrow_mut();
            carousel.tick(dt_sec);
            for (i, el) in self.cards.iter().enumerate() {
                dom::apply_card_pose(el, carousel.pose(i));
            }
        }

        // Projection bridge: world anchors onto section elements.
        let viewport = *self.viewport.borrow();
        let eye = Vec3::new(
            self.parallax.x,
            -self.parallax.y,
            self.scroll.borrow().current_z,
        );
        let camera = Camera::facing_forward(eye, viewport.width / viewport.height.max(1.0));
        let view_proj = camera.view_proj();
        for tracked in &self.sections {
            let placement = place_anchor(
                self.anchors[tracked.anchor_index].position,
                eye,
                &view_proj,
                viewport,
                SECTION_FADE_THRESHOLD,
            );
            dom::apply_placement(&tracked.element, placement);
        }

        // Starfield.
        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            let spin = if self.reduced_motion {
                0.0
            } else {
                spin_angle(elapsed_sec)
            };
            if let Err(e) = gpu.render(eye, spin) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Schedule the cooperative render loop. The loop stops itself by withholding
/// the next registration once paused; `control` holds exactly one tick slot,
/// so a resume while the old tick is merely parked cannot start a second loop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, control: LoopControl) {
    if !control.try_arm() {
        return;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !control.is_running() {
            control.disarm();
            return;
        }
        ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
