#![cfg(target_arch = "wasm32")]

mod constants;
mod dom;
mod events;
mod frame;
mod loop_control;
mod render;

use crate::constants::{CANVAS_ID, CAROUSEL_ID};
use glam::Vec2;
use instant::Instant;
use site_core::{
    default_section_anchors, Carousel, ParticleField, ScrollCamera, Viewport,
    CARD_TRANSITION_REDUCED_SEC, CARD_TRANSITION_SEC, PARTICLE_COUNT, PARTICLE_SPREAD,
    SCROLL_RANGE_PX,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);
    dom::set_scroll_track_height(&document, SCROLL_RANGE_PX);

    // Starfield data; a fresh sky every visit.
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let field = ParticleField::generate(PARTICLE_COUNT, PARTICLE_SPREAD, seed);
    let gpu = frame::init_gpu(&canvas, &field).await;

    let anchors = default_section_anchors();
    let sections = dom::find_tracked_elements(&document, &anchors);
    let cards = dom::find_card_elements(&document);
    let reduced_motion = dom::prefers_reduced_motion();
    log::info!(
        "[init] {} sections, {} cards, reduced_motion={}",
        sections.len(),
        cards.len(),
        reduced_motion
    );

    let scroll = Rc::new(RefCell::new(ScrollCamera::new()));
    let (vw, vh) = dom::viewport_size(&window);
    let viewport = Rc::new(RefCell::new(Viewport {
        width: vw,
        height: vh,
    }));
    let pointer = Rc::new(RefCell::new(frame::PointerState::default()));
    let loop_control = loop_control::LoopControl::new();

    let duration = if reduced_motion {
        CARD_TRANSITION_REDUCED_SEC
    } else {
        CARD_TRANSITION_SEC
    };
    let carousel = match Carousel::with_duration(cards.len(), duration) {
        Ok(c) => Some(Rc::new(RefCell::new(c))),
        Err(e) => {
            log::warn!("[carousel] disabled: {}", e);
            None
        }
    };

    events::wire_scroll(&window, scroll.clone());
    events::wire_resize(&window, canvas.clone(), viewport.clone());
    if !reduced_motion {
        events::wire_pointermove(&window, pointer.clone());
    }
    if let Some(car) = &carousel {
        if let Some(container) = document.get_element_by_id(CAROUSEL_ID) {
            events::wire_wheel(&container, car.clone());
        } else {
            log::warn!("[carousel] no #{} container to listen on", CAROUSEL_ID);
        }
    }

    let now = Instant::now();
    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        scroll,
        carousel,
        viewport,
        pointer,
        anchors,
        sections,
        cards,
        canvas,
        gpu,
        reduced_motion,
        parallax: Vec2::ZERO,
        started_at: now,
        last_instant: now,
    }));
    events::wire_visibility(&document, loop_control.clone(), ctx.clone());
    frame::start_loop(ctx, loop_control);

    Ok(())
}
