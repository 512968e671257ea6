use crate::constants::{CARD_PERSPECTIVE_PX, CARD_SELECTOR, DEVICE_PIXEL_RATIO_CAP, SCROLL_TRACK_ID};
use site_core::{CardPose, ScreenPlacement, SectionAnchor};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A section element paired with the index of its world-space anchor.
pub struct TrackedElement {
    pub anchor_index: usize,
    pub element: web::HtmlElement,
}

/// Resolve the anchor table against the live document. Selectors that match
/// nothing are skipped; the rest of the page keeps working without them.
pub fn find_tracked_elements(
    document: &web::Document,
    anchors: &[SectionAnchor],
) -> Vec<TrackedElement> {
    let mut tracked = Vec::with_capacity(anchors.len());
    for (i, anchor) in anchors.iter().enumerate() {
        match document.query_selector(anchor.selector) {
            Ok(Some(el)) => {
                if let Ok(element) = el.dyn_into::<web::HtmlElement>() {
                    tracked.push(TrackedElement {
                        anchor_index: i,
                        element,
                    });
                }
            }
            _ => log::warn!("[dom] no element for {}", anchor.selector),
        }
    }
    tracked
}

pub fn find_card_elements(document: &web::Document) -> Vec<web::HtmlElement> {
    let mut cards = Vec::new();
    if let Ok(list) = document.query_selector_all(CARD_SELECTOR) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    cards.push(el);
                }
            }
        }
    }
    cards
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(DEVICE_PIXEL_RATIO_CAP);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Stretch the invisible scroll track so the page exposes the virtual journey.
pub fn set_scroll_track_height(document: &web::Document, px: f32) {
    if let Some(el) = document.get_element_by_id(SCROLL_TRACK_ID) {
        let _ = el.set_attribute("style", &format!("height:{}px", px));
    } else {
        log::warn!("[dom] no #{} element", SCROLL_TRACK_ID);
    }
}

/// Map a frame's placement onto a section element. `None` (behind the camera)
/// hides it outright.
pub fn apply_placement(element: &web::HtmlElement, placement: Option<ScreenPlacement>) {
    let style = match placement {
        Some(p) => format!(
            "transform:translate(-50%,-50%) translate3d({:.1}px,{:.1}px,0) scale({:.4});opacity:{:.4};pointer-events:{}",
            p.x,
            p.y,
            p.scale,
            p.opacity,
            if p.interactive { "auto" } else { "none" }
        ),
        None => "opacity:0;pointer-events:none".to_string(),
    };
    let _ = element.set_attribute("style", &style);
}

pub fn apply_card_pose(element: &web::HtmlElement, pose: CardPose) {
    let style = format!(
        "visibility:{};opacity:{:.4};transform:perspective({}px) translateZ({:.1}px) rotateY({:.4}rad)",
        if pose.visible { "visible" } else { "hidden" },
        pose.opacity,
        CARD_PERSPECTIVE_PX,
        pose.z,
        pose.rotation_y,
    );
    let _ = element.set_attribute("style", &style);
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Viewport size in CSS pixels, the space the DOM bridge projects into.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w as f32, h as f32)
}
