//! Event wiring. Each effect gets its own listener; closures are forgotten
//! because they live for the page's lifetime.

use crate::dom;
use crate::frame::{self, FrameContext, PointerState};
use crate::loop_control::LoopControl;
use site_core::{Carousel, ScrollCamera, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll: overwrite the camera's target depth from the page offset.
pub fn wire_scroll(window: &web::Window, scroll: Rc<RefCell<ScrollCamera>>) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let y = win.scroll_y().unwrap_or(0.0) as f32;
        let (_, h) = dom::viewport_size(&win);
        scroll.borrow_mut().on_scroll(y, h);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Wheel over the carousel container drives the card machine. Delta is only
/// read for its sign; in-flight transitions drop the event.
pub fn wire_wheel(target: &web::Element, carousel: Rc<RefCell<Carousel>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        if carousel.borrow_mut().on_wheel(ev.delta_y()) {
            log::debug!("[wheel] transition started");
        }
    }) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Resize: refresh the canvas backing size and the CSS-pixel viewport the
/// projection bridge uses, so on-axis anchors stay centered.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    viewport: Rc<RefCell<Viewport>>,
) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let (w, h) = dom::viewport_size(&win);
        *viewport.borrow_mut() = Viewport {
            width: w,
            height: h,
        };
        log::debug!("[resize] {}x{}", w, h);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Pointer position as a centered, normalized offset in [-1, 1].
pub fn wire_pointermove(window: &web::Window, pointer: Rc<RefCell<PointerState>>) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (w, h) = dom::viewport_size(&win);
        let mut p = pointer.borrow_mut();
        p.nx = (ev.client_x() as f32 / w.max(1.0)) * 2.0 - 1.0;
        p.ny = (ev.client_y() as f32 / h.max(1.0)) * 2.0 - 1.0;
    }) as Box<dyn FnMut(_)>);
    let _ =
        window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Pause the render loop while the page is hidden by withholding the next
/// frame registration, and restart it on return. A hidden tab parks the
/// pending frame callback instead of killing it, so `start_loop` only arms a
/// fresh loop once the old tick has actually retired.
pub fn wire_visibility(
    document: &web::Document,
    control: LoopControl,
    ctx: Rc<RefCell<FrameContext<'static>>>,
) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if doc.hidden() {
            control.pause();
            log::info!("[visibility] paused");
        } else if !control.is_running() {
            control.resume();
            // Reset the frame clock so the first dt after resume is sane.
            ctx.borrow_mut().reset_clock();
            frame::start_loop(ctx.clone(), control.clone());
            log::info!("[visibility] resumed");
        }
    }) as Box<dyn FnMut()>);
    let _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
