use crate::canvas::CanvasSurface;
use crate::core::{CountAnimation, RenderState};
use crate::dom;
use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedRenderState = Rc<RefCell<RenderState<SmallRng>>>;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameContext {
    pub state: SharedRenderState,
    pub surface: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.state.borrow_mut().step(&mut self.surface);
    }
}

#[inline]
fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive the particle canvas forever. Called once at startup.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
    log::info!("[render] loop started");
}

/// Play a counter animation into `el`, one sample per animation frame, and
/// release the callback once it completes. Overlapping animations are not
/// coordinated; whichever runs last in a frame owns the text.
pub fn animate_count(el: web::Element, anim: CountAnimation) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let sample = anim.sample(now_ms);
        dom::set_text(&el, &sample.value.to_string());
        if sample.done {
            // drop our handle so the closure is freed after it returns
            let _ = tick_clone.borrow_mut().take();
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}
