#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::core::{RenderParams, RenderState};
use crate::frame::{FrameContext, SharedRenderState};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod storage;
mod xp;

fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    render: SharedRenderState,
) {
    let canvas_resize = canvas.clone();
    let ctx_resize = ctx.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_backing_size(&canvas_resize, &ctx_resize);
        render.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("melex-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Background canvas: particles + cursor trail
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("bg")
        .ok_or_else(|| anyhow::anyhow!("missing #bg"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context on #bg"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::sync_canvas_backing_size(&canvas, &ctx);
    let render: SharedRenderState = Rc::new(RefCell::new(RenderState::new(
        viewport,
        RenderParams::default(),
        SmallRng::from_entropy(),
    )));
    log::info!(
        "[render] viewport {}x{} @{}x, {} particles",
        viewport.width,
        viewport.height,
        viewport.dpr,
        render.borrow().particles.len()
    );
    wire_canvas_resize(&canvas, &ctx, render.clone());
    events::wire_trail(render.clone());
    frame::start_loop(Rc::new(RefCell::new(FrameContext {
        state: render,
        surface: CanvasSurface { ctx },
    })));

    // XP counter and everything that feeds it
    let xp = xp::XpCounter::load(&document);
    events::wire_section_awards(&document, &xp)?;
    events::wire_card_hover_awards(&document, &xp);
    events::wire_click_awards(&document, &xp);
    events::wire_sound_toggle(&document, &xp);

    // Purely visual
    events::wire_card_tilt(&document);
    events::wire_scroll_reveal(&document)?;

    Ok(())
}
