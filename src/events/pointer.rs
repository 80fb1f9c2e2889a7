use crate::core::{hover_award, tilt_for_pointer};
use crate::dom;
use crate::frame::SharedRenderState;
use crate::xp::XpCounter;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every pointer move spawns a burst of trail points at the pointer.
pub fn wire_trail(render: SharedRenderState) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        render.borrow_mut().on_pointer_move(at);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

/// `.tilt` cards lean toward the pointer; their `.card-inner` carries the transform.
pub fn wire_card_tilt(document: &web::Document) {
    for card in dom::query_all(document, ".tilt") {
        let inner = match card.query_selector(".card-inner").ok().flatten() {
            Some(el) => match el.dyn_into::<web::HtmlElement>() {
                Ok(h) => h,
                Err(_) => continue,
            },
            None => continue,
        };

        let card_move = card.clone();
        let inner_move = inner.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = card_move.get_bounding_client_rect();
            if let Some(tilt) = tilt_for_pointer(
                ev.client_x() as f64,
                ev.client_y() as f64,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            ) {
                _ = inner_move
                    .style()
                    .set_property("transform", &tilt.to_css_transform());
            }
        }) as Box<dyn FnMut(_)>);
        _ = card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        on_move.forget();

        let on_leave = Closure::wrap(Box::new(move || {
            _ = inner.style().set_property("transform", "");
        }) as Box<dyn FnMut()>);
        _ = card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    }
}

/// Hovering any `.card` awards its `data-xp` (default 1), every time.
pub fn wire_card_hover_awards(document: &web::Document, xp: &XpCounter) {
    for card in dom::query_all(document, ".card") {
        let xp = xp.clone();
        let card_hover = card.clone();
        let closure = Closure::wrap(Box::new(move || {
            xp.award(hover_award(card_hover.get_attribute("data-xp").as_deref()));
        }) as Box<dyn FnMut()>);
        _ = card.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
