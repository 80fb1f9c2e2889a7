use crate::constants::*;
use crate::dom;
use crate::xp::XpCounter;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

fn observer(
    callback: ObserverCallback,
    threshold: f64,
    root_margin: Option<&str>,
) -> anyhow::Result<web::IntersectionObserver> {
    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    let obs = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
        .map_err(|e| anyhow!("IntersectionObserver error: {:?}", e))?;
    callback.forget();
    Ok(obs)
}

fn intersecting(
    entries: &js_sys::Array,
) -> impl Iterator<Item = web::IntersectionObserverEntry> + '_ {
    entries
        .iter()
        .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
        .filter(|e| e.is_intersecting())
}

/// Each watched section awards once per page load when half visible, then
/// stops being observed.
pub fn wire_section_awards(document: &web::Document, xp: &XpCounter) -> anyhow::Result<()> {
    for (section, amount) in SECTION_AWARDS {
        let Some(el) = document.get_element_by_id(section) else {
            log::debug!("[xp] section #{} not on page", section);
            continue;
        };
        let xp = xp.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, obs: web::IntersectionObserver| {
                if intersecting(&entries).next().is_some() && xp.award_section(section, amount) {
                    obs.disconnect();
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        observer(callback, XP_SECTION_VISIBILITY, None)?.observe(&el);
    }
    Ok(())
}

/// `.reveal` elements get the `visible` class once they scroll into view.
pub fn wire_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, ".reveal");
    if targets.is_empty() {
        return Ok(());
    }
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in intersecting(&entries) {
                _ = entry.target().class_list().add_1(REVEAL_CLASS);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let obs = observer(callback, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN))?;
    for el in &targets {
        obs.observe(el);
    }
    Ok(())
}
