use crate::audio::AmbientSound;
use crate::constants::*;
use crate::core::{read_flag, write_flag};
use crate::dom;
use crate::storage::LocalStore;
use crate::xp::XpCounter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Registration buttons award a fixed amount on every click.
pub fn wire_click_awards(document: &web::Document, xp: &XpCounter) {
    for (id, amount) in CLICK_AWARDS {
        let xp = xp.clone();
        dom::add_click_listener(document, id, move || xp.award(amount));
    }
}

struct SoundToggle {
    button: web::Element,
    on: bool,
    ambient: AmbientSound,
    store: LocalStore,
}

impl SoundToggle {
    fn render_label(&self) {
        let state = if self.on { "On" } else { "Off" };
        dom::set_text(&self.button, &format!("Sound: {}", state));
        _ = self
            .button
            .set_attribute("aria-pressed", if self.on { "true" } else { "false" });
    }

    fn start_ambient(&mut self, xp: &XpCounter) {
        match self.ambient.start() {
            Ok(()) => xp.award(XP_SOUND_ON),
            Err(e) => log::error!("[sound] start error: {:?}", e),
        }
    }
}

/// `#sound-toggle` flips ambient audio and persists the choice. A stored "on"
/// preference waits for the first pointer press, since audio needs a gesture.
pub fn wire_sound_toggle(document: &web::Document, xp: &XpCounter) {
    let Some(button) = document.get_element_by_id("sound-toggle") else {
        log::debug!("[sound] no #sound-toggle on page");
        return;
    };
    let store = LocalStore::open();
    let on = read_flag(&store, SOUND_STORAGE_KEY);
    let toggle = Rc::new(RefCell::new(SoundToggle {
        button,
        on,
        ambient: AmbientSound::default(),
        store,
    }));
    toggle.borrow().render_label();

    if on {
        let toggle_kick = toggle.clone();
        let xp_kick = xp.clone();
        let kick = Closure::once_into_js(move || {
            let mut t = toggle_kick.borrow_mut();
            if t.on && !t.ambient.is_playing() {
                t.start_ambient(&xp_kick);
            }
        });
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        if let Some(w) = web::window() {
            _ = w.add_event_listener_with_callback_and_add_event_listener_options(
                "pointerdown",
                kick.unchecked_ref(),
                &opts,
            );
        }
    }

    let xp = xp.clone();
    dom::add_click_listener(document, "sound-toggle", move || {
        let on = {
            let mut t = toggle.borrow_mut();
            t.on = !t.on;
            let on = t.on;
            write_flag(&mut t.store, SOUND_STORAGE_KEY, on);
            t.render_label();
            if !on {
                t.ambient.stop();
            }
            on
        };
        if !on {
            return;
        }
        let toggle = toggle.clone();
        let xp = xp.clone();
        spawn_local(async move {
            let ctx = toggle.borrow_mut().ambient.context();
            match ctx {
                Ok(ctx) => {
                    if ctx.state() == web::AudioContextState::Suspended {
                        if let Ok(p) = ctx.resume() {
                            _ = JsFuture::from(p).await;
                        }
                    }
                }
                Err(e) => {
                    log::error!("[sound] no audio context: {:?}", e);
                    return;
                }
            }
            let mut t = toggle.borrow_mut();
            // the user may have toggled off again while resuming
            if t.on {
                t.start_ambient(&xp);
            }
        });
    });
}
