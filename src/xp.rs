use crate::core::{CountAnimation, ProgressParams, ProgressState};
use crate::dom;
use crate::frame;
use crate::storage::LocalStore;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handle to the XP counter and the element that displays it.
/// Cloned into every handler that awards XP.
#[derive(Clone)]
pub struct XpCounter {
    state: Rc<RefCell<ProgressState<LocalStore>>>,
    display: Option<web::Element>,
}

impl XpCounter {
    pub fn load(document: &web::Document) -> Self {
        let state = ProgressState::load(LocalStore::open(), ProgressParams::default());
        let display = document.get_element_by_id("xp-value");
        match &display {
            Some(el) => dom::set_text(el, &state.value().to_string()),
            None => log::warn!("[xp] missing #xp-value; counter will not be shown"),
        }
        Self {
            state: Rc::new(RefCell::new(state)),
            display,
        }
    }

    pub fn award(&self, amount: i64) {
        let anim = self.state.borrow_mut().award(amount, now_ms());
        self.show(anim);
    }

    /// Credit a section once per page load. Returns whether it was credited.
    pub fn award_section(&self, section: &str, amount: i64) -> bool {
        let anim = self
            .state
            .borrow_mut()
            .award_section(section, amount, now_ms());
        match anim {
            Some(a) => {
                self.show(a);
                true
            }
            None => false,
        }
    }

    fn show(&self, anim: CountAnimation) {
        if let Some(el) = &self.display {
            frame::animate_count(el.clone(), anim);
        }
    }
}

/// Milliseconds on the same clock as animation-frame timestamps.
fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
