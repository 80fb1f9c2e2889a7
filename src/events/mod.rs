pub mod buttons;
pub mod pointer;
pub mod visibility;

pub use buttons::{wire_click_awards, wire_sound_toggle};
pub use pointer::{wire_card_hover_awards, wire_card_tilt, wire_trail};
pub use visibility::{wire_scroll_reveal, wire_section_awards};
