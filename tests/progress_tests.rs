// Host-side tests for the XP counter, its persistence and the eased display.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod progress {
        include!("../src/core/progress.rs");
    }
    pub mod storage {
        include!("../src/core/storage.rs");
    }
}

use crate::constants::*;
use crate::core::easing::*;
use crate::core::progress::*;
use crate::core::storage::*;

fn fresh() -> ProgressState<MemoryStore> {
    ProgressState::load(MemoryStore::new(), ProgressParams::default())
}

fn stored(state: &ProgressState<MemoryStore>) -> Option<String> {
    state.store().get(XP_STORAGE_KEY).ok().flatten()
}

/// Store whose every access fails, like localStorage in a locked-down browser.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            key: key.to_string(),
            reason: "quota".to_string(),
        })
    }
}

#[test]
fn fresh_load_starts_at_zero() {
    let state = fresh();
    assert_eq!(state.value(), 0);
    assert_eq!(stored(&state), None);
}

#[test]
fn hover_award_persists_and_animates_from_previous_value() {
    let mut state = fresh();
    let anim = state.award(hover_award(Some("5")), 1000.0);
    assert_eq!(state.value(), 5);
    assert_eq!(stored(&state).as_deref(), Some("5"));
    assert_eq!(anim.from, 0);
    assert_eq!(anim.to, 5);
    assert_eq!(anim.duration_ms, XP_ANIMATION_MS);
    assert_eq!(anim.start_ms, 1000.0);
}

#[test]
fn positive_awards_strictly_increase_persisted_value() {
    let mut state = fresh();
    let mut last = 0u64;
    for amount in [1, 3, 15, 30, 1] {
        state.award(amount, 0.0);
        let persisted = parse_counter(stored(&state).as_deref());
        assert!(persisted > last);
        last = persisted;
    }
    assert_eq!(last, 50);
}

#[test]
fn negative_award_clamps_at_zero() {
    let mut state = fresh();
    let anim = state.award(-100, 0.0);
    assert_eq!(state.value(), 0);
    assert_eq!(stored(&state).as_deref(), Some("0"));
    assert_eq!(anim.sample(XP_ANIMATION_MS).value, 0);

    state.award(7, 0.0);
    state.award(-3, 0.0);
    assert_eq!(state.value(), 4);
}

#[test]
fn counter_round_trips_through_storage() {
    for n in [0u64, 1, 42, 9_999, u64::MAX] {
        let store = MemoryStore::new().with_entry(XP_STORAGE_KEY, &n.to_string());
        let state = ProgressState::load(store, ProgressParams::default());
        assert_eq!(state.value(), n);
    }
}

#[test]
fn corrupt_or_negative_stored_value_reads_as_zero() {
    assert_eq!(parse_counter(None), 0);
    assert_eq!(parse_counter(Some("")), 0);
    assert_eq!(parse_counter(Some("abc")), 0);
    assert_eq!(parse_counter(Some("-5")), 0);
    assert_eq!(parse_counter(Some("-")), 0);
    assert_eq!(parse_counter(Some(" 17 ")), 17);

    let store = MemoryStore::new().with_entry(XP_STORAGE_KEY, "NaN");
    assert_eq!(ProgressState::load(store, ProgressParams::default()).value(), 0);
}

#[test]
fn stored_counter_keeps_leading_digits() {
    assert_eq!(parse_counter(Some("12.9")), 12);
    assert_eq!(parse_counter(Some("40xp")), 40);
    assert_eq!(parse_counter(Some("7e2")), 7);
    assert_eq!(parse_counter(Some("+9")), 9);
    assert_eq!(parse_counter(Some("xp40")), 0);

    for (raw, expected) in [("12.9", 12u64), ("40xp", 40), ("abc", 0), ("-5", 0)] {
        let store = MemoryStore::new().with_entry(XP_STORAGE_KEY, raw);
        let state = ProgressState::load(store, ProgressParams::default());
        assert_eq!(state.value(), expected, "stored {raw:?}");
    }
}

#[test]
fn section_awards_once_per_session() {
    let mut state = fresh();
    assert!(state.award_section("services", 10, 0.0).is_some());
    assert!(state.is_awarded("services"));
    // scrolled away and back
    assert!(state.award_section("services", 10, 500.0).is_none());
    assert_eq!(state.value(), 10);

    // other sections are independent
    assert!(state.award_section("about", 6, 0.0).is_some());
    assert_eq!(state.value(), 16);
}

#[test]
fn reload_resets_guard_but_keeps_counter() {
    let mut state = fresh();
    state.award_section("hero", 5, 0.0);
    let persisted = state.store().clone();

    let mut reloaded = ProgressState::load(persisted, ProgressParams::default());
    assert_eq!(reloaded.value(), 5);
    assert!(!reloaded.is_awarded("hero"));
    assert!(reloaded.award_section("hero", 5, 0.0).is_some());
    assert_eq!(reloaded.value(), 10);
}

#[test]
fn broken_storage_degrades_to_in_memory_counter() {
    let mut state = ProgressState::load(BrokenStore, ProgressParams::default());
    assert_eq!(state.value(), 0);
    let anim = state.award(12, 0.0);
    assert_eq!(state.value(), 12);
    assert_eq!(anim.to, 12);
}

#[test]
fn hover_amount_defaults_to_one() {
    assert_eq!(hover_award(Some("5")), 5);
    assert_eq!(hover_award(Some(" 8 ")), 8);
    assert_eq!(hover_award(None), 1);
    assert_eq!(hover_award(Some("")), 1);
    assert_eq!(hover_award(Some("lots")), 1);
    assert_eq!(hover_award(Some("5px")), 5);
    assert_eq!(hover_award(Some("2.5")), 2);
    assert_eq!(hover_award(Some("-3")), -3);
}

#[test]
fn sound_flag_reads_only_one_as_on() {
    let mut store = MemoryStore::new();
    assert!(!read_flag(&store, SOUND_STORAGE_KEY));
    write_flag(&mut store, SOUND_STORAGE_KEY, true);
    assert_eq!(store.get(SOUND_STORAGE_KEY), Ok(Some("1".to_string())));
    assert!(read_flag(&store, SOUND_STORAGE_KEY));
    write_flag(&mut store, SOUND_STORAGE_KEY, false);
    assert!(!read_flag(&store, SOUND_STORAGE_KEY));

    let odd = MemoryStore::new().with_entry(SOUND_STORAGE_KEY, "true");
    assert!(!read_flag(&odd, SOUND_STORAGE_KEY));
    assert!(!read_flag(&BrokenStore, SOUND_STORAGE_KEY));
}

#[test]
fn ease_out_quart_endpoints() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
}

#[test]
fn count_animation_lands_exactly_on_target() {
    for (from, to) in [(0u64, 5u64), (3, 1_000_003), (10, 3), (7, 7)] {
        let anim = CountAnimation::new(from, to, XP_ANIMATION_MS, 250.0);
        let end = anim.sample(250.0 + XP_ANIMATION_MS);
        assert_eq!(end, CountSample { value: to, done: true });
        assert_eq!(anim.sample(10_000.0).value, to);
    }
}

#[test]
fn count_animation_eases_from_zero_to_five() {
    let anim = CountAnimation::new(0, 5, XP_ANIMATION_MS, 1000.0);
    assert_eq!(anim.sample(1000.0), CountSample { value: 0, done: false });
    // p = 0.5 -> 5 * 0.9375 = 4.6875, floored
    assert_eq!(anim.sample(1400.0).value, 4);
    assert!(!anim.sample(1799.0).done);
    assert_eq!(anim.sample(1800.0), CountSample { value: 5, done: true });
}

#[test]
fn count_animation_is_monotonic_when_rising() {
    let anim = CountAnimation::new(20, 95, XP_ANIMATION_MS, 0.0);
    let mut prev = anim.sample(0.0).value;
    assert_eq!(prev, 20);
    let mut t = 0.0;
    while t <= XP_ANIMATION_MS {
        let v = anim.sample(t).value;
        assert!(v >= prev && v <= 95);
        prev = v;
        t += 16.7;
    }
}

#[test]
fn count_animation_handles_odd_clocks() {
    let anim = CountAnimation::new(4, 9, XP_ANIMATION_MS, 500.0);
    // frame timestamp earlier than the award
    assert_eq!(anim.sample(480.0), CountSample { value: 4, done: false });

    let instant = CountAnimation::new(4, 9, 0.0, 500.0);
    assert_eq!(instant.sample(500.0), CountSample { value: 9, done: true });
}
