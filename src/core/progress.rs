use crate::constants::{XP_ANIMATION_MS, XP_DEFAULT_HOVER, XP_STORAGE_KEY};
use crate::core::easing::CountAnimation;
use crate::core::storage::{read_or_absent, write_best_effort, KeyValueStore};
use fnv::FnvHashSet;

/// Where the counter lives and how long the display takes to catch up.
#[derive(Clone, Debug)]
pub struct ProgressParams {
    pub storage_key: &'static str,
    pub animation_ms: f64,
}

impl Default for ProgressParams {
    fn default() -> Self {
        Self {
            storage_key: XP_STORAGE_KEY,
            animation_ms: XP_ANIMATION_MS,
        }
    }
}

/// Persisted XP counter plus the per-session set of sections already credited.
///
/// The counter is read once on construction and written back on every award.
/// The guard set is never persisted, so a reload allows each section to award
/// again.
pub struct ProgressState<S: KeyValueStore> {
    value: u64,
    awarded: FnvHashSet<String>,
    store: S,
    params: ProgressParams,
}

impl<S: KeyValueStore> ProgressState<S> {
    pub fn load(store: S, params: ProgressParams) -> Self {
        let value = parse_counter(read_or_absent(&store, params.storage_key).as_deref());
        log::info!("[xp] loaded value={}", value);
        Self {
            value,
            awarded: FnvHashSet::default(),
            store,
            params,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add `amount` (clamped so the counter never drops below zero), persist
    /// it, and return the display animation from the previous value.
    pub fn award(&mut self, amount: i64, now_ms: f64) -> CountAnimation {
        let prev = self.value;
        let next = (i128::from(prev) + i128::from(amount)).clamp(0, i128::from(u64::MAX)) as u64;
        self.value = next;
        write_best_effort(&mut self.store, self.params.storage_key, &next.to_string());
        log::debug!("[xp] {:+} -> {}", amount, next);
        CountAnimation::new(prev, next, self.params.animation_ms, now_ms)
    }

    /// Award for a section at most once per session.
    pub fn award_section(
        &mut self,
        section: &str,
        amount: i64,
        now_ms: f64,
    ) -> Option<CountAnimation> {
        if !self.awarded.insert(section.to_string()) {
            return None;
        }
        log::info!("[xp] section '{}' credited {}", section, amount);
        Some(self.award(amount, now_ms))
    }

    #[cfg(test)]
    pub fn is_awarded(&self, section: &str) -> bool {
        self.awarded.contains(section)
    }
}

/// Split off a leading integer the way the page's `parseInt(s, 10)` reads it:
/// optional whitespace, optional sign, then at least one ASCII digit. Anything
/// after the digits is ignored. Returns the sign and the digit run.
fn leading_integer(raw: &str) -> Option<(bool, &str)> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    (end > 0).then(|| (negative, &rest[..end]))
}

/// Decode the stored counter from its leading digits ("40xp" reads as 40).
/// Absent text, text without leading digits, and negatives read as 0.
pub fn parse_counter(raw: Option<&str>) -> u64 {
    match raw.and_then(leading_integer) {
        Some((false, digits)) => digits.parse::<u64>().unwrap_or(u64::MAX),
        _ => 0,
    }
}

/// Amount for a card hover, taken from the leading integer of its `data-xp`
/// attribute ("5px" awards 5). Missing or digit-less values award 1.
pub fn hover_award(data_xp: Option<&str>) -> i64 {
    match data_xp.and_then(leading_integer) {
        Some((negative, digits)) => {
            let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
            if negative {
                -magnitude
            } else {
                magnitude
            }
        }
        None => XP_DEFAULT_HOVER,
    }
}
