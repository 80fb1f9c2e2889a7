/// Quartic ease-out: fast start, long settle. `p` is expected in [0, 1].
#[inline]
pub fn ease_out_quart(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(4)
}

/// One sample of a running counter animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountSample {
    pub value: u64,
    pub done: bool,
}

/// Eased integer count from `from` to `to` over `duration_ms`.
///
/// Time is injected: the caller passes the start timestamp and then feeds
/// `sample` with frame timestamps in the same clock (milliseconds). There is no
/// cancellation; a newer animation simply writes over an older one.
#[derive(Clone, Debug, PartialEq)]
pub struct CountAnimation {
    pub from: u64,
    pub to: u64,
    pub duration_ms: f64,
    pub start_ms: f64,
}

impl CountAnimation {
    pub fn new(from: u64, to: u64, duration_ms: f64, start_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            start_ms,
        }
    }

    /// Progress in [0, 1] at `now_ms`. A non-positive duration completes at once.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let p = (now_ms - self.start_ms) / self.duration_ms;
        if p.is_nan() {
            return 1.0;
        }
        p.clamp(0.0, 1.0)
    }

    /// Displayed integer at progress `p`, floored like the page counter.
    pub fn value_at(&self, p: f64) -> u64 {
        if p >= 1.0 {
            return self.to;
        }
        let from = self.from as f64;
        let span = self.to as f64 - from;
        (from + span * ease_out_quart(p)).floor().max(0.0) as u64
    }

    pub fn sample(&self, now_ms: f64) -> CountSample {
        let p = self.progress(now_ms);
        CountSample {
            value: self.value_at(p),
            done: p >= 1.0,
        }
    }
}
