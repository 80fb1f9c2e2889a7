use crate::constants::{DPR_MAX, DPR_MIN};

/// Drawable area in CSS pixels plus the pixel density of the backing raster.
///
/// Particles and trail points live in logical (CSS) coordinates; only the
/// canvas backing store is scaled by `dpr`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: css_width.max(0.0) as f32,
            height: css_height.max(0.0) as f32,
            dpr: clamp_dpr(device_pixel_ratio),
        }
    }

    /// Physical size of the backing raster, never below 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width as f64 * self.dpr).round() as u32;
        let h = (self.height as f64 * self.dpr).round() as u32;
        (w.max(1), h.max(1))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, DPR_MIN)
    }
}

/// Clamp a reported device pixel ratio to [1, 2]. Missing or bogus values
/// (zero, negative, NaN) fall back to 1.
#[inline]
pub fn clamp_dpr(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}
