use crate::constants::{TILT_LIFT_PX, TILT_MAX_DEG};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl Tilt {
    pub fn to_css_transform(&self) -> String {
        format!(
            "translateY(-{}px) rotateX({}deg) rotateY({}deg)",
            TILT_LIFT_PX, self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

/// Map a pointer position over a card's client rect to a tilt. The card leans
/// toward the pointer: top edge tips back (negative X), left edge swings
/// forward (positive Y). Degenerate rects produce no tilt.
pub fn tilt_for_pointer(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<Tilt> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let px = (client_x - left) / width;
    let py = (client_y - top) / height;
    Some(Tilt {
        rotate_x_deg: (py - 0.5) * TILT_MAX_DEG,
        rotate_y_deg: (0.5 - px) * TILT_MAX_DEG,
    })
}
