use crate::constants::*;
use crate::core::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;

/// Fill color in HSL space with an alpha channel, matching CSS `hsla()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub fn to_css(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Minimal drawing target for the render loop. The web frontend implements
/// this over `CanvasRenderingContext2d`; tests record the calls.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
}

/// Tuning for the particle field and the cursor trail.
#[derive(Clone, Debug)]
pub struct RenderParams {
    pub particle_count: usize,
    pub wrap_margin: f32,
    pub trail_max: usize,
    pub trail_burst: usize,
    pub trail_jitter: f32,
    pub life_step: f32,
    pub radius_decay: f32,
    pub life_min: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            wrap_margin: WRAP_MARGIN,
            trail_max: TRAIL_MAX,
            trail_burst: TRAIL_BURST,
            trail_jitter: TRAIL_JITTER,
            life_step: TRAIL_LIFE_STEP,
            radius_decay: TRAIL_RADIUS_DECAY,
            life_min: TRAIL_LIFE_MIN,
        }
    }
}

/// Long-lived drifting dot. Wraps around the viewport instead of bouncing.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub r: f32,
    pub hue: f32,
    pub alpha: f32,
}

impl AmbientParticle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
            ),
            r: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            hue: PARTICLE_HUE_MIN + rng.gen::<f32>() * PARTICLE_HUE_SPAN,
            alpha: PARTICLE_ALPHA_MIN + rng.gen::<f32>() * PARTICLE_ALPHA_SPAN,
        }
    }

    /// Move by one frame of velocity, wrapping once past `margin` off-screen.
    pub fn advance(&mut self, width: f32, height: f32, margin: f32) {
        self.pos += self.vel;
        self.pos.x = wrap_axis(self.pos.x, width, margin);
        self.pos.y = wrap_axis(self.pos.y, height, margin);
    }

    pub fn color(&self) -> Hsla {
        Hsla {
            hue: self.hue,
            saturation: PARTICLE_SATURATION,
            lightness: PARTICLE_LIGHTNESS,
            alpha: self.alpha,
        }
    }
}

#[inline]
fn wrap_axis(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

/// Short-lived dot spawned by pointer movement; fades and shrinks each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub life: f32,
    pub r: f32,
    pub hue: f32,
}

impl TrailPoint {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, at: Vec2, jitter: f32) -> Self {
        let offset = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * jitter;
        Self {
            pos: at + offset,
            life: 1.0,
            r: TRAIL_RADIUS_MIN + rng.gen::<f32>() * TRAIL_RADIUS_SPAN,
            hue: TRAIL_HUE_MIN + rng.gen::<f32>() * TRAIL_HUE_SPAN,
        }
    }

    /// Apply one frame of decay. Returns false once the point has expired.
    pub fn decay(&mut self, life_step: f32, radius_decay: f32, life_min: f32) -> bool {
        self.life -= life_step;
        self.r *= radius_decay;
        self.life > life_min
    }

    pub fn color(&self) -> Hsla {
        Hsla {
            hue: self.hue,
            saturation: TRAIL_SATURATION,
            lightness: TRAIL_LIGHTNESS,
            alpha: self.life * TRAIL_ALPHA_SCALE,
        }
    }
}

/// Everything the canvas animation mutates: the fixed particle pool, the
/// capped trail queue (oldest at the front) and the current viewport.
pub struct RenderState<R: Rng> {
    pub viewport: Viewport,
    pub particles: Vec<AmbientParticle>,
    pub trail: VecDeque<TrailPoint>,
    pub params: RenderParams,
    rng: R,
}

impl<R: Rng> RenderState<R> {
    pub fn new(viewport: Viewport, params: RenderParams, mut rng: R) -> Self {
        let particles = (0..params.particle_count)
            .map(|_| AmbientParticle::random(&mut rng, viewport.width, viewport.height))
            .collect();
        let trail = VecDeque::with_capacity(params.trail_max + params.trail_burst);
        Self {
            viewport,
            particles,
            trail,
            params,
            rng,
        }
    }

    /// Particles keep their positions; anything now outside the margin wraps
    /// on the next frame.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Spawn a burst of trail points around `at`, then drop the oldest so the
    /// queue never exceeds `trail_max`.
    pub fn on_pointer_move(&mut self, at: Vec2) {
        for _ in 0..self.params.trail_burst {
            let point = TrailPoint::spawn(&mut self.rng, at, self.params.trail_jitter);
            self.trail.push_back(point);
        }
        if self.trail.len() > self.params.trail_max {
            let excess = self.trail.len() - self.params.trail_max;
            self.trail.drain(..excess);
        }
    }

    /// Advance one animation frame and draw it.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let Viewport { width, height, .. } = self.viewport;
        surface.clear(width, height);

        let margin = self.params.wrap_margin;
        for p in self.particles.iter_mut() {
            p.advance(width, height, margin);
            surface.fill_circle(p.pos, p.r, p.color());
        }

        // newest first so removal does not disturb indices still to visit
        let RenderParams {
            life_step,
            radius_decay,
            life_min,
            ..
        } = self.params;
        for i in (0..self.trail.len()).rev() {
            let t = &mut self.trail[i];
            if !t.decay(life_step, radius_decay, life_min) {
                self.trail.remove(i);
                continue;
            }
            surface.fill_circle(t.pos, t.r, t.color());
        }
    }
}
