use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::paint::Painter;
use crate::palette::Palette;

/// A single drifting point in the field.
///
/// The phase offsets are fixed at spawn: `color_offset` shifts where this
/// particle samples the shared palette cycle, `pulse_phase` desynchronizes
/// its size/alpha pulse from its neighbors.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub density: f32,
    pub color_offset: f32,
    pub pulse_phase: f32,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, extent: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen_range(0.0..extent.x.max(1.0)),
                rng.gen_range(0.0..extent.y.max(1.0)),
            ),
            vel: Vec2::new(
                rng.gen_range(-DRIFT_SPAN..DRIFT_SPAN),
                rng.gen_range(-DRIFT_SPAN..DRIFT_SPAN),
            ),
            size: rng.gen_range(SIZE_MIN..SIZE_MAX),
            density: rng.gen_range(DENSITY_MIN..DENSITY_MAX),
            color_offset: rng.gen_range(0.0..1.0),
            pulse_phase: rng.gen_range(0.0..std::f32::consts::TAU),
        }
    }

    /// Advance one frame: repelled while the pointer is near, otherwise drift
    /// with elastic reflection at the extent edges.
    pub fn update(&mut self, pointer: Option<Vec2>, extent: Vec2) {
        if let Some(p) = pointer {
            let away = self.pos - p;
            let distance = away.length();
            if distance < POINTER_RADIUS {
                // Direction is undefined at the pointer itself; hold still.
                if distance > MIN_POINTER_DISTANCE {
                    let falloff = (POINTER_RADIUS - distance) / POINTER_RADIUS;
                    self.pos += away / distance * falloff * self.density * POINTER_PUSH_SCALE;
                }
                return;
            }
        }
        // Flip only when past an edge and still heading outward, so a particle
        // shoved deep past the boundary recovers instead of re-flipping every
        // frame. Position is never clamped.
        if (self.pos.x < 0.0 && self.vel.x < 0.0) || (self.pos.x > extent.x && self.vel.x > 0.0) {
            self.vel.x = -self.vel.x;
        }
        if (self.pos.y < 0.0 && self.vel.y < 0.0) || (self.pos.y > extent.y && self.vel.y > 0.0) {
            self.vel.y = -self.vel.y;
        }
        self.pos += self.vel;
    }

    /// Pulse factor in [0.2, 0.8] derived from the shared cycle phase.
    pub fn pulse(&self, phase: f32) -> f32 {
        0.5 + 0.3 * (phase * PULSE_RATE + self.pulse_phase).sin()
    }

    pub fn draw<P: Painter>(&self, palette: &Palette, phase: f32, painter: &mut P) {
        let color = palette.color_at(phase + self.color_offset);
        let pulse = self.pulse(phase);
        let radius = self.size * (RADIUS_BASE + RADIUS_PULSE_SPAN * pulse);
        if self.size > GLOW_MIN_SIZE {
            painter.fill_circle(self.pos, radius * GLOW_RADIUS_MULT, color, GLOW_ALPHA);
        }
        painter.fill_circle(self.pos, radius, color, ALPHA_BASE + ALPHA_PULSE_SPAN * pulse);
    }
}
