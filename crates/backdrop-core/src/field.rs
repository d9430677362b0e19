use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::*;
use crate::paint::Painter;
use crate::palette::{CycleClock, Palette};
use crate::particle::Particle;

/// Device/motion tier that sizes the batch and tunes the connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionProfile {
    Full,
    ReducedMotion,
    ConstrainedDevice,
}

impl MotionProfile {
    /// Reduced motion wins over a constrained viewport when both apply.
    pub fn select(prefers_reduced_motion: bool, constrained_device: bool) -> Self {
        if prefers_reduced_motion {
            MotionProfile::ReducedMotion
        } else if constrained_device {
            MotionProfile::ConstrainedDevice
        } else {
            MotionProfile::Full
        }
    }

    fn density_factor(self) -> f32 {
        match self {
            MotionProfile::Full => DENSITY_FACTOR_FULL,
            MotionProfile::ReducedMotion => DENSITY_FACTOR_REDUCED,
            MotionProfile::ConstrainedDevice => DENSITY_FACTOR_CONSTRAINED,
        }
    }

    fn max_particles(self) -> usize {
        match self {
            MotionProfile::Full => MAX_PARTICLES_FULL,
            MotionProfile::ReducedMotion => MAX_PARTICLES_REDUCED,
            MotionProfile::ConstrainedDevice => MAX_PARTICLES_CONSTRAINED,
        }
    }

    pub fn link_distance(self) -> f32 {
        match self {
            MotionProfile::Full => LINK_DISTANCE_FULL,
            _ => LINK_DISTANCE_CONSTRAINED,
        }
    }
}

/// Deterministic batch size for a given extent and profile.
pub fn particle_count(extent: Vec2, profile: MotionProfile) -> usize {
    let by_area = (extent.x * extent.y / profile.density_factor()) as usize;
    by_area.min(profile.max_particles())
}

/// Owns the particle batch, the shared cycle clock, and the connector pass.
///
/// Membership is fixed between rebuilds: resize and profile changes discard
/// the whole batch and respawn it, never grow or shrink it in place.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    palette: Palette,
    clock: CycleClock,
    extent: Vec2,
    profile: MotionProfile,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(extent: Vec2, profile: MotionProfile, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            palette: Palette::site(),
            clock: CycleClock::new(),
            extent,
            profile,
            rng: StdRng::seed_from_u64(seed),
        };
        field.spawn_batch();
        field
    }

    /// Discard the batch and respawn it for a new extent/profile.
    pub fn rebuild(&mut self, extent: Vec2, profile: MotionProfile) {
        self.extent = extent;
        self.profile = profile;
        self.spawn_batch();
    }

    fn spawn_batch(&mut self) {
        let count = particle_count(self.extent, self.profile);
        self.particles = (0..count)
            .map(|_| Particle::spawn(&mut self.rng, self.extent))
            .collect();
        log::info!(
            "[field] spawned {} particles for {:.0}x{:.0} ({:?})",
            count,
            self.extent.x,
            self.extent.y,
            self.profile
        );
    }

    /// Advance one frame: clock, per-particle update+draw in insertion order,
    /// then the connector pass.
    pub fn step<P: Painter>(&mut self, pointer: Option<Vec2>, painter: &mut P) {
        self.clock.advance();
        let phase = self.clock.phase();
        let extent = self.extent;
        for particle in &mut self.particles {
            particle.update(pointer, extent);
            particle.draw(&self.palette, phase, painter);
        }
        self.connect(phase, painter);
    }

    /// Pairwise proximity pass. The squared-distance reject keeps the common
    /// too-far case free of square roots; the sizing cap keeps the O(n^2)
    /// loop bounded.
    fn connect<P: Painter>(&self, phase: f32, painter: &mut P) {
        let threshold = self.profile.link_distance();
        let threshold_sq = threshold * threshold;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist_sq = a.pos.distance_squared(b.pos);
                if dist_sq > threshold_sq {
                    continue;
                }
                let distance = dist_sq.sqrt();
                let opacity = (1.0 - distance / threshold) * LINK_ALPHA_SCALE;
                let color = self
                    .palette
                    .color_at(phase + a.color_offset)
                    .blend(self.palette.color_at(phase + b.color_offset));
                painter.line(a.pos, b.pos, color, opacity, LINK_WIDTH);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clock_phase(&self) -> f32 {
        self.clock.phase()
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    pub fn profile(&self) -> MotionProfile {
        self.profile
    }
}
