use glam::Vec2;

use crate::palette::Rgb;

/// Minimal drawing surface the field renders through.
///
/// The web front-end backs this with a 2D canvas context; tests use a
/// recording implementation. Clearing between frames is the loop's job, not
/// the painter's.
pub trait Painter {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32);
}
