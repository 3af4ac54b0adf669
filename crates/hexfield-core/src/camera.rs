//! A minimal 2D pan/zoom camera and the screen→world seam used for culling.

use glam::{Affine2, Vec2};

/// Anything that can map screen-space points back to world space.
///
/// [`visible_range`](crate::visible_range) only needs this inverse mapping,
/// so an external camera implementation can plug in directly.
pub trait ViewTransform {
    fn screen_to_world(&self, screen: Vec2) -> Vec2;
}

/// Translate-then-scale world camera: `screen = (world - position) * zoom`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera2D {
    pub position: Vec2,
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera2D {
    pub fn new(position: Vec2, zoom: f32) -> Self {
        Self { position, zoom }
    }

    /// Current zoom factor.
    #[inline]
    pub fn zoom_factor(&self) -> f32 {
        self.zoom
    }

    /// Move the camera by a world-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Adjust zoom by `delta`, clamped away from zero and negative scales.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).max(f32::EPSILON);
    }

    /// The world→screen view transform, for renderer consumers.
    pub fn affine(&self) -> Affine2 {
        Affine2::from_scale(Vec2::splat(self.zoom)) * Affine2::from_translation(-self.position)
    }

    /// Map a world point to screen space.
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom
    }

    /// Map a screen point to world space.
    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom + self.position
    }
}

impl ViewTransform for Camera2D {
    #[inline]
    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.to_world(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_world_round_trip() {
        let cam = Camera2D::new(Vec2::new(40.0, -16.0), 2.0);
        let w = Vec2::new(123.0, 77.5);
        let s = cam.to_screen(w);
        assert_eq!(cam.to_world(s), w);
        assert_eq!(s, Vec2::new(166.0, 187.0));
    }

    #[test]
    fn affine_agrees_with_arithmetic() {
        let cam = Camera2D::new(Vec2::new(10.0, 20.0), 0.5);
        for w in [Vec2::ZERO, Vec2::new(64.0, 32.0), Vec2::new(-8.0, 5.0)] {
            let a = cam.affine().transform_point2(w);
            assert!((a - cam.to_screen(w)).length() < 1e-5);
        }
        let inv = cam.affine().inverse();
        let s = Vec2::new(100.0, 50.0);
        assert!((inv.transform_point2(s) - cam.to_world(s)).length() < 1e-4);
    }

    #[test]
    fn zoom_never_reaches_zero() {
        let mut cam = Camera2D::default();
        cam.zoom_by(-5.0);
        assert!(cam.zoom_factor() > 0.0);
    }
}
