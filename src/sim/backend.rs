//! Numeric backends for trajectory and decorative math
//!
//! The simulation only ever talks to a `&dyn TrajectoryBackend`. Which one it
//! gets is decided once, from the match configuration:
//! - [`NativeBackend`]: plain Rust arithmetic
//! - [`ForeignBackend`]: calls through a table of C-ABI routines
//!
//! Both must agree within floating-point tolerance for identical inputs.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ffi::ForeignRoutines;
use crate::consts::{BALL_SEGMENTS, CURVE_CONSTANT, CURVE_DEAD_ZONE, SIN_FREQUENCY};
use crate::polar_offset;

/// Which numeric implementation computes the hot math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackendKind {
    #[default]
    Native,
    Foreign,
}

impl BackendKind {
    pub const ALL: [BackendKind; 2] = [BackendKind::Native, BackendKind::Foreign];

    /// Tag used in the timing log
    pub fn label(&self) -> &'static str {
        match self {
            BackendKind::Native => "NATIVE",
            BackendKind::Foreign => "FOREIGN",
        }
    }

    /// Build the backend this tag names
    pub fn instantiate(self) -> Box<dyn TrajectoryBackend> {
        match self {
            BackendKind::Native => Box::new(NativeBackend),
            BackendKind::Foreign => Box::new(ForeignBackend::default()),
        }
    }
}

/// One pinwheel segment of the decorative ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    /// Radians
    pub start_angle: f32,
    /// Radians
    pub end_angle: f32,
    /// Rim point at `start_angle`; a spoke is drawn from the ball center to here
    pub spoke_end: Vec2,
}

/// The pure functions every backend provides
pub trait TrajectoryBackend: std::fmt::Debug {
    fn kind(&self) -> BackendKind;

    /// Straight-line displacement for one tick
    fn linear_delta(&self, velocity: f32, tick_rate: f32) -> f32;

    /// Displacement scaled by `sin(SIN_FREQUENCY * tick)`
    fn sin_delta(&self, velocity: f32, tick: u64, tick_rate: f32) -> f32;

    /// Vertical acceleration pulling the ball toward `center`'s horizontal
    /// axis. Exactly zero inside the dead zone.
    fn curve_correction(&self, pos: Vec2, center: Vec2) -> f32;

    /// One color channel of the center accent ring at `ring_radius`
    fn gradient_channel(&self, base: u8, outer_radius: f32, ring_radius: f32) -> u8;

    /// Geometry of pinwheel segment `index` of a ball rotated by `rotation`
    fn ball_sector(&self, center: Vec2, radius: f32, rotation: f32, index: u32) -> Sector;
}

/// Plain Rust arithmetic
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl TrajectoryBackend for NativeBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Native
    }

    #[inline]
    fn linear_delta(&self, velocity: f32, tick_rate: f32) -> f32 {
        velocity / tick_rate
    }

    #[inline]
    fn sin_delta(&self, velocity: f32, tick: u64, tick_rate: f32) -> f32 {
        (velocity / tick_rate) * (SIN_FREQUENCY * tick as f32).sin()
    }

    fn curve_correction(&self, pos: Vec2, center: Vec2) -> f32 {
        let d = pos - center;
        let norm = d.x * d.x + d.y * d.y;
        if norm < CURVE_DEAD_ZONE {
            return 0.0;
        }
        CURVE_CONSTANT * d.y / norm
    }

    fn gradient_channel(&self, base: u8, outer_radius: f32, ring_radius: f32) -> u8 {
        let lift = (outer_radius - ring_radius).max(0.0) * 0.5;
        (base as f32 + lift).min(255.0) as u8
    }

    fn ball_sector(&self, center: Vec2, radius: f32, rotation: f32, index: u32) -> Sector {
        let span = TAU / BALL_SEGMENTS as f32;
        let start_angle = rotation + index as f32 * span;
        Sector {
            start_angle,
            end_angle: start_angle + span,
            spoke_end: polar_offset(center, radius, start_angle),
        }
    }
}

/// Calls a C-ABI routine table for every operation
#[derive(Debug, Clone, Copy)]
pub struct ForeignBackend {
    routines: ForeignRoutines,
}

impl ForeignBackend {
    pub fn new(routines: ForeignRoutines) -> Self {
        Self { routines }
    }
}

impl Default for ForeignBackend {
    fn default() -> Self {
        Self::new(ForeignRoutines::exported())
    }
}

impl TrajectoryBackend for ForeignBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Foreign
    }

    fn linear_delta(&self, velocity: f32, tick_rate: f32) -> f32 {
        (self.routines.linear)(velocity, tick_rate)
    }

    fn sin_delta(&self, velocity: f32, tick: u64, tick_rate: f32) -> f32 {
        (self.routines.sin)(velocity, tick, tick_rate)
    }

    fn curve_correction(&self, pos: Vec2, center: Vec2) -> f32 {
        (self.routines.curve)(pos.x, pos.y, center.x, center.y)
    }

    fn gradient_channel(&self, base: u8, outer_radius: f32, ring_radius: f32) -> u8 {
        (self.routines.gradient)(base, outer_radius, ring_radius)
    }

    fn ball_sector(&self, center: Vec2, radius: f32, rotation: f32, index: u32) -> Sector {
        let raw = (self.routines.sector)(center.x, center.y, radius, rotation, index);
        Sector {
            start_angle: raw.start_angle,
            end_angle: raw.end_angle,
            spoke_end: Vec2::new(raw.spoke_x, raw.spoke_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_RATE;
    use proptest::prelude::*;

    const CENTER: Vec2 = Vec2::new(640.0, 400.0);

    fn backends() -> [Box<dyn TrajectoryBackend>; 2] {
        [BackendKind::Native.instantiate(), BackendKind::Foreign.instantiate()]
    }

    #[test]
    fn test_instantiate_matches_kind() {
        for kind in BackendKind::ALL {
            assert_eq!(kind.instantiate().kind(), kind);
        }
    }

    #[test]
    fn test_linear_delta() {
        for backend in backends() {
            assert!((backend.linear_delta(300.0, TICK_RATE) - 5.0).abs() < 1e-5);
            assert!((backend.linear_delta(-120.0, TICK_RATE) + 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sin_delta_zero_at_tick_zero() {
        for backend in backends() {
            assert_eq!(backend.sin_delta(300.0, 0, TICK_RATE), 0.0);
        }
    }

    #[test]
    fn test_sin_delta_peak() {
        // sin(0.05 * 31) ~= sin(1.55) ~= 0.9998
        let native = NativeBackend.sin_delta(600.0, 31, TICK_RATE);
        assert!((native - 10.0 * (1.55f32).sin()).abs() < 1e-4);
    }

    #[test]
    fn test_curve_dead_zone_is_exactly_zero() {
        for backend in backends() {
            assert_eq!(backend.curve_correction(CENTER, CENTER), 0.0);
            assert_eq!(backend.curve_correction(CENTER + Vec2::new(3.0, 3.9), CENTER), 0.0);
            assert_eq!(backend.curve_correction(CENTER + Vec2::new(0.0, -4.99), CENTER), 0.0);
        }
    }

    #[test]
    fn test_curve_outside_dead_zone() {
        for backend in backends() {
            // dy = 100, norm = 10000 -> 1000 * 100 / 10000 = 10
            let below = backend.curve_correction(CENTER + Vec2::new(0.0, 100.0), CENTER);
            assert!((below - 10.0).abs() < 1e-4);
            // Sign follows dy
            let above = backend.curve_correction(CENTER + Vec2::new(0.0, -100.0), CENTER);
            assert!((above + 10.0).abs() < 1e-4);
            // Exactly on the threshold is outside the dead zone
            let edge = backend.curve_correction(CENTER + Vec2::new(0.0, 5.0), CENTER);
            assert!((edge - 200.0).abs() < 1e-3);
            // Horizontal offset only: no vertical pull
            assert_eq!(backend.curve_correction(CENTER + Vec2::new(50.0, 0.0), CENTER), 0.0);
        }
    }

    #[test]
    fn test_gradient_channel_saturates() {
        for backend in backends() {
            assert_eq!(backend.gradient_channel(134, 128.0, 128.0), 134);
            assert_eq!(backend.gradient_channel(134, 128.0, 28.0), 184);
            assert_eq!(backend.gradient_channel(216, 128.0, 0.1), 255);
        }
    }

    #[test]
    fn test_ball_sectors_cover_full_turn() {
        for backend in backends() {
            let first = backend.ball_sector(CENTER, 10.0, 0.0, 0);
            let last = backend.ball_sector(CENTER, 10.0, 0.0, BALL_SEGMENTS - 1);
            assert!(first.start_angle.abs() < 1e-6);
            assert!((last.end_angle - TAU).abs() < 1e-4);
            assert!((first.spoke_end - Vec2::new(650.0, 400.0)).length() < 1e-4);
        }
    }

    proptest! {
        #[test]
        fn prop_sin_backends_agree(velocity in -1000.0f32..1000.0, tick in 0u64..100_000) {
            let native = NativeBackend.sin_delta(velocity, tick, TICK_RATE);
            let foreign = ForeignBackend::default().sin_delta(velocity, tick, TICK_RATE);
            prop_assert!((native - foreign).abs() < 1e-4, "native {} foreign {}", native, foreign);
        }

        #[test]
        fn prop_linear_backends_agree(velocity in -1000.0f32..1000.0) {
            let native = NativeBackend.linear_delta(velocity, TICK_RATE);
            let foreign = ForeignBackend::default().linear_delta(velocity, TICK_RATE);
            prop_assert!((native - foreign).abs() < 1e-4);
        }

        #[test]
        fn prop_curve_backends_agree(x in 0.0f32..1280.0, y in 0.0f32..800.0) {
            let pos = Vec2::new(x, y);
            let native = NativeBackend.curve_correction(pos, CENTER);
            let foreign = ForeignBackend::default().curve_correction(pos, CENTER);
            // Same dead-zone decision on both sides
            prop_assert_eq!(native == 0.0, foreign == 0.0);
            prop_assert!((native - foreign).abs() <= 1e-5 * native.abs().max(1.0));
        }

        #[test]
        fn prop_dead_zone(dx in -4.9f32..4.9, dy in -4.9f32..4.9) {
            prop_assume!(dx * dx + dy * dy < CURVE_DEAD_ZONE);
            let pos = CENTER + Vec2::new(dx, dy);
            for backend in backends() {
                prop_assert_eq!(backend.curve_correction(pos, CENTER), 0.0);
            }
        }

        #[test]
        fn prop_gradient_backends_agree(base in 0u8..=255, ring in 0.1f32..128.0) {
            let native = NativeBackend.gradient_channel(base, 128.0, ring);
            let foreign = ForeignBackend::default().gradient_channel(base, 128.0, ring);
            prop_assert_eq!(native, foreign);
        }
    }
}
