//! C-ABI routine set used by the foreign backend
//!
//! The routines below are exported unmangled as `pong_*`. Another
//! implementation (e.g. a hand-written assembly object) is plugged in by
//! declaring its differently named `extern "C"` symbols and building a
//! [`ForeignRoutines`] table from them; reusing the `pong_*` names would
//! clash at link time. The default table points at the implementations
//! below, which trade the native path's plain divisions for reciprocal
//! multiplies and evaluate the sine in double precision.

use std::os::raw::{c_float, c_uchar, c_uint, c_ulonglong};

use crate::consts::{BALL_SEGMENTS, CURVE_CONSTANT, CURVE_DEAD_ZONE, SIN_FREQUENCY};

/// Pinwheel segment as returned across the C boundary
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CSector {
    pub start_angle: c_float,
    pub end_angle: c_float,
    pub spoke_x: c_float,
    pub spoke_y: c_float,
}

pub type LinearFn = extern "C" fn(velocity: c_float, tick_rate: c_float) -> c_float;
pub type SinFn = extern "C" fn(velocity: c_float, tick: c_ulonglong, tick_rate: c_float) -> c_float;
pub type CurveFn = extern "C" fn(x: c_float, y: c_float, center_x: c_float, center_y: c_float) -> c_float;
pub type GradientFn = extern "C" fn(base: c_uchar, outer: c_float, ring: c_float) -> c_uchar;
pub type SectorFn = extern "C" fn(
    center_x: c_float,
    center_y: c_float,
    radius: c_float,
    rotation: c_float,
    index: c_uint,
) -> CSector;

/// Function-pointer table the foreign backend dispatches through
#[derive(Debug, Clone, Copy)]
pub struct ForeignRoutines {
    pub linear: LinearFn,
    pub sin: SinFn,
    pub curve: CurveFn,
    pub gradient: GradientFn,
    pub sector: SectorFn,
}

impl ForeignRoutines {
    /// The routines exported by this crate
    pub const fn exported() -> Self {
        Self {
            linear: pong_linear_delta,
            sin: pong_sin_delta,
            curve: pong_curve_correction,
            gradient: pong_gradient_channel,
            sector: pong_ball_sector,
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn pong_linear_delta(velocity: c_float, tick_rate: c_float) -> c_float {
    velocity * tick_rate.recip()
}

#[unsafe(no_mangle)]
pub extern "C" fn pong_sin_delta(velocity: c_float, tick: c_ulonglong, tick_rate: c_float) -> c_float {
    let phase = SIN_FREQUENCY * tick as c_float;
    let wave = (phase as f64).sin() as c_float;
    velocity * tick_rate.recip() * wave
}

#[unsafe(no_mangle)]
pub extern "C" fn pong_curve_correction(
    x: c_float,
    y: c_float,
    center_x: c_float,
    center_y: c_float,
) -> c_float {
    let dx = x - center_x;
    let dy = y - center_y;
    let norm = dx * dx + dy * dy;
    if norm < CURVE_DEAD_ZONE {
        return 0.0;
    }
    (CURVE_CONSTANT as f64 * dy as f64 / norm as f64) as c_float
}

#[unsafe(no_mangle)]
pub extern "C" fn pong_gradient_channel(base: c_uchar, outer: c_float, ring: c_float) -> c_uchar {
    let lift = (outer - ring).max(0.0) * 0.5;
    (base as c_float + lift).clamp(0.0, 255.0) as c_uchar
}

#[unsafe(no_mangle)]
pub extern "C" fn pong_ball_sector(
    center_x: c_float,
    center_y: c_float,
    radius: c_float,
    rotation: c_float,
    index: c_uint,
) -> CSector {
    let span = std::f32::consts::TAU / BALL_SEGMENTS as c_float;
    let start_angle = rotation + span * index as c_float;
    let (sin, cos) = start_angle.sin_cos();
    CSector {
        start_angle,
        end_angle: start_angle + span,
        spoke_x: radius.mul_add(cos, center_x),
        spoke_y: radius.mul_add(sin, center_y),
    }
}
