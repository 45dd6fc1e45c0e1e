//! Free functions against one process-wide scale.
//!
//! Every call reads the scale at call time. Changing it while other threads are mid-calculation is
//! not coordinated, so prefer passing an [`AngleMath`] around when more than one scale is in play.

use std::sync::RwLock;

use euclid::default::Point2D;
use lazy_static::lazy_static;

use crate::angle_math::AngleMath;
use crate::compass::CompassDirection;
use crate::error::Result;
use crate::interpolation::RotationDirection;
use crate::scale::Scale;

pub const DEFAULT_SCALE: f64 = 360.0;

lazy_static! {
    static ref SCALE: RwLock<f64> = RwLock::new(DEFAULT_SCALE);
}

pub fn scale() -> f64 {
    // poison is harmless for a bare f64
    *SCALE.read().unwrap_or_else(|e| e.into_inner())
}

/// Accepts any value, degenerate ones included.
pub fn set_scale(units_per_turn: f64) {
    tracing::trace!(units_per_turn, "setting shared scale");
    *SCALE.write().unwrap_or_else(|e| e.into_inner()) = units_per_turn;
}

pub fn try_set_scale(units_per_turn: f64) -> Result<()> {
    let scale = Scale::new(units_per_turn)?;
    set_scale(scale.full_turn());
    Ok(())
}

pub fn reset_scale() {
    set_scale(DEFAULT_SCALE);
}

/// Snapshot of the current scale.
pub fn calculator() -> AngleMath {
    AngleMath::new(Scale::new_unchecked(scale()))
}

pub fn normalize(n: f64) -> f64 {
    calculator().normalize(n)
}
pub fn normalize_half(n: f64) -> f64 {
    calculator().normalize_half(n)
}
pub fn shortest_direction(from: f64, to: f64) -> i32 {
    calculator().shortest_direction(from, to)
}
pub fn between(n: f64, a: f64, b: f64) -> bool {
    calculator().between(n, a, b)
}
pub fn diff(a: f64, b: f64) -> f64 {
    calculator().diff(a, b)
}
pub fn distance(a: f64, b: f64) -> f64 {
    calculator().distance(a, b)
}
pub fn to_rad(n: f64) -> f64 {
    calculator().to_rad(n)
}
pub fn to_deg(n: f64) -> f64 {
    calculator().to_deg(n)
}
pub fn to_gon(n: f64) -> f64 {
    calculator().to_gon(n)
}
pub fn from_sin_cos(sin: f64, cos: f64) -> f64 {
    calculator().from_sin_cos(sin, cos)
}
pub fn from_slope(p1: impl Into<Point2D<f64>>, p2: impl Into<Point2D<f64>>) -> f64 {
    calculator().from_slope(p1, p2)
}
pub fn quadrant(x: f64, y: f64, k: u32, shift: f64) -> u32 {
    calculator().quadrant(x, y, k, shift)
}
pub fn quadrant_default(x: f64, y: f64) -> u32 {
    calculator().quadrant_default(x, y)
}
pub fn compass(angle: f64) -> CompassDirection {
    calculator().compass(angle)
}
pub fn try_compass(angle: f64) -> Option<CompassDirection> {
    calculator().try_compass(angle)
}
pub fn lerp(a: f64, b: f64, p: f64, dir: impl Into<RotationDirection>) -> f64 {
    calculator().lerp(a, b, p, dir)
}
pub fn average(angles: impl IntoIterator<Item = f64>) -> f64 {
    calculator().average(angles)
}
pub fn try_average(angles: impl IntoIterator<Item = f64>) -> Result<f64> {
    calculator().try_average(angles)
}
