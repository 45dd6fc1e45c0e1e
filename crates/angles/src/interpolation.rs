use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::angle_math::AngleMath;
use crate::error::{AngleError, Result};

/// Below this resultant length per averaged angle, the unit vectors are treated as cancelling out.
pub const CANCELLATION_EPS: f64 = 1e-12;

/// Which way [`AngleMath::lerp`] travels around the circle.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    /// Increasing, with an extra full turn when `a < b`
    #[default]
    Unspecified,
    /// Decreasing
    Clockwise,
    /// Increasing
    CounterClockwise,
}

impl RotationDirection {
    /// Signed full turns added to the span so `p = 1` still lands on `b` after wrapping.
    fn offset_turns(&self, a_before_b: bool) -> f64 {
        match (self, a_before_b) {
            (RotationDirection::Unspecified, _) => -1.0,
            (RotationDirection::Clockwise, true) => 1.0,
            (RotationDirection::Clockwise, false) => 0.0,
            (RotationDirection::CounterClockwise, true) => 0.0,
            (RotationDirection::CounterClockwise, false) => -1.0,
        }
    }
}

/// `0` is unspecified, `1` is clockwise, anything else counter-clockwise.
impl From<i32> for RotationDirection {
    fn from(value: i32) -> Self {
        match value {
            0 => RotationDirection::Unspecified,
            1 => RotationDirection::Clockwise,
            _ => RotationDirection::CounterClockwise,
        }
    }
}

impl From<Option<RotationDirection>> for RotationDirection {
    fn from(value: Option<RotationDirection>) -> Self {
        value.unwrap_or_default()
    }
}

impl AngleMath {
    /// Interpolates from `a` (at `p = 0`) to `b` (at `p = 1`) around the circle in direction `dir`.
    ///
    /// Both ends are normalized first, and so is the result.
    pub fn lerp(&self, a: f64, b: f64, p: f64, dir: impl Into<RotationDirection>) -> f64 {
        let a = self.normalize(a);
        let b = self.normalize(b);
        if a == b {
            return a;
        }
        let offset = dir.into().offset_turns(a < b) * self.full_turn();
        self.normalize(a + p * (b - a - offset))
    }

    /// Circular mean by summing unit vectors, in `[-S/2, S/2]`.
    ///
    /// Gives NaN for an empty input or when the vectors cancel (e.g. two opposite angles).
    /// Use [`Self::try_average`] to tell those apart.
    pub fn average(&self, angles: impl IntoIterator<Item = f64>) -> f64 {
        self.try_average(angles).unwrap_or(f64::NAN)
    }

    pub fn try_average(&self, angles: impl IntoIterator<Item = f64>) -> Result<f64> {
        let (count, sin_sum, cos_sum) =
            angles
                .into_iter()
                .fold((0usize, 0.0f64, 0.0f64), |(count, sin_sum, cos_sum), angle| {
                    let rad = self.to_rad(angle);
                    (count + 1, sin_sum + rad.sin(), cos_sum + rad.cos())
                });
        if count == 0 {
            return Err(AngleError::EmptyInput);
        }
        let resultant = sin_sum.hypot(cos_sum);
        if resultant < CANCELLATION_EPS * count as f64 {
            tracing::debug!(count, resultant, "averaged angles cancel out");
            return Err(AngleError::Cancellation);
        }
        Ok(sin_sum.atan2(cos_sum) / TAU * self.full_turn())
    }
}
