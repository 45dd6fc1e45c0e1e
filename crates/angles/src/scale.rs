use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{AngleError, Result};

/// Number of angular units in one full turn.
#[derive(
    Debug, Copy, Clone, PartialEq, PartialOrd, derive_more::Display, derive_more::Into, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Scale(f64);

impl Scale {
    pub const DEGREES: Scale = Scale(360.0);
    pub const RADIANS: Scale = Scale(TAU);
    pub const GONS: Scale = Scale(400.0);
    pub const TURNS: Scale = Scale(1.0);

    pub fn new(units_per_turn: f64) -> Result<Self> {
        if units_per_turn.is_finite() && units_per_turn > 0.0 {
            Ok(Scale(units_per_turn))
        } else {
            tracing::debug!(units_per_turn, "rejecting scale");
            Err(AngleError::InvalidScale(units_per_turn))
        }
    }
    /// Skips validation. Zero, negative, or non-finite scales give NaN or nonsense downstream rather than errors.
    pub fn new_unchecked(units_per_turn: f64) -> Self {
        Scale(units_per_turn)
    }
    pub fn full_turn(&self) -> f64 {
        self.0
    }
    pub fn half_turn(&self) -> f64 {
        self.0 / 2.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::DEGREES
    }
}

impl TryFrom<f64> for Scale {
    type Error = AngleError;

    fn try_from(value: f64) -> Result<Self> {
        Scale::new(value)
    }
}
