use serde::{Deserialize, Serialize};
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};

use misc_utilities::TrueMod;

use crate::angle_math::AngleMath;

/// The 8-point compass rose, clockwise from north.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    EnumCountMacro,
    Serialize,
    Deserialize,
)]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

use CompassDirection::*;
const ROSE: [CompassDirection; CompassDirection::COUNT] = [N, NE, E, SE, S, SW, W, NW];

impl CompassDirection {
    /// Wraps, so 8 is N again and -1 is NW.
    pub fn from_index(index: i64) -> Self {
        ROSE[index.true_mod(Self::COUNT as i64) as usize]
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
    pub fn label(&self) -> &'static str {
        (*self).into()
    }
    pub fn next_cw(&self) -> Self {
        Self::from_index(self.index() as i64 + 1)
    }
    pub fn next_ccw(&self) -> Self {
        Self::from_index(self.index() as i64 - 1)
    }
}

impl AngleMath {
    /// Nearest compass point. Each point owns the sector of width `full turn / 8` centered on it,
    /// and a tie goes to the next point clockwise.
    ///
    /// Non-finite angles have no nearest point and fall back to N; use [`Self::try_compass`] to catch them.
    pub fn compass(&self, angle: f64) -> CompassDirection {
        self.try_compass(angle).unwrap_or(N)
    }
    /// `None` for NaN and infinite angles.
    pub fn try_compass(&self, angle: f64) -> Option<CompassDirection> {
        let nearest = round_half_up(angle / self.full_turn() * CompassDirection::COUNT as f64);
        nearest.is_finite().then(|| CompassDirection::from_index(nearest as i64))
    }
    pub fn compass_label(&self, angle: f64) -> &'static str {
        self.compass(angle).label()
    }
}

/// Nearest integer, ties toward +∞.
fn round_half_up(x: f64) -> f64 {
    // x - floor(x) is exact, unlike x + 0.5
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
