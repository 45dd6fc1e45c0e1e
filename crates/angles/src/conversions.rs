use std::f64::consts::TAU;

use euclid::default::Point2D;
use misc_utilities::TrueMod;

use crate::angle_math::AngleMath;
use crate::scale::Scale;

/// Distance from a region boundary, in scale units, that [`AngleMath::quadrant`] treats as on the boundary.
pub const BOUNDARY_EPS: f64 = 1e-15;

impl AngleMath {
    /// Rescales `n` from this scale to `to`.
    pub fn convert(&self, n: f64, to: Scale) -> f64 {
        n / self.full_turn() * to.full_turn()
    }
    pub fn to_rad(&self, n: f64) -> f64 {
        self.convert(n, Scale::RADIANS)
    }
    pub fn to_deg(&self, n: f64) -> f64 {
        self.convert(n, Scale::DEGREES)
    }
    pub fn to_gon(&self, n: f64) -> f64 {
        self.convert(n, Scale::GONS)
    }

    /// Turns a fraction of a full turn into `[0, full turn)`, where `turns` is in `[0, 1)` give or take one turn.
    fn from_turns_wrapped(&self, turns: f64) -> f64 {
        ((1.0 + turns) * self.full_turn()).true_mod(self.full_turn())
    }

    /// Recovers the angle whose sine and cosine are `sin` and `cos`.
    ///
    /// Only the sign of `sin` is used, to pick the half of the circle, so the pair must come from the same angle.
    pub fn from_sin_cos(&self, sin: f64, cos: f64) -> f64 {
        let s = self.full_turn();
        let mut angle = (1.0 + cos.acos() / TAU) * s;
        if sin < 0.0 {
            angle = s - angle;
        }
        angle.true_mod(s)
    }

    /// Direction of the line from `p1` to `p2`, counter-clockwise from the positive x axis.
    ///
    /// NaN when the points coincide.
    pub fn from_slope(&self, p1: impl Into<Point2D<f64>>, p2: impl Into<Point2D<f64>>) -> f64 {
        let (p1, p2): (Point2D<f64>, Point2D<f64>) = (p1.into(), p2.into());
        let d = p2 - p1;
        if d.x == 0.0 && d.y == 0.0 {
            return f64::NAN;
        }
        self.from_turns_wrapped(d.y.atan2(d.x) / TAU)
    }

    /// 1-based index of the region containing `(x, y)` when the plane is cut into `k` equal wedges
    /// starting at the positive x axis, with the wedge boundaries moved by `shift`.
    ///
    /// Points on a boundary are in region 0. So are `k == 0` and non-finite input.
    pub fn quadrant(&self, x: f64, y: f64, k: u32, shift: f64) -> u32 {
        let s = self.full_turn();
        let phi = (y.atan2(x) + TAU) / TAU;
        if k == 0 || !phi.is_finite() {
            return 0;
        }
        let k = k as f64;
        if ((phi * s + shift) % (s / k)).abs() < BOUNDARY_EPS {
            return 0;
        }
        let region = (k * shift / s + k * phi).floor();
        1 + region.true_mod(k) as u32
    }

    /// Four quadrants, unrotated.
    pub fn quadrant_default(&self, x: f64, y: f64) -> u32 {
        self.quadrant(x, y, 4, 0.0)
    }
}
