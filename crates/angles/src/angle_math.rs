use misc_utilities::TrueMod;

use crate::error::Result;
use crate::scale::Scale;

/// Wrap-aware angle arithmetic against one fixed [`Scale`].
///
/// Angles are plain `f64`s in units of the scale and may lie outside `[0, full turn)`.
/// Nothing here validates its input: NaN and infinities propagate through the arithmetic.
#[derive(Debug, Default, Copy, Clone, PartialEq, derive_more::From)]
pub struct AngleMath {
    scale: Scale,
}

impl AngleMath {
    pub fn new(scale: Scale) -> Self {
        AngleMath { scale }
    }
    pub fn try_new(units_per_turn: f64) -> Result<Self> {
        Ok(Self::new(Scale::new(units_per_turn)?))
    }
    pub fn degrees() -> Self {
        Self::new(Scale::DEGREES)
    }
    pub fn radians() -> Self {
        Self::new(Scale::RADIANS)
    }
    pub fn gons() -> Self {
        Self::new(Scale::GONS)
    }
    pub fn scale(&self) -> Scale {
        self.scale
    }
    pub fn full_turn(&self) -> f64 {
        self.scale.full_turn()
    }
    pub fn half_turn(&self) -> f64 {
        self.scale.half_turn()
    }

    /// Into `[0, full turn)`
    pub fn normalize(&self, n: f64) -> f64 {
        n.true_mod(self.full_turn())
    }
    /// Into `[-half turn, half turn)`
    pub fn normalize_half(&self, n: f64) -> f64 {
        let h = self.half_turn();
        (n + h).true_mod(self.full_turn()) - h
    }

    /// Whether `n` lies on the arc going in the increasing direction from `a` to `b`, ends included.
    pub fn between(&self, n: f64, a: f64, b: f64) -> bool {
        let n = self.normalize(n);
        let a = self.normalize(a);
        let b = self.normalize(b);
        if a < b {
            a <= n && n <= b
        } else {
            // arc crosses zero
            a <= n || n <= b
        }
    }

    /// Raw remainder of the absolute difference. Unlike [`Self::distance`], this never takes the complementary arc.
    pub fn diff(&self, a: f64, b: f64) -> f64 {
        (b - a).abs() % self.full_turn()
    }

    /// Length of the shorter arc between `a` and `b`, in `[0, half turn]`.
    pub fn distance(&self, a: f64, b: f64) -> f64 {
        let mut d = self.normalize_half(a - b);
        if d > self.half_turn() {
            d -= self.full_turn();
        }
        d.abs()
    }

    /// Sign of the half-normalized `from - to`: `-1` when counter-clockwise is shorter, `1` otherwise.
    /// Exactly equal inputs give `0`; inputs a whole number of turns apart do not.
    pub fn shortest_direction(&self, from: f64, to: f64) -> i32 {
        if from == to {
            return 0;
        }
        if self.normalize_half(from - to) < 0.0 {
            -1
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AngleError;
    use more_asserts as ma;
    use ntest::{assert_about_eq, assert_false, assert_true};
    use pretty_assertions::assert_eq;

    fn deg() -> AngleMath {
        AngleMath::degrees()
    }

    #[test]
    fn test_constructors() {
        assert_about_eq!(AngleMath::default().full_turn(), 360.0);
        assert_about_eq!(AngleMath::radians().half_turn(), std::f64::consts::PI);
        assert_about_eq!(AngleMath::gons().full_turn(), 400.0);
        assert_eq!(AngleMath::from(Scale::GONS), AngleMath::gons());
        assert_eq!(AngleMath::try_new(0.0), Err(AngleError::InvalidScale(0.0)));
        assert_eq!(AngleMath::try_new(60.0).map(|m| m.full_turn()), Ok(60.0));
    }

    mod normalization {
        use super::*;
        macro_rules! tests_for_normalize {
            ($($name:ident: $value:expr,)*) => {
                $(
                    #[test]
                    fn $name() {
                        let (input, full, half) = $value;
                        assert_about_eq!(deg().normalize(input), full);
                        assert_about_eq!(deg().normalize_half(input), half);
                    }
                )*
            }
        }
        tests_for_normalize! {
            // input, normalized, half-normalized
            already_normal: (55.0, 55.0, 55.0),
            one_turn_over: (55.0 + 360.0, 55.0, 55.0),
            small_negative: (-55.0, 305.0, -55.0),
            past_negative_half: (-190.0, 170.0, 170.0),
            exactly_half: (180.0, 180.0, -180.0),
            exactly_full: (360.0, 0.0, 0.0),
            many_turns_back: (-1090.0, 350.0, -10.0),
        }
    }

    #[test]
    fn test_normalize_ranges() {
        (-2000..2000).map(|i| i as f64 * 0.37).for_each(|n| {
            let full = deg().normalize(n);
            let half = deg().normalize_half(n);
            ma::assert_ge!(full, 0.0);
            ma::assert_lt!(full, 360.0);
            ma::assert_ge!(half, -180.0);
            ma::assert_lt!(half, 180.0);
        });
    }

    #[test]
    fn test_between() {
        assert_true!(deg().between(38.0, 13.0, 45.0));
        assert_false!(deg().between(38.0, 40.0, 45.0));
        assert_true!(deg().between(38.0 + 360.0 * 3.0, 13.0 - 360.0 * 2.0, 45.0 + 360.0));
        assert_true!(AngleMath::try_new(60.0).unwrap().between(12.0, 5.0, 18.0));
        assert_true!(AngleMath::try_new(12.0).unwrap().between(15.0, 2.0, 18.0));
    }
    #[test]
    fn test_between_wrapping_arc() {
        assert_true!(deg().between(0.0, 350.0, 10.0));
        assert_true!(deg().between(355.0, 350.0, 10.0));
        assert_true!(deg().between(5.0, 350.0, 10.0));
        assert_false!(deg().between(180.0, 350.0, 10.0));
    }
    #[test]
    fn test_between_is_inclusive_at_both_ends() {
        assert_true!(deg().between(13.0, 13.0, 45.0));
        assert_true!(deg().between(45.0, 13.0, 45.0));
        assert_true!(deg().between(350.0, 350.0, 10.0));
        assert_true!(deg().between(10.0, 350.0, 10.0));
    }

    #[test]
    fn test_diff_does_not_take_the_short_way() {
        assert_about_eq!(deg().diff(1.0, 359.0), 358.0);
        assert_about_eq!(deg().diff(359.0, 1.0), 358.0);
        assert_about_eq!(deg().diff(10.0, 10.0 + 720.0 + 5.0), 5.0);
    }

    mod distance {
        use super::*;
        macro_rules! tests_for_distance {
            ($($name:ident: $value:expr,)*) => {
                $(
                    #[test]
                    fn $name() {
                        let (a, b, expected) = $value;
                        assert_about_eq!(deg().distance(a, b), expected);
                        assert_about_eq!(deg().distance(b, a), expected);
                    }
                )*
            }
        }
        tests_for_distance! {
            // a, b, distance
            wraparound: (1.0, 359.0, 2.0),
            wraparound_other_way: (358.0, 1.0, 3.0),
            no_wrap: (18.0, 25.0, 7.0),
            same: (20.0, 20.0, 0.0),
            same_mod_turn: (20.0, 380.0, 0.0),
            opposite: (0.0, 180.0, 180.0),
            far_out: (-710.0, 725.0, 5.0),
        }
    }

    #[test]
    fn test_shortest_direction() {
        assert_eq!(deg().shortest_direction(50.0, 60.0), -1);
        assert_eq!(deg().shortest_direction(60.0, 50.0), 1);
        assert_eq!(deg().shortest_direction(60.0 + 360.0 * 3.0, 50.0 + 360.0 * 7.0), 1);
        assert_eq!(deg().shortest_direction(60.0 - 360.0 * 3.0, 50.0 - 360.0 * 7.0), 1);
        assert_eq!(deg().shortest_direction(350.0, 10.0), -1);
    }
    #[test]
    fn test_shortest_direction_of_equal_angles_is_zero() {
        assert_eq!(deg().shortest_direction(42.0, 42.0), 0);
        // only raw equality counts
        assert_eq!(deg().shortest_direction(42.0, 42.0 + 360.0), 1);
    }
    #[test]
    fn test_nan_propagates() {
        assert!(deg().normalize(f64::NAN).is_nan());
        assert!(deg().distance(f64::NAN, 3.0).is_nan());
        assert!(AngleMath::new(Scale::new_unchecked(0.0)).normalize(10.0).is_nan());
    }
}
