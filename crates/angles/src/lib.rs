//! Angle arithmetic that stays correct across the wrap-around point.
//!
//! Angles are plain `f64`s measured on a [`Scale`] (degrees unless told otherwise).
//! [`AngleMath`] binds a scale and carries every operation; [`shared`] offers the same
//! operations as free functions over one process-wide scale.

mod error;
pub use error::{AngleError, Result};

mod scale;
pub use scale::Scale;

mod angle_math;
pub use angle_math::AngleMath;

mod interpolation;
pub use interpolation::{RotationDirection, CANCELLATION_EPS};

mod conversions;
pub use conversions::BOUNDARY_EPS;

mod compass;
pub use compass::CompassDirection;

pub mod shared;

pub use misc_utilities::TrueMod;
