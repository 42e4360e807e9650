//! Typed angle used across the pipeline.
//!
//! Stored as radians so the trigonometry in the horizontal transform needs no
//! conversion; catalog and site values come in as hours or degrees and go out
//! as degrees at the display boundary.
//!
//! ```
//! use celestial_tuning::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-10);
//! ```

use core::ops::Sub;
use std::f64::consts::TAU;

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// One hour of right ascension or hour angle is 15 degrees.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * 15.0).to_radians(),
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    /// Wraps into `[0, 2pi)`.
    ///
    /// ```
    /// use celestial_tuning::Angle;
    ///
    /// let az = Angle::from_degrees(-90.0).normalized();
    /// assert!((az.degrees() - 270.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: wrap_0_2pi(self.rad),
        }
    }
}

fn wrap_0_2pi(rad: f64) -> f64 {
    let w = libm::fmod(rad, TAU);
    let w = if w < 0.0 { w + TAU } else { w };
    // fmod of a tiny negative value can round back up to exactly TAU
    if w >= TAU {
        0.0
    } else {
        w
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.rad - rhs.rad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hours_are_fifteen_degrees() {
        assert_abs_diff_eq!(Angle::from_hours(1.0).degrees(), 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::from_degrees(45.0).hours(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn normalized_wraps_negative() {
        let a = Angle::from_degrees(-30.0).normalized();
        assert_abs_diff_eq!(a.degrees(), 330.0, epsilon = 1e-10);
    }

    #[test]
    fn normalized_wraps_past_full_turn() {
        let a = Angle::from_degrees(725.0).normalized();
        assert_abs_diff_eq!(a.degrees(), 5.0, epsilon = 1e-10);
    }

    #[test]
    fn normalized_never_returns_full_turn() {
        let a = Angle::from_radians(-1e-18).normalized();
        assert!(a.radians() < TAU);
        assert!(a.radians() >= 0.0);
    }

    #[test]
    fn difference_is_unwrapped() {
        let lst = Angle::from_radians(0.25);
        let ra = Angle::from_radians(1.0);
        assert_eq!((lst - ra).radians(), -0.75);
    }
}
