//! This module contains a struct, [`Coord`], that models a point in 3D space and
//! supports the small amount of vector math the color engine needs: componentwise addition and
//! subtraction, scaling, interpolation and distance. Any color that converts to and from a `Coord`
//! lines its components up with the axes in the order of the letters in its name: `CIELCHColor`
//! puts `l` on the x-axis, `c` on the y-axis and `h` on the z-axis.

use num::{Num, NumCast, ToPrimitive};
use std::ops::{Add, Mul, Sub};

/// A scalar that a [`Coord`] can be multiplied by. Anything numeric from [`num`] qualifies.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space.
///
/// # Example
/// ```
/// # use worldview_hue::coord::Coord;
/// let low = Coord{x: 20., y: 40., z: 25.};
/// let high = Coord{x: 80., y: 120., z: 25.};
/// let mid = low.lerp(&high, 0.5);
/// assert_eq!(mid, Coord{x: 50., y: 80., z: 25.});
/// let diff = high - low;
/// assert_eq!(diff * 2u8, Coord{x: 120., y: 160., z: 0.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication only: there's no single obvious product of two points
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r = rhs.to_f64().unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl Coord {
    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`. Values of `t` outside
    /// [0, 1] extrapolate along the same line.
    pub fn lerp(&self, other: &Coord, t: f64) -> Coord {
        *self + (*other - *self) * t
    }

    /// The Euclidean distance between two points. In a cylindrical space like CIELCH this is not a
    /// perceptual distance: hue is an angle, so two points 359 degrees apart are neighbours. Use it
    /// on the lightness and chroma axes, or on rectangular spaces like CIELAB.
    /// # Example
    /// ```
    /// # use worldview_hue::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// assert!((point1.euclidean_distance(&point2) - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// True if every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
