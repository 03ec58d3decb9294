//! Physical pixel values.
//!
//! All component geometry is expressed in whole pixels. Fractional centers
//! (half an item height, half a viewport) are avoided by comparing doubled
//! coordinates; see [`Px::doubled`].

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A physical pixel coordinate or length.
///
/// Negative values are allowed so scroll offsets and distances can be
/// expressed without conversions.
///
/// # Examples
///
/// ```
/// use tour_ui::Px;
///
/// let item_height = Px::new(30);
/// let offset = item_height * 3;
/// assert_eq!(offset, Px(90));
/// assert_eq!(offset.doubled(), 180);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a pixel value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Twice this value, used to compare centers without fractions.
    pub fn doubled(self) -> i64 {
        i64::from(self.0) * 2
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<i32> for Px {
    type Output = Px;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<i32> for Px {
    type Output = Px;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}
