use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// A length in device pixels. All bounds, widths, heights, and coordinates in a
/// label layout are expressed in pixels, with the origin at the top-left corner
/// and `y` growing downwards.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum, Display, From, Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Truncate towards zero to a whole pixel. Line heights and shrunk font sizes
    /// are always whole pixels, and every layout pass must truncate the same way.
    pub fn trunc(self) -> Px {
        Px(self.0.trunc())
    }

    /// Round to two decimal places, used for auto-sized content widths so that
    /// repeated passes over the same text never accumulate float noise
    pub fn round_hundredths(self) -> Px {
        Px((self.0 * 100.0).round() / 100.0)
    }

    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// How many times `other` fits into `self`
    pub fn ratio(self, other: Px) -> f32 {
        self.0 / other.0
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Mul<Px> for f32 {
    type Output = Px;

    fn mul(self, rhs: Px) -> Px {
        Px(self * rhs.0)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Px {
        Px(-self.0)
    }
}
