use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A distance in device pixels. Kept fractional because glyph advances scale
/// fractionally with font size; values are rounded only at the final
/// placement step.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Px(pub f32);

impl Px {
    /// Round to the nearest whole pixel coordinate.
    pub fn round(self) -> i32 {
        self.0.round() as i32
    }

    /// Truncate towards negative infinity, for coordinates that come from
    /// integer division.
    pub fn floor(self) -> i32 {
        self.0.floor() as i32
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}
