use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// A length on the canvas. Canvas dimensions, text metrics, and word positions are
/// all expressed in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl Pt {
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    pub fn abs(self) -> Pt {
        Pt(self.0.abs())
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Mul<Pt> for f32 {
    type Output = Pt;

    fn mul(self, rhs: Pt) -> Pt {
        Pt(self * rhs.0)
    }
}

/// Multiplying two lengths yields an area, which is kept as a bare `f32`
impl Mul<Pt> for Pt {
    type Output = f32;

    fn mul(self, rhs: Pt) -> f32 {
        self.0 * rhs.0
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Dividing two lengths yields a unitless ratio
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_keeps_units_straight() {
        let a = Pt(3.0);
        let b = Pt(4.0);
        assert_eq!(a + b, Pt(7.0));
        assert_eq!(b - a, Pt(1.0));
        assert_eq!(a * 2.0, Pt(6.0));
        assert_eq!(a * b, 12.0);
        assert_eq!(b / 2.0, Pt(2.0));
        assert_eq!(a / b, 0.75);
        assert_eq!(-a, Pt(-3.0));
        assert_eq!([a, b].into_iter().sum::<Pt>(), Pt(7.0));
    }
}
