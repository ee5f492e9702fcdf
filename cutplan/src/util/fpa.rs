use std::cmp::Ordering;
use std::fmt::Display;

/// Absolute tolerance below which two lengths are considered equal.
pub const TOLERANCE: f32 = 1e-4;

///Wrapper around the [`float_cmp::approx_eq!()`] macro for tolerant comparison of lengths.
///Two FPAs are considered equal if they are within [`TOLERANCE`] (or a few ulps) of each other,
///so pieces that add up exactly to a stock length still fit after rounding.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl FPA {
    /// `true` if `self` is smaller than or approximately equal to `other`
    pub fn fits_in(self, other: impl Into<FPA>) -> bool {
        self <= other.into()
    }

    /// `true` if the value is approximately zero or negative
    pub fn is_depleted(self) -> bool {
        self <= FPA(0.0)
    }
}

impl<T> From<T> for FPA
where
    T: Into<f32>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0, epsilon = TOLERANCE, ulps = 4)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
