//! Badge color tiers.

use std::fmt;

/// Value-segment color, chosen from the coverage percentage.
///
/// Each tier's lower bound is inclusive: 90.0 is bright green, 89.9 is green.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    BrightGreen,
    Green,
    YellowGreen,
    Yellow,
    Orange,
    Red,
}

impl ColorTier {
    /// Select the tier for a percentage.
    #[must_use]
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::BrightGreen
        } else if percentage >= 80.0 {
            Self::Green
        } else if percentage >= 70.0 {
            Self::YellowGreen
        } else if percentage >= 60.0 {
            Self::Yellow
        } else if percentage >= 50.0 {
            Self::Orange
        } else {
            Self::Red
        }
    }

    /// Fill color (shields.io palette).
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::BrightGreen => "#4c1",
            Self::Green => "#97CA00",
            Self::YellowGreen => "#a4a61d",
            Self::Yellow => "#dfb317",
            Self::Orange => "#fe7d37",
            Self::Red => "#e05d44",
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrightGreen => write!(f, "brightgreen"),
            Self::Green => write!(f, "green"),
            Self::YellowGreen => write!(f, "yellowgreen"),
            Self::Yellow => write!(f, "yellow"),
            Self::Orange => write!(f, "orange"),
            Self::Red => write!(f, "red"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
