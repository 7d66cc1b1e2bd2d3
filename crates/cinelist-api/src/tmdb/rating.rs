//! Rating badge color.

/// Display color of a vote average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingColor {
    /// 7 and above.
    Green,
    /// From 5 up to (not including) 7.
    Yellow,
    /// Below 5.
    Red,
}

impl RatingColor {
    /// Picks the color for a vote average on the 0-10 scale.
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 7.0 {
            Self::Green
        } else if rating >= 5.0 {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    /// CSS class used by the stylesheet.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Green => "rating-green",
            Self::Yellow => "rating-yellow",
            Self::Red => "rating-red",
        }
    }
}
