//! Page views.
//!
//! Each view is built from catalog data into plain display fields and
//! rendered through an askama template under `templates/`.

mod detail;
mod home;
mod not_found;
mod search;

pub use detail::{DetailOutcome, load_detail};
pub use home::load_home;
pub use not_found::NotFoundPage;
pub use search::search_target;

use cinelist_api::tmdb::RatingColor;

/// Shown in place of an empty overview.
pub const NO_OVERVIEW: &str = "No overview available.";

/// Overview text, or [`NO_OVERVIEW`] when empty.
fn overview_or_default(overview: &str) -> String {
    if overview.is_empty() {
        String::from(NO_OVERVIEW)
    } else {
        String::from(overview)
    }
}

/// Rating badge: value to one decimal place plus its color class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingView {
    /// CSS class of the badge color.
    pub class: &'static str,
    /// Vote average, e.g. "8.5".
    pub value: String,
}

impl RatingView {
    /// Builds the badge for a vote average. Ties round away from zero
    /// (7.25 shows as "7.3").
    pub fn new(vote_average: f64) -> Self {
        let rounded = (vote_average * 10.0).round() / 10.0;
        Self {
            class: RatingColor::from_rating(vote_average).css_class(),
            value: format!("{rounded:.1}"),
        }
    }
}
