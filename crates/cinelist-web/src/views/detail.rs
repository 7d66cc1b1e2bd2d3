//! Movie detail page.

use askama::Template;
use cinelist_api::tmdb::{BackdropSize, CatalogApi, ImageBase, Movie, PosterSize};

use super::{RatingView, overview_or_default};
use crate::format::{format_date, format_runtime, language_name};

/// Message shown when the movie cannot be loaded.
pub const LOAD_DETAILS_FAILED: &str = "Failed to load movie details. Please try again later.";

/// Display fields of one movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetailView {
    /// Movie title.
    pub title: String,
    /// Full-width backdrop, or the placeholder.
    pub backdrop_url: String,
    /// Large poster, or the placeholder.
    pub poster_url: String,
    /// Formatted release date.
    pub release_date: Option<String>,
    /// Rating pill.
    pub rating: RatingView,
    /// Formatted runtime. A runtime of 0 is TMDB's "unknown" and is omitted.
    pub runtime: Option<String>,
    /// Display name of the original language.
    pub language: Option<String>,
    /// Genre names in catalog order.
    pub genres: Vec<String>,
    /// Overview, or the "no overview" text.
    pub overview: String,
}

impl MovieDetailView {
    /// Builds the detail fields from a catalog movie.
    pub fn new(movie: &Movie, images: &ImageBase) -> Self {
        Self {
            title: movie.title.clone(),
            backdrop_url: images
                .backdrop_url(movie.backdrop_path.as_deref(), BackdropSize::default()),
            poster_url: images.poster_url(movie.poster_path.as_deref(), PosterSize::W500),
            release_date: (!movie.release_date.is_empty())
                .then(|| format_date(&movie.release_date)),
            rating: RatingView::new(movie.vote_average),
            runtime: movie.runtime.filter(|&m| m > 0).map(format_runtime),
            language: movie
                .original_language
                .as_deref()
                .filter(|code| !code.is_empty())
                .map(language_name),
            genres: movie
                .genres
                .iter()
                .flatten()
                .map(|genre| genre.name.clone())
                .collect(),
            overview: overview_or_default(&movie.overview),
        }
    }
}

/// The detail page of a loaded movie.
#[derive(Debug, Template)]
#[template(path = "detail.html")]
pub struct DetailPage {
    /// Movie to show.
    pub movie: MovieDetailView,
}

/// The detail page when loading failed.
#[derive(Debug, Template)]
#[template(path = "detail_error.html")]
pub struct DetailErrorPage {
    /// Failure message.
    pub message: &'static str,
}

/// Result of resolving a detail page request.
#[derive(Debug)]
pub enum DetailOutcome {
    /// The movie was loaded.
    Found(Box<DetailPage>),
    /// The identifier has no leading integer; the catalog was not asked.
    NotFound,
    /// The catalog request failed.
    Failed(DetailErrorPage),
}

/// Leading integer of a path identifier.
#[derive(Debug, PartialEq, Eq)]
enum LeadingId {
    /// Digits found and they fit a catalog id.
    Id(u64),
    /// Digits found, but the value is negative or too large for any movie.
    OutOfRange,
    /// No digits after optional whitespace and sign.
    Missing,
}

/// Reads the integer prefix of `raw`: leading whitespace, an optional
/// sign, then decimal digits. Anything after the digits is ignored, so
/// `27205-inception` is movie 27205.
fn leading_id(raw: &str) -> LeadingId {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = trimmed.strip_prefix('-').map_or_else(
        || (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        |rest| (true, rest),
    );
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = unsigned.get(..end).unwrap_or_default();
    if digits.is_empty() {
        return LeadingId::Missing;
    }

    match digits.parse::<u64>() {
        Ok(0) => LeadingId::Id(0),
        Ok(id) if !negative => LeadingId::Id(id),
        _ => LeadingId::OutOfRange,
    }
}

fn failed() -> DetailOutcome {
    DetailOutcome::Failed(DetailErrorPage {
        message: LOAD_DETAILS_FAILED,
    })
}

/// Resolves the detail page for a raw path identifier.
pub async fn load_detail<C>(catalog: &C, images: &ImageBase, raw_id: &str) -> DetailOutcome
where
    C: CatalogApi + Sync,
{
    let id = match leading_id(raw_id) {
        LeadingId::Id(id) => id,
        LeadingId::OutOfRange => {
            tracing::error!(raw_id, "movie id is outside the catalog id range");
            return failed();
        }
        LeadingId::Missing => {
            tracing::debug!(raw_id, "movie id is not a number");
            return DetailOutcome::NotFound;
        }
    };

    match catalog.movie_details(id).await {
        Ok(movie) => DetailOutcome::Found(Box::new(DetailPage {
            movie: MovieDetailView::new(&movie, images),
        })),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to load movie details page");
            failed()
        }
    }
}
