//! TMDB API response types.

use serde::{Deserialize, Deserializer};

/// Deserializes JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Movie ---

/// A single movie as returned by `movie/popular`, `search/movie`
/// and `movie/{movie_id}`.
///
/// List endpoints omit `runtime`, `genres` is only present on the
/// details endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Poster image path (e.g. `/abc.jpg`).
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Release date (YYYY-MM-DD), empty when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    /// Vote average (0-10).
    #[serde(default)]
    pub vote_average: f64,
    /// Overview text, empty when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Genres.
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
}

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

// --- Movie lists ---

/// Response from `movie/popular` and `search/movie`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieListResponse {
    /// Current page number.
    pub page: u32,
    /// Movies in API order.
    pub results: Vec<Movie>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

impl MovieListResponse {
    /// The response for a search without query text: page 1, no results.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}
