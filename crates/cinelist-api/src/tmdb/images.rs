//! Image URL construction for posters and backdrops.

use std::fmt;

/// Default base URL for TMDB image assets.
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Placeholder served when a movie has no poster.
const POSTER_PLACEHOLDER: &str = "/placeholder.svg?height=750&width=500";

/// Placeholder served when a movie has no backdrop.
const BACKDROP_PLACEHOLDER: &str = "/placeholder.svg?height=300&width=780";

/// Poster sizes offered by the image host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PosterSize {
    /// 185px wide, used for list cards.
    W185,
    /// 500px wide.
    #[default]
    W500,
    /// Original upload.
    Original,
}

impl PosterSize {
    /// Size token as used in the image URL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W185 => "w185",
            Self::W500 => "w500",
            Self::Original => "original",
        }
    }
}

impl fmt::Display for PosterSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backdrop sizes offered by the image host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackdropSize {
    /// 300px wide.
    W300,
    /// 780px wide.
    W780,
    /// 1280px wide.
    #[default]
    W1280,
    /// Original upload.
    Original,
}

impl BackdropSize {
    /// Size token as used in the image URL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W300 => "w300",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::Original => "original",
        }
    }
}

impl fmt::Display for BackdropSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base URL of the image host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBase(String);

impl ImageBase {
    /// Creates an image base from a URL such as `https://image.tmdb.org/t/p`.
    /// A trailing slash is ignored.
    pub fn new(url: impl Into<String>) -> Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self(url)
    }

    /// The base URL without trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Poster URL for `path`, or the poster placeholder when `path` is absent.
    #[must_use]
    pub fn poster_url(&self, path: Option<&str>, size: PosterSize) -> String {
        path.map_or_else(
            || String::from(POSTER_PLACEHOLDER),
            |p| format!("{}/{size}{p}", self.0),
        )
    }

    /// Backdrop URL for `path`, or the backdrop placeholder when `path` is absent.
    #[must_use]
    pub fn backdrop_url(&self, path: Option<&str>, size: BackdropSize) -> String {
        path.map_or_else(
            || String::from(BACKDROP_PLACEHOLDER),
            |p| format!("{}/{size}{p}", self.0),
        )
    }
}

impl Default for ImageBase {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}
