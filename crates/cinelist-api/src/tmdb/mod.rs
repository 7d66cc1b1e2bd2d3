//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 movie endpoints
//! and shapes their responses for presentation.

mod api;
mod client;
mod error;
mod images;
mod rating;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{CatalogApi, LocalCatalogApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
pub use error::CatalogError;
pub use images::{BackdropSize, ImageBase, PosterSize};
pub use rating::RatingColor;
#[allow(clippy::module_name_repetitions)]
pub use types::{Genre, Movie, MovieListResponse, TmdbErrorResponse};
