//! `CatalogApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::CatalogError;
use super::types::{Movie, MovieListResponse};

/// Movie catalog trait.
///
/// Abstracts catalog operations for stub substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CatalogApi: Send)]
pub trait LocalCatalogApi {
    /// Lists popular movies.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails or the status is not a success.
    async fn list_popular(&self, page: u32) -> Result<MovieListResponse, CatalogError>;

    /// Searches movies by title. An empty query yields
    /// [`MovieListResponse::empty`] without contacting the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails or the status is not a success.
    async fn search(&self, query: &str, page: u32) -> Result<MovieListResponse, CatalogError>;

    /// Fetches the details of one movie.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails or the status is not a success.
    async fn movie_details(&self, id: u64) -> Result<Movie, CatalogError>;
}
