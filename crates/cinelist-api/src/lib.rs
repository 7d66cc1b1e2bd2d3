//! Movie catalog client library for cinelist.
//!
//! Provides a client for the TMDB API v3 movie endpoints together with
//! the image URL and rating helpers used when rendering its data.

/// TMDB API client.
pub mod tmdb;
