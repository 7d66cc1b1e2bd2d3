//! Catalog stub shared by view and router tests.
#![allow(clippy::unwrap_used)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use cinelist_api::tmdb::{CatalogApi, CatalogError, Movie, MovieListResponse};

/// A movie with only `id` and `title` set.
pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: String::from(title),
        poster_path: None,
        backdrop_path: None,
        release_date: String::new(),
        vote_average: 0.0,
        overview: String::new(),
        runtime: None,
        genres: None,
        original_language: None,
    }
}

fn list(movies: Vec<Movie>) -> MovieListResponse {
    MovieListResponse {
        page: 1,
        total_pages: 1,
        total_results: u32::try_from(movies.len()).unwrap(),
        results: movies,
    }
}

const fn failure(action: &'static str) -> CatalogError {
    CatalogError::Fetch {
        action,
        status: 500,
        message: None,
    }
}

/// In-memory catalog. Operations without canned data fail with a
/// fetch failure.
#[derive(Debug, Default)]
pub struct StubCatalog {
    popular: Option<MovieListResponse>,
    search: Option<MovieListResponse>,
    movie: Option<Movie>,
    calls: AtomicUsize,
    searched: Mutex<Vec<String>>,
    requested: Mutex<Vec<u64>>,
}

impl StubCatalog {
    /// Answers `list_popular` with `movies`.
    pub fn with_popular(mut self, movies: Vec<Movie>) -> Self {
        self.popular = Some(list(movies));
        self
    }

    /// Answers `search` with `movies`.
    pub fn with_search(mut self, movies: Vec<Movie>) -> Self {
        self.search = Some(list(movies));
        self
    }

    /// Answers `movie_details` with `movie`.
    pub fn with_movie(mut self, movie: Movie) -> Self {
        self.movie = Some(movie);
        self
    }

    /// Number of catalog operations invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Queries passed to `search`.
    pub fn searched(&self) -> Vec<String> {
        self.searched.lock().unwrap().clone()
    }

    /// IDs passed to `movie_details`.
    pub fn requested(&self) -> Vec<u64> {
        self.requested.lock().unwrap().clone()
    }
}

impl CatalogApi for StubCatalog {
    async fn list_popular(&self, _page: u32) -> Result<MovieListResponse, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.popular
            .clone()
            .ok_or_else(|| failure("fetch popular movies"))
    }

    async fn search(&self, query: &str, _page: u32) -> Result<MovieListResponse, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.searched.lock().unwrap().push(String::from(query));
        self.search.clone().ok_or_else(|| failure("search movies"))
    }

    async fn movie_details(&self, id: u64) -> Result<Movie, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(id);
        self.movie
            .clone()
            .ok_or_else(|| failure("fetch movie details"))
    }
}
