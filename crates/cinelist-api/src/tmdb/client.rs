//! `TmdbClient` - TMDB API client implementation.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::CatalogApi;
use super::error::CatalogError;
use super::types::{Movie, MovieListResponse, TmdbErrorResponse};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API client.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key sent as the `api_key` query parameter.
    api_key: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: String,
    user_agent: Option<String>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: String::new(),
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (default: empty, which TMDB rejects).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - the base URL cannot carry paths.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };
        if base_url.cannot_be_a_base() {
            bail!("base URL cannot carry paths: {base_url}");
        }

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_key: self.api_key,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Endpoint URL for `path` below the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Sends a GET request with the API key and query params and decodes
    /// the JSON body. Failures are logged here and returned unchanged.
    #[instrument(skip(self, query))]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        action: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let network = |source: reqwest::Error| {
            tracing::error!(error = %source, "Error trying to {action}");
            CatalogError::Network { action, source }
        };

        tracing::debug!(path, "TMDB API request");

        let response = self
            .http_client
            .get(self.endpoint(path))
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TmdbErrorResponse>(&body)
                .ok()
                .map(|e| e.status_message);
            tracing::error!(
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "Failed to {action}"
            );
            return Err(CatalogError::Fetch {
                action,
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(network)
    }
}

impl CatalogApi for TmdbClient {
    #[instrument(skip(self))]
    async fn list_popular(&self, page: u32) -> Result<MovieListResponse, CatalogError> {
        let query = [("page", page.to_string())];
        self.get_json("fetch popular movies", "movie/popular", &query)
            .await
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, page: u32) -> Result<MovieListResponse, CatalogError> {
        if query.is_empty() {
            return Ok(MovieListResponse::empty());
        }

        let params = [("query", String::from(query)), ("page", page.to_string())];
        self.get_json("search movies", "search/movie", &params)
            .await
    }

    #[instrument(skip(self))]
    async fn movie_details(&self, id: u64) -> Result<Movie, CatalogError> {
        let path = format!("movie/{id}");
        self.get_json("fetch movie details", &path, &[]).await
    }
}
