//! Catalog client error kinds.

/// Failure of a catalog request.
///
/// Both kinds are logged where they occur and then handed back to the
/// caller unchanged.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum CatalogError {
    /// The transport failed, or the response body could not be read or decoded.
    #[error("failed to {action}: {source}")]
    Network {
        /// What the request was doing (e.g. "fetch popular movies").
        action: &'static str,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success HTTP status.
    #[error("failed to {action}: HTTP {status}{}", detail(.message.as_deref()))]
    Fetch {
        /// What the request was doing.
        action: &'static str,
        /// HTTP status code.
        status: u16,
        /// `status_message` from the TMDB error body, when present.
        message: Option<String>,
    },
}

impl CatalogError {
    /// Returns `true` for transport-level failures.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns `true` for non-success HTTP statuses.
    #[must_use]
    pub const fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

fn detail(message: Option<&str>) -> String {
    message.map_or_else(String::new, |m| format!(" ({m})"))
}
