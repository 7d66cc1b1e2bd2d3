//! Search bar.

/// Search bar state: the input is pre-filled from the `query` parameter
/// of the page being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBarView {
    /// Current query text.
    pub query: String,
}

impl SearchBarView {
    /// Search bar reflecting `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Where submitting the search bar navigates to.
///
/// Trimmed non-empty text goes to `/?query=<encoded>`, anything else to `/`.
pub fn search_target(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::from("/");
    }
    format!("/?query={}", urlencoding::encode(trimmed))
}
