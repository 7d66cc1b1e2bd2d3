//! Not-found page.

use askama::Template;

/// Page for unknown routes and malformed movie IDs.
#[derive(Debug, Default, Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage;
