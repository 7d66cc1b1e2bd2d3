//! HTTP routes and handlers.

use std::sync::Arc;

use askama::Template;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use cinelist_api::tmdb::{CatalogApi, ImageBase};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::assets::{PLACEHOLDER_SVG, STYLE_CSS};
use crate::views::{DetailOutcome, NotFoundPage, load_detail, load_home, search_target};

/// Read-only state shared by all requests.
#[derive(Debug)]
pub struct AppState<C> {
    catalog: Arc<C>,
    images: Arc<ImageBase>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            images: Arc::clone(&self.images),
        }
    }
}

impl<C> AppState<C> {
    /// Creates the state from a catalog and the image host base.
    pub fn new(catalog: C, images: ImageBase) -> Self {
        Self {
            catalog: Arc::new(catalog),
            images: Arc::new(images),
        }
    }
}

/// Query string of the home page.
#[derive(Debug, Deserialize)]
struct HomeParams {
    #[serde(default)]
    query: String,
}

/// Query string of the search bar submission.
#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Builds the application router.
pub fn router<C>(state: AppState<C>) -> Router
where
    C: CatalogApi + Sync + 'static,
{
    Router::new()
        .route("/", get(home::<C>))
        .route("/search", get(search))
        .route("/movie/{id}", get(movie_detail::<C>))
        .route("/placeholder.svg", get(placeholder))
        .route("/static/style.css", get(stylesheet))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Renders `page` with `status`; template errors become a bare 500.
fn render<T: Template>(status: StatusCode, page: &T) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render template");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn home<C>(State(state): State<AppState<C>>, Query(params): Query<HomeParams>) -> Response
where
    C: CatalogApi + Sync + 'static,
{
    let page = load_home(state.catalog.as_ref(), &state.images, &params.query).await;
    let status = if page.error.is_some() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    render(status, &page)
}

async fn movie_detail<C>(State(state): State<AppState<C>>, Path(id): Path<String>) -> Response
where
    C: CatalogApi + Sync + 'static,
{
    match load_detail(state.catalog.as_ref(), &state.images, &id).await {
        DetailOutcome::Found(page) => render(StatusCode::OK, page.as_ref()),
        DetailOutcome::NotFound => render(StatusCode::NOT_FOUND, &NotFoundPage),
        DetailOutcome::Failed(page) => render(StatusCode::BAD_GATEWAY, &page),
    }
}

async fn search(Query(params): Query<SearchParams>) -> Redirect {
    Redirect::to(&search_target(&params.q))
}

async fn placeholder() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG)
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> Response {
    render(StatusCode::NOT_FOUND, &NotFoundPage)
}
