//! Home page: popular movies or search results.

use askama::Template;
use cinelist_api::tmdb::{CatalogApi, ImageBase, Movie, PosterSize};

use super::search::SearchBarView;
use super::{RatingView, overview_or_default};
use crate::format::format_date;

/// Message shown when the movie list cannot be loaded.
pub const LOAD_MOVIES_FAILED: &str = "Failed to load movies. Please try again later.";

/// One movie in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCardView {
    /// Link to the detail page.
    pub href: String,
    /// Small poster, or the placeholder.
    pub poster_url: String,
    /// Movie title.
    pub title: String,
    /// Rating badge.
    pub rating: RatingView,
    /// Formatted release date, absent when the catalog has none.
    pub release_date: Option<String>,
    /// Overview, or the "no overview" text.
    pub overview: String,
}

impl MovieCardView {
    /// Builds a card from a catalog movie.
    pub fn new(movie: &Movie, images: &ImageBase) -> Self {
        Self {
            href: format!("/movie/{}", movie.id),
            poster_url: images.poster_url(movie.poster_path.as_deref(), PosterSize::W185),
            title: movie.title.clone(),
            rating: RatingView::new(movie.vote_average),
            release_date: (!movie.release_date.is_empty())
                .then(|| format_date(&movie.release_date)),
            overview: overview_or_default(&movie.overview),
        }
    }
}

/// Heading plus one card per movie, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieListView {
    /// Section heading.
    pub heading: String,
    /// Cards; empty renders the "No movies found." message.
    pub cards: Vec<MovieCardView>,
}

impl MovieListView {
    /// Builds the list for `movies`.
    pub fn new(heading: impl Into<String>, movies: &[Movie], images: &ImageBase) -> Self {
        Self {
            heading: heading.into(),
            cards: movies
                .iter()
                .map(|movie| MovieCardView::new(movie, images))
                .collect(),
        }
    }
}

/// The home page.
#[derive(Debug, Template)]
#[template(path = "home.html")]
pub struct HomePage {
    /// Search bar.
    pub search: SearchBarView,
    /// Movie list, absent when loading failed.
    pub list: Option<MovieListView>,
    /// Failure message shown instead of the list.
    pub error: Option<&'static str>,
}

/// Loads the home page for `query`: search results when it is non-empty,
/// popular movies otherwise. Catalog failures become an error message.
pub async fn load_home<C>(catalog: &C, images: &ImageBase, query: &str) -> HomePage
where
    C: CatalogApi + Sync,
{
    let search = SearchBarView::new(query);

    let result = if query.is_empty() {
        catalog
            .list_popular(1)
            .await
            .map(|response| MovieListView::new("Popular Movies", &response.results, images))
    } else {
        catalog.search(query, 1).await.map(|response| {
            MovieListView::new(
                format!("Search Results for \"{query}\""),
                &response.results,
                images,
            )
        })
    };

    match result {
        Ok(list) => HomePage {
            search,
            list: Some(list),
            error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, query, "failed to load home page movies");
            HomePage {
                search,
                list: None,
                error: Some(LOAD_MOVIES_FAILED),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use cinelist_api::tmdb::MovieListResponse;

    use super::*;
    use crate::test_support::{StubCatalog, movie};

    #[test]
    fn test_card_fields() {
        // Arrange
        let mut m = movie(27_205, "Inception");
        m.poster_path = Some(String::from("/poster.jpg"));
        m.release_date = String::from("2010-07-15");
        m.vote_average = 8.369;
        m.overview = String::from("A thief.");

        // Act
        let card = MovieCardView::new(&m, &ImageBase::default());

        // Assert
        assert_eq!(card.href, "/movie/27205");
        assert_eq!(card.poster_url, "https://image.tmdb.org/t/p/w185/poster.jpg");
        assert_eq!(card.title, "Inception");
        assert_eq!(card.rating.value, "8.4");
        assert_eq!(card.rating.class, "rating-green");
        assert_eq!(card.release_date.as_deref(), Some("July 15, 2010"));
        assert_eq!(card.overview, "A thief.");
    }

    #[test]
    fn test_card_missing_fields() {
        // Arrange
        let m = movie(1, "Bare");

        // Act
        let card = MovieCardView::new(&m, &ImageBase::default());

        // Assert
        assert_eq!(card.poster_url, "/placeholder.svg?height=750&width=500");
        assert!(card.release_date.is_none());
        assert_eq!(card.overview, "No overview available.");
        assert_eq!(card.rating.class, "rating-red");
    }

    #[test]
    fn test_list_preserves_order() {
        // Arrange
        let movies = vec![movie(3, "C"), movie(1, "A"), movie(2, "B")];

        // Act
        let list = MovieListView::new("Popular Movies", &movies, &ImageBase::default());

        // Assert
        let titles: Vec<&str> = list.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_load_home_popular_when_query_empty() {
        // Arrange
        let catalog = StubCatalog::default().with_popular(vec![movie(1, "Popular One")]);

        // Act
        let page = load_home(&catalog, &ImageBase::default(), "").await;

        // Assert
        let list = page.list.unwrap();
        assert_eq!(list.heading, "Popular Movies");
        assert_eq!(list.cards.len(), 1);
        assert!(page.error.is_none());
        assert_eq!(catalog.calls(), 1);
        assert!(catalog.searched().is_empty());
    }

    #[tokio::test]
    async fn test_load_home_search_when_query_given() {
        // Arrange
        let catalog = StubCatalog::default().with_search(vec![movie(9, "Match")]);

        // Act
        let page = load_home(&catalog, &ImageBase::default(), "test query").await;

        // Assert
        let list = page.list.unwrap();
        assert_eq!(list.heading, "Search Results for \"test query\"");
        assert_eq!(list.cards[0].title, "Match");
        assert_eq!(page.search.query, "test query");
        assert_eq!(catalog.searched(), ["test query"]);
    }

    #[tokio::test]
    async fn test_load_home_failure_shows_message() {
        // Arrange
        let catalog = StubCatalog::default();

        // Act
        let page = load_home(&catalog, &ImageBase::default(), "").await;

        // Assert
        assert!(page.list.is_none());
        assert_eq!(
            page.error,
            Some("Failed to load movies. Please try again later.")
        );
    }

    #[test]
    fn test_render_empty_list() {
        // Arrange
        let page = HomePage {
            search: SearchBarView::default(),
            list: Some(MovieListView::new(
                "Popular Movies",
                &MovieListResponse::empty().results,
                &ImageBase::default(),
            )),
            error: None,
        };

        // Act
        let html = page.render().unwrap();

        // Assert
        assert!(html.contains("Popular Movies"));
        assert!(html.contains("No movies found."));
        assert!(!html.contains("movie-card"));
    }

    #[test]
    fn test_render_cards() {
        // Arrange
        let mut first = movie(1, "First Film");
        first.release_date = String::from("2023-01-15");
        let second = movie(2, "Second Film");
        let page = HomePage {
            search: SearchBarView::new("film"),
            list: Some(MovieListView::new(
                "Results",
                &[first, second],
                &ImageBase::default(),
            )),
            error: None,
        };

        // Act
        let html = page.render().unwrap();

        // Assert
        assert_eq!(html.matches("class=\"movie-card\"").count(), 2);
        assert!(html.contains("First Film"));
        assert!(html.contains("January 15, 2023"));
        assert!(html.contains("No overview available."));
        assert!(!html.contains("No movies found."));
        assert!(html.contains("value=\"film\""));
    }

    #[test]
    fn test_render_error() {
        // Arrange
        let page = HomePage {
            search: SearchBarView::default(),
            list: None,
            error: Some(LOAD_MOVIES_FAILED),
        };

        // Act
        let html = page.render().unwrap();

        // Assert
        assert!(html.contains("data-testid=\"error-message\""));
        assert!(html.contains("Failed to load movies. Please try again later."));
        assert!(!html.contains("No movies found."));
    }

    #[test]
    fn test_render_escapes_titles() {
        // Arrange
        let page = HomePage {
            search: SearchBarView::default(),
            list: Some(MovieListView::new(
                "Results",
                &[movie(1, "<script>x</script>")],
                &ImageBase::default(),
            )),
            error: None,
        };

        // Act
        let html = page.render().unwrap();

        // Assert
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
