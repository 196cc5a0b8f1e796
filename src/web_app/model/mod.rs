// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the browser and the server functions, so
// they only depend on serde and compile for every feature set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base URL for w500 poster renditions served by the catalog's image CDN
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Placeholder image shown when a movie has no poster
pub const POSTER_FALLBACK: &str = "/no-movie.png";

/// Shown when the movie fetch fails for any transport/decode reason
pub const MOVIES_ERROR: &str = "Error fetching movies, try again later.";

/// Shown when the catalog reports a failure without its own message
pub const CATALOG_ERROR_FALLBACK: &str = "Could not fetch movies";

/// Shown when the trending fetch fails
pub const TRENDING_ERROR: &str = "Could not fetch trending movies";

/// Number of trending entries requested from the document store
pub const TRENDING_LIMIT: u32 = 5;

/// Which catalog listing a debounced search term maps to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogQuery {
    /// Free-text title search
    Search(String),
    /// Popularity-ordered browse, used when the search box is empty
    Discover,
}

impl CatalogQuery {
    /// Any non-empty term searches; whitespace counts as input.
    pub fn from_term(term: &str) -> Self {
        if term.is_empty() {
            CatalogQuery::Discover
        } else {
            CatalogQuery::Search(term.to_string())
        }
    }

    /// Catalog path, relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            CatalogQuery::Search(_) => "/search/movie",
            CatalogQuery::Discover => "/discover/movie",
        }
    }

    /// Query-string parameters for the catalog request
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            CatalogQuery::Search(term) => vec![("query", term.clone())],
            CatalogQuery::Discover => vec![("sort_by", "popularity.desc".to_string())],
        }
    }

    /// The search term, if this query records search activity
    pub fn term(&self) -> Option<&str> {
        match self {
            CatalogQuery::Search(term) => Some(term),
            CatalogQuery::Discover => None,
        }
    }
}

/// A movie as returned by the catalog (only the fields the page renders)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl Movie {
    /// Poster URL for the movie card, or the placeholder image
    pub fn poster_src(&self) -> String {
        match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => poster_url(path),
            _ => POSTER_FALLBACK.to_string(),
        }
    }

    /// Rating with one decimal, "N/A" when unrated
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(vote) if vote != 0.0 => format!("{:.1}", vote),
            _ => "N/A".to_string(),
        }
    }

    /// Release year ("2008" from "2008-07-16"), "N/A" when unknown
    pub fn release_year(&self) -> String {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
            .unwrap_or("N/A")
            .to_string()
    }

    pub fn language_label(&self) -> String {
        self.original_language.clone().unwrap_or_default()
    }
}

/// Full poster URL for a catalog poster path ("/abc.jpg")
pub fn poster_url(poster_path: &str) -> String {
    format!("{}/{}", POSTER_BASE_URL, poster_path.trim_start_matches('/'))
}

/// Result of one catalog read, as returned by `fetch_movies`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<Movie>,
    /// Set when the catalog signalled a failure in its response body
    pub error: Option<String>,
}

impl CatalogPage {
    pub fn with_results(results: Vec<Movie>) -> Self {
        Self { results, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { results: Vec::new(), error: Some(message.into()) }
    }
}

/// A trending document from the store (one per distinct search term)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendingMovie {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: i64,
    pub movie_id: i64,
    #[serde(default)]
    pub title: String,
    pub poster_url: String,
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TrendingMovie {
    /// Stored poster URL, or the placeholder image when none was recorded
    pub fn poster_src(&self) -> String {
        if self.poster_url.is_empty() {
            POSTER_FALLBACK.to_string()
        } else {
            self.poster_url.clone()
        }
    }

    /// Tooltip text for a trending entry
    pub fn caption(&self) -> String {
        let label = if self.title.is_empty() { &self.search_term } else { &self.title };
        match self.updated_at {
            Some(at) => format!("{} · {} searches · last {}", label, self.count, at.format("%Y-%m-%d")),
            None => format!("{} · {} searches", label, self.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(poster: Option<&str>, vote: Option<f64>, date: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "Batman".to_string(),
            poster_path: poster.map(str::to_string),
            vote_average: vote,
            original_language: Some("en".to_string()),
            release_date: date.map(str::to_string),
            popularity: None,
            overview: None,
        }
    }

    #[test]
    fn test_query_from_term() {
        assert_eq!(CatalogQuery::from_term(""), CatalogQuery::Discover);
        assert_eq!(CatalogQuery::from_term("batman"), CatalogQuery::Search("batman".to_string()));
        // No trimming: a lone space is still a search
        assert_eq!(CatalogQuery::from_term(" "), CatalogQuery::Search(" ".to_string()));
    }

    #[test]
    fn test_query_endpoints() {
        let search = CatalogQuery::Search("the matrix".to_string());
        assert_eq!(search.path(), "/search/movie");
        assert_eq!(search.params(), vec![("query", "the matrix".to_string())]);
        assert_eq!(search.term(), Some("the matrix"));

        let discover = CatalogQuery::Discover;
        assert_eq!(discover.path(), "/discover/movie");
        assert_eq!(discover.params(), vec![("sort_by", "popularity.desc".to_string())]);
        assert_eq!(discover.term(), None);
    }

    #[test]
    fn test_poster_src() {
        assert_eq!(
            movie(Some("/abc.jpg"), None, None).poster_src(),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(movie(None, None, None).poster_src(), POSTER_FALLBACK);
        assert_eq!(movie(Some(""), None, None).poster_src(), POSTER_FALLBACK);
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(movie(None, Some(7.456), None).rating_label(), "7.5");
        assert_eq!(movie(None, Some(0.0), None).rating_label(), "N/A");
        assert_eq!(movie(None, None, None).rating_label(), "N/A");
    }

    #[test]
    fn test_release_year() {
        assert_eq!(movie(None, None, Some("2008-07-16")).release_year(), "2008");
        assert_eq!(movie(None, None, Some("")).release_year(), "N/A");
        assert_eq!(movie(None, None, None).release_year(), "N/A");
    }

    #[test]
    fn test_movie_tolerates_missing_fields() {
        let json = r#"{"id": 268, "title": "Batman", "adult": false}"#;
        let parsed: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, 268);
        assert!(parsed.poster_path.is_none());
        assert!(parsed.vote_average.is_none());
    }

    #[test]
    fn test_trending_document_fields() {
        let json = r#"{
            "$id": "doc1",
            "$updatedAt": "2024-05-01T10:00:00.000+00:00",
            "searchTerm": "batman",
            "count": 3,
            "movie_id": 268,
            "poster_url": "https://image.tmdb.org/t/p/w500/x.jpg"
        }"#;
        let entry: TrendingMovie = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "doc1");
        assert_eq!(entry.search_term, "batman");
        assert_eq!(entry.count, 3);
        assert!(entry.title.is_empty());
        assert_eq!(entry.caption(), "batman · 3 searches · last 2024-05-01");
    }

    #[test]
    fn test_catalog_page_constructors() {
        let page = CatalogPage::failed("Movie not found!");
        assert!(page.results.is_empty());
        assert_eq!(page.error.as_deref(), Some("Movie not found!"));
        assert!(CatalogPage::with_results(vec![]).error.is_none());
    }
}
