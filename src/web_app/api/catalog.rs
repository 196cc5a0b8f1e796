// web_app/api/catalog.rs - Movie catalog access
//
// `MovieCatalog` is the seam the service depends on; `TmdbCatalog` is the
// production implementation over the TMDB v3 REST API.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use super::config::CatalogConfig;
use super::error::CatalogError;
use crate::web_app::model::{CatalogPage, CatalogQuery, Movie, CATALOG_ERROR_FALLBACK};

/// Read access to a movie catalog
#[async_trait]
pub trait MovieCatalog: Send + Sync + 'static {
    async fn fetch(&self, query: &CatalogQuery) -> Result<CatalogPage, CatalogError>;
}

/// The `Response` field of a catalog body; seen both as a string and a bool
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ResponseFlag {
    Bool(bool),
    Text(String),
}

impl ResponseFlag {
    pub fn is_failure(&self) -> bool {
        match self {
            ResponseFlag::Bool(ok) => !ok,
            ResponseFlag::Text(text) => text.eq_ignore_ascii_case("false"),
        }
    }
}

/// Raw catalog response body
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(rename = "Response", default)]
    pub response: Option<ResponseFlag>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl From<CatalogResponse> for CatalogPage {
    fn from(body: CatalogResponse) -> Self {
        if body.response.as_ref().is_some_and(ResponseFlag::is_failure) {
            let message = body.error.unwrap_or_else(|| CATALOG_ERROR_FALLBACK.to_string());
            return CatalogPage::failed(message);
        }
        CatalogPage::with_results(body.results.unwrap_or_default())
    }
}

/// TMDB client, authenticated with a v4 read access token
#[derive(Clone)]
pub struct TmdbCatalog {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbCatalog {
    pub fn new(http: reqwest::Client, config: &CatalogConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self, query: &CatalogQuery) -> String {
        format!("{}{}", self.base_url, query.path())
    }
}

#[async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn fetch(&self, query: &CatalogQuery) -> Result<CatalogPage, CatalogError> {
        let url = self.endpoint(query);
        tracing::debug!("Catalog request: {} {:?}", url, query.params());

        let response = self
            .http
            .get(&url)
            .query(&query.params())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body: CatalogResponse = response.json().await?;
        Ok(body.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(json: &str) -> CatalogPage {
        serde_json::from_str::<CatalogResponse>(json).unwrap().into()
    }

    #[test]
    fn test_results_pass_through() {
        let result = page(r#"{"page":1,"results":[{"id":1,"title":"A"},{"id":2,"title":"B"}]}"#);
        assert!(result.error.is_none());
        let titles: Vec<&str> = result.results.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_missing_results_is_empty_list() {
        let result = page(r#"{"page":1}"#);
        assert!(result.results.is_empty());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_string_false_signals_failure() {
        let result = page(r#"{"Response":"False","Error":"Movie not found!"}"#);
        assert_eq!(result.error.as_deref(), Some("Movie not found!"));
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_bool_false_without_message() {
        let result = page(r#"{"Response":false,"results":[{"id":1,"title":"A"}]}"#);
        assert_eq!(result.error.as_deref(), Some(CATALOG_ERROR_FALLBACK));
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_true_flag_is_not_failure() {
        assert!(!ResponseFlag::Text("True".to_string()).is_failure());
        assert!(!ResponseFlag::Bool(true).is_failure());
        let result = page(r#"{"Response":"True","results":[]}"#);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let catalog = TmdbCatalog::new(
            reqwest::Client::new(),
            &CatalogConfig {
                base_url: "https://api.themoviedb.org/3/".to_string(),
                api_key: "key".to_string(),
            },
        );
        assert_eq!(
            catalog.endpoint(&CatalogQuery::Discover),
            "https://api.themoviedb.org/3/discover/movie"
        );
        assert_eq!(
            catalog.endpoint(&CatalogQuery::Search("x".to_string())),
            "https://api.themoviedb.org/3/search/movie"
        );
    }
}
