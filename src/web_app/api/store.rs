// web_app/api/store.rs - Trending list and search counters
//
// One document per distinct search term:
//   { searchTerm, count, movie_id, title, poster_url }
// The trending list is the top documents by `count`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::config::StoreConfig;
use super::error::StoreError;
use crate::web_app::model::{poster_url, Movie, TrendingMovie};

/// Access to the trending documents
#[async_trait]
pub trait TrendingStore: Send + Sync + 'static {
    /// Most-searched entries, highest count first
    async fn trending(&self, limit: u32) -> Result<Vec<TrendingMovie>, StoreError>;

    /// Bump the counter for `term`, creating its document on first use
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), StoreError>;
}

/// Appwrite query builders (JSON-encoded `queries[]` parameters)
pub mod query {
    use serde_json::json;

    pub fn equal(attribute: &str, value: &str) -> String {
        json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
    }

    pub fn order_desc(attribute: &str) -> String {
        json!({ "method": "orderDesc", "attribute": attribute }).to_string()
    }

    pub fn limit(n: u32) -> String {
        json!({ "method": "limit", "values": [n] }).to_string()
    }
}

/// Response of the list-documents endpoint
#[derive(Debug, Deserialize)]
pub struct DocumentList<T> {
    #[serde(default)]
    pub total: u64,
    pub documents: Vec<T>,
}

/// Fields written when a term is searched for the first time
#[derive(Debug, Serialize, PartialEq)]
pub struct NewSearchEntry {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: i64,
    pub movie_id: i64,
    pub title: String,
    pub poster_url: String,
}

impl NewSearchEntry {
    pub fn new(term: &str, movie: &Movie) -> Self {
        Self {
            search_term: term.to_string(),
            count: 1,
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.poster_path.as_deref().map(poster_url).unwrap_or_default(),
        }
    }
}

/// Appwrite REST client for one collection
#[derive(Clone)]
pub struct AppwriteStore {
    http: reqwest::Client,
    config: StoreConfig,
}

impl AppwriteStore {
    pub fn new(http: reqwest::Client, config: StoreConfig) -> Self {
        Self { http, config }
    }

    pub fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint.trim_end_matches('/'),
            self.config.database_id,
            self.config.collection_id
        )
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header("X-Appwrite-Project", &self.config.project_id);
        match &self.config.api_key {
            Some(key) => builder.header("X-Appwrite-Key", key),
            None => builder,
        }
    }

    async fn list<T: DeserializeOwned>(&self, queries: &[String]) -> Result<Vec<T>, StoreError> {
        let params: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();
        let response = self
            .request(reqwest::Method::GET, self.documents_url())
            .query(&params)
            .send()
            .await?;
        let list: DocumentList<T> = check(response).await?.json().await?;
        Ok(list.documents)
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or(body);
    Err(StoreError::Status { status: status.as_u16(), message })
}

#[async_trait]
impl TrendingStore for AppwriteStore {
    async fn trending(&self, limit: u32) -> Result<Vec<TrendingMovie>, StoreError> {
        self.list(&[query::limit(limit), query::order_desc("count")]).await
    }

    async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), StoreError> {
        let existing: Vec<TrendingMovie> = self.list(&[query::equal("searchTerm", term)]).await?;

        match existing.into_iter().next() {
            Some(doc) => {
                let url = format!("{}/{}", self.documents_url(), doc.id);
                tracing::debug!("Incrementing search count for '{}' ({} -> {})", term, doc.count, doc.count + 1);
                let response = self
                    .request(reqwest::Method::PATCH, url)
                    .json(&json!({ "data": { "count": doc.count + 1 } }))
                    .send()
                    .await?;
                check(response).await?;
            }
            None => {
                tracing::debug!("Creating search count document for '{}'", term);
                let response = self
                    .request(reqwest::Method::POST, self.documents_url())
                    .json(&json!({
                        "documentId": uuid::Uuid::new_v4().simple().to_string(),
                        "data": NewSearchEntry::new(term, movie),
                    }))
                    .send()
                    .await?;
                check(response).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AppwriteStore {
        AppwriteStore::new(
            reqwest::Client::new(),
            StoreConfig {
                endpoint: "https://cloud.appwrite.io/v1/".to_string(),
                project_id: "p".to_string(),
                database_id: "db".to_string(),
                collection_id: "metrics".to_string(),
                api_key: None,
            },
        )
    }

    #[test]
    fn test_documents_url() {
        assert_eq!(
            store().documents_url(),
            "https://cloud.appwrite.io/v1/databases/db/collections/metrics/documents"
        );
    }

    #[test]
    fn test_query_encoding() {
        let equal: Value = serde_json::from_str(&query::equal("searchTerm", "batman")).unwrap();
        assert_eq!(equal["method"], "equal");
        assert_eq!(equal["attribute"], "searchTerm");
        assert_eq!(equal["values"][0], "batman");

        let order: Value = serde_json::from_str(&query::order_desc("count")).unwrap();
        assert_eq!(order["method"], "orderDesc");

        let limit: Value = serde_json::from_str(&query::limit(5)).unwrap();
        assert_eq!(limit["values"][0], 5);
    }

    #[test]
    fn test_new_entry_payload() {
        let movie = Movie {
            id: 268,
            title: "Batman".to_string(),
            poster_path: Some("/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg".to_string()),
            vote_average: Some(7.2),
            original_language: None,
            release_date: None,
            popularity: None,
            overview: None,
        };
        let entry = NewSearchEntry::new("batman", &movie);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["searchTerm"], "batman");
        assert_eq!(value["count"], 1);
        assert_eq!(value["movie_id"], 268);
        assert_eq!(
            value["poster_url"],
            "https://image.tmdb.org/t/p/w500/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg"
        );
    }

    #[test]
    fn test_document_list_decoding() {
        let json = r#"{"total":1,"documents":[{"$id":"a","searchTerm":"x","count":2,"movie_id":1,"poster_url":""}]}"#;
        let list: DocumentList<TrendingMovie> = serde_json::from_str(json).unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.documents[0].count, 2);
    }
}
