// web_app/api/service.rs - Server half of the home page controller
//
// Server functions are thin bridges; the read/increment rules live here
// so they can be exercised against in-memory catalog and store doubles.

use std::sync::Arc;

use super::catalog::MovieCatalog;
use super::error::{CatalogError, StoreError};
use super::store::TrendingStore;
use crate::web_app::model::{CatalogPage, CatalogQuery, TrendingMovie, TRENDING_LIMIT};

#[derive(Clone)]
pub struct MovieService {
    catalog: Arc<dyn MovieCatalog>,
    store: Arc<dyn TrendingStore>,
}

impl MovieService {
    pub fn new(catalog: Arc<dyn MovieCatalog>, store: Arc<dyn TrendingStore>) -> Self {
        Self { catalog, store }
    }

    /// Search (non-empty term) or discover (empty term).
    ///
    /// A successful search with results bumps the counter for
    /// `(term, first result)`. That write is best-effort: its failure is
    /// logged and never turns the read into an error.
    pub async fn fetch_movies(&self, term: &str) -> Result<CatalogPage, CatalogError> {
        let query = CatalogQuery::from_term(term);
        let page = self.catalog.fetch(&query).await?;

        if page.error.is_some() {
            return Ok(page);
        }

        if let (Some(term), Some(first)) = (query.term(), page.results.first()) {
            if let Err(e) = self.store.record_search(term, first).await {
                tracing::warn!("Search count update failed for '{}' (movie {}): {}", term, first.id, e);
            }
        }

        Ok(page)
    }

    pub async fn trending(&self) -> Result<Vec<TrendingMovie>, StoreError> {
        self.store.trending(TRENDING_LIMIT).await
    }
}
