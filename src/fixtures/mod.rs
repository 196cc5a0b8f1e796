// fixtures/mod.rs - In-memory doubles for the remote services
//
// `ScriptedCatalog` answers catalog reads from a queue of canned responses
// and records every query it saw. `MemoryStore` keeps trending documents
// in a Vec and applies the same create-or-increment rule as the real store.
// Both can be told to fail so error paths can be exercised.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::web_app::api::{CatalogError, MovieCatalog, MovieService, StoreError, TrendingStore};
use crate::web_app::model::{poster_url, CatalogPage, CatalogQuery, Movie, TrendingMovie};

/// Build a movie with just an id and a title
pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        vote_average: Some(7.0),
        original_language: Some("en".to_string()),
        release_date: Some("2020-01-01".to_string()),
        popularity: Some(100.0),
        overview: None,
    }
}

/// Canned catalog response
#[derive(Clone, Debug)]
pub enum CatalogReply {
    Page(CatalogPage),
    Status(u16),
}

#[derive(Default)]
pub struct ScriptedCatalog {
    replies: Mutex<VecDeque<CatalogReply>>,
    queries: Mutex<Vec<CatalogQuery>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful page of results
    pub fn reply(self, results: Vec<Movie>) -> Self {
        self.push(CatalogReply::Page(CatalogPage::with_results(results)))
    }

    pub fn push(self, reply: CatalogReply) -> Self {
        lock(&self.replies).push_back(reply);
        self
    }

    /// Every query received, oldest first
    pub fn queries(&self) -> Vec<CatalogQuery> {
        lock(&self.queries).clone()
    }
}

#[async_trait]
impl MovieCatalog for ScriptedCatalog {
    async fn fetch(&self, query: &CatalogQuery) -> Result<CatalogPage, CatalogError> {
        lock(&self.queries).push(query.clone());
        match lock(&self.replies).pop_front() {
            Some(CatalogReply::Page(page)) => Ok(page),
            Some(CatalogReply::Status(status)) => Err(CatalogError::Status(status)),
            None => Ok(CatalogPage::default()),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<TrendingMovie>>,
    recorded: Mutex<Vec<(String, i64)>>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with HTTP 503
    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    pub fn with_document(self, term: &str, count: i64, movie: &Movie) -> Self {
        {
            let mut documents = lock(&self.documents);
            let entry = document(documents.len() + 1, term, count, movie);
            documents.push(entry);
        }
        self
    }

    /// Every `record_search` call as (term, movie id), including failed ones
    pub fn recorded(&self) -> Vec<(String, i64)> {
        lock(&self.recorded).clone()
    }

    pub fn count_for(&self, term: &str) -> Option<i64> {
        lock(&self.documents).iter().find(|d| d.search_term == term).map(|d| d.count)
    }

    fn unavailable() -> StoreError {
        StoreError::Status { status: 503, message: "store unavailable".to_string() }
    }
}

#[async_trait]
impl TrendingStore for MemoryStore {
    async fn trending(&self, limit: u32) -> Result<Vec<TrendingMovie>, StoreError> {
        if self.failing {
            return Err(Self::unavailable());
        }
        let mut documents = lock(&self.documents).clone();
        documents.sort_by(|a, b| b.count.cmp(&a.count));
        documents.truncate(limit as usize);
        Ok(documents)
    }

    async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), StoreError> {
        lock(&self.recorded).push((term.to_string(), movie.id));
        if self.failing {
            return Err(Self::unavailable());
        }

        let mut documents = lock(&self.documents);
        match documents.iter().position(|d| d.search_term == term) {
            Some(index) => documents[index].count += 1,
            None => {
                let entry = document(documents.len() + 1, term, 1, movie);
                documents.push(entry);
            }
        }
        Ok(())
    }
}

/// A service over the given doubles, keeping handles for assertions
pub fn service(catalog: ScriptedCatalog, store: MemoryStore) -> (MovieService, Arc<ScriptedCatalog>, Arc<MemoryStore>) {
    let catalog = Arc::new(catalog);
    let store = Arc::new(store);
    (MovieService::new(catalog.clone(), store.clone()), catalog, store)
}

fn document(n: usize, term: &str, count: i64, movie: &Movie) -> TrendingMovie {
    TrendingMovie {
        id: format!("doc-{}", n),
        search_term: term.to_string(),
        count,
        movie_id: movie.id,
        title: movie.title.clone(),
        poster_url: movie.poster_path.as_deref().map(poster_url).unwrap_or_default(),
        updated_at: None,
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
