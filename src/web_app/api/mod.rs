// web_app/api/mod.rs - Server-side access to the catalog and document store
//
// - config.rs: environment-driven settings for both services
// - error.rs: typed errors for each boundary
// - catalog.rs: movie catalog trait + TMDB client
// - store.rs: trending/search-count trait + Appwrite client
// - service.rs: MovieService, the server half of the home page controller
// - state.rs: process-wide service slot used by the server functions

pub mod config;
pub mod error;
pub mod catalog;
pub mod store;
pub mod service;
pub mod state;

pub use catalog::{MovieCatalog, TmdbCatalog};
pub use config::DiscoveryConfig;
pub use error::{CatalogError, ConfigError, StoreError};
pub use service::MovieService;
pub use store::{AppwriteStore, TrendingStore};
