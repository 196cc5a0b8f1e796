// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// Catalog and store credentials stay on the server; the browser only
// ever sees `CatalogPage` and `TrendingMovie` values.

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn service() -> Result<crate::web_app::api::MovieService, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::{state, MovieService};

    // Context first (set by tests or a custom handler)
    if let Some(service) = use_context::<MovieService>() {
        return Ok(service);
    }

    if let Some(service) = state::get_service() {
        return Ok(service);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(data) = req.app_data::<Data<MovieService>>() {
                return Ok(data.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Movie service not available"))
}

/// Search the catalog, or list popular movies when `query` is empty
#[server(FetchMovies, "/api")]
pub async fn fetch_movies(query: String) -> Result<CatalogPage, ServerFnError> {
    tracing::info!("Movie request: query='{}'", query);

    let service = service().await?;
    let result = service.fetch_movies(&query).await;

    match &result {
        Ok(page) => match &page.error {
            Some(message) => tracing::warn!("Catalog reported an error: {}", message),
            None => tracing::info!("Movie request successful: {} results", page.results.len()),
        },
        Err(e) => tracing::error!("Movie request failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Movie fetch failed: {}", e)))
}

/// Most-searched movies from the document store
#[server(TrendingMovies, "/api")]
pub async fn trending_movies() -> Result<Vec<TrendingMovie>, ServerFnError> {
    let service = service().await?;

    service.trending().await.map_err(|e| {
        tracing::error!("Trending request failed: {}", e);
        ServerFnError::new(format!("Trending fetch failed: {}", e))
    })
}
