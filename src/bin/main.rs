// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - The movie service (catalog + document store clients)
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use std::sync::Arc;

    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use movie_discovery::web_app::api::{state, AppwriteStore, DiscoveryConfig, MovieService, TmdbCatalog};
    use movie_discovery::web_app::app::App as WebApp;
    use tracing_subscriber::EnvFilter;

    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables
    dotenv::dotenv().ok();
    let config = DiscoveryConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let http = reqwest::Client::builder()
        .user_agent(concat!("movie_discovery/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(std::io::Error::other)?;

    let service = MovieService::new(
        Arc::new(TmdbCatalog::new(http.clone(), &config.catalog)),
        Arc::new(AppwriteStore::new(http, config.store.clone())),
    );

    tracing::info!(
        "Catalog at {}, store at {} (collection {})",
        config.catalog.base_url,
        config.store.endpoint,
        config.store.collection_id
    );

    // Initialize global service for server functions
    state::init_service(service.clone());

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).map_err(std::io::Error::other)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let service_data = web::Data::new(service.clone());

        App::new()
            // Share the movie service across all handlers
            .app_data(service_data)
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            // Remaining public assets (hero image, icons, poster fallback)
            .service(Files::new("/", site_root_str))
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
