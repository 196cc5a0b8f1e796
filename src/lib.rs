// lib.rs - Root module for the movie_discovery library
//
// The library is compiled twice by cargo-leptos: once natively with the
// `ssr` feature (linked into the server binary) and once to WASM with the
// `hydrate` feature (loaded by the browser to hydrate the server-rendered page).

/// The Leptos web application: models, server functions, components, pages
pub mod web_app;

/// In-memory catalog and store doubles used by the test suites
#[cfg(feature = "ssr")]
pub mod fixtures;

/// WASM entry point called by the generated JS glue once the page has loaded
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
