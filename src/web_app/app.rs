// web_app/app.rs - Root application component
//
// Sets up meta tags, routing, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::HomePage;

/// Browser tab title
pub const APP_TITLE: &str = "Movie Discovery";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Search movies and see what everyone else is searching for" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/movie_discovery.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-primary flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-500 mb-4">"404"</h1>
                <p class="text-xl text-gray-300 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Back to Movies"
                </a>
            </div>
        </div>
    }
}
