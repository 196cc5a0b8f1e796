// web_app/pages/home.rs - Home page component
//
// Owns the view state and drives both remote reads:
// - every keystroke arms a debounce timer; only the latest one publishes,
//   and only when its value differs from the published term
// - each debounced term starts a movie request tagged with a generation,
//   and responses from superseded requests are dropped
// - the trending list is requested once on mount

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::TrendingMovie;
use crate::web_app::server_fns::{fetch_movies, trending_movies};
use crate::web_app::view_state::{trending_state, DebounceGate, FetchState, MovieFeed, DEBOUNCE_DELAY};

#[component]
pub fn HomePage() -> impl IntoView {
    let search_term = RwSignal::new(String::new());
    let debounced_term = RwSignal::new(String::new());
    let debounce = RwSignal::new(DebounceGate::default());
    let feed = RwSignal::new(MovieFeed::default());
    let trending = RwSignal::new(FetchState::<Vec<TrendingMovie>>::Idle);

    let on_input = Callback::new(move |value: String| {
        search_term.set(value.clone());
        let ticket = debounce.try_update(|gate| gate.arm()).unwrap_or_default();
        set_timeout(
            move || {
                let publish = debounced_term
                    .with_untracked(|current| debounce.with_untracked(|gate| gate.settle(ticket, &value, current)));
                if publish {
                    debounced_term.set(value);
                }
            },
            DEBOUNCE_DELAY,
        );
    });

    // Re-runs whenever the debounced term changes (and once on mount with "")
    Effect::new(move |_| {
        let term = debounced_term.get();
        let ticket = feed.try_update(|f| f.begin()).unwrap_or_default();

        spawn_local(async move {
            let outcome = fetch_movies(term).await;
            if let Err(e) = &outcome {
                leptos::logging::error!("Error fetching movies: {}", e);
            }
            feed.update(|f| {
                if !f.resolve(ticket, outcome) {
                    leptos::logging::log!("Dropped stale movie response (request {})", ticket);
                }
            });
        });
    });

    // Tracks nothing, so it runs once after hydration
    Effect::new(move |_| {
        trending.set(FetchState::Loading);

        spawn_local(async move {
            let outcome = trending_movies().await;
            if let Err(e) = &outcome {
                leptos::logging::error!("Error fetching trending movies: {}", e);
            }
            trending.set(trending_state(outcome));
        });
    });

    let movies_state = Signal::derive(move || feed.with(|f| f.state().clone()));

    view! {
        <main>
            <div class="pattern" />

            <div class="wrapper">
                <header>
                    <img src="/hero.png" alt="Hero Banner" />
                    <h1>
                        "Find " <span class="text-gradient">"Movies"</span> " You'll Enjoy Without the Hassle"
                    </h1>
                    <SearchBox search_term=search_term.into() on_input=on_input />
                </header>

                <TrendingSection state=trending.into() />

                <section class="all-movies space-y-9">
                    <h2 class="mt-[40px]">"All Movies"</h2>
                    {move || match movies_state.get() {
                        FetchState::Idle | FetchState::Loading => view! { <Spinner /> }.into_any(),
                        FetchState::Error(message) => view! { <ErrorMessage message=message /> }.into_any(),
                        FetchState::Success(movies) => view! { <MovieGrid movies=movies /> }.into_any(),
                    }}
                </section>
            </div>
        </main>
    }
}
