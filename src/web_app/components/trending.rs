// web_app/components/trending.rs - Trending movies section

use leptos::prelude::*;
use crate::web_app::model::TrendingMovie;
use crate::web_app::view_state::{ranked, trending_visible, FetchState};
use super::common::{ErrorMessage, Spinner};

/// Ranked posters of the most-searched movies.
///
/// Renders nothing while idle or when the store returned no entries.
#[component]
pub fn TrendingSection(state: Signal<FetchState<Vec<TrendingMovie>>>) -> impl IntoView {
    view! {
        <Show when=move || state.with(trending_visible)>
            <section class="trending mt-20">
                <h2>"Trending Movies"</h2>
                {move || match state.get() {
                    FetchState::Loading | FetchState::Idle => view! { <Spinner /> }.into_any(),
                    FetchState::Error(message) => view! { <ErrorMessage message=message /> }.into_any(),
                    FetchState::Success(entries) => view! {
                        <ul class="flex flex-row overflow-y-auto gap-5 -mt-10 w-full hide-scrollbar">
                            {ranked(&entries)
                                .into_iter()
                                .map(|(rank, entry)| view! { <TrendingItem rank=rank entry=entry /> })
                                .collect_view()}
                        </ul>
                    }.into_any(),
                }}
            </section>
        </Show>
    }
}

#[component]
fn TrendingItem(rank: usize, entry: TrendingMovie) -> impl IntoView {
    let caption = entry.caption();
    let poster = entry.poster_src();
    let alt = if entry.title.is_empty() { entry.search_term.clone() } else { entry.title.clone() };

    view! {
        <li class="min-w-[230px] flex flex-row items-center" title=caption>
            <p class="fancy-text mt-[22px] text-nowrap">{rank}</p>
            <img
                src=poster
                alt=alt
                class="w-[127px] h-[163px] rounded-lg object-cover -ml-3.5"
            />
        </li>
    }
}
