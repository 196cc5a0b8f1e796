// web_app/components/search.rs - Search box
//
// The input reports every keystroke; debouncing is the page's job.

use leptos::prelude::*;

#[component]
pub fn SearchBox(
    /// Current (undebounced) search term
    search_term: Signal<String>,
    /// Called with the new value on every input event
    on_input: Callback<String>,
    #[prop(default = "Search through thousands of movies")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search w-full bg-white/5 px-4 py-3 rounded-lg mt-10 max-w-3xl mx-auto">
            <div class="relative flex items-center">
                <img src="/search.svg" alt="search" class="absolute left-2 h-5 w-5" />
                <input
                    type="text"
                    placeholder=placeholder
                    class="w-full bg-transparent py-2 sm:pr-10 pl-10 text-base text-gray-200 \
                           placeholder-light-200 outline-hidden"
                    prop:value=move || search_term.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
