// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Optional message to display below the spinner
    #[prop(default = "")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div role="status" class="flex flex-col items-center justify-center p-8">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-700 border-t-indigo-400"></div>
            <Show when=move || !message.is_empty()>
                <span class="mt-4 text-gray-400 font-medium animate-pulse">{message}</span>
            </Show>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Error message component
#[component]
pub fn ErrorMessage(
    /// The error message to display
    message: String,
) -> impl IntoView {
    view! {
        <p class="text-red-500">{message}</p>
    }
}
