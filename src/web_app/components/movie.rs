// web_app/components/movie.rs - Movie display components

use leptos::prelude::*;
use crate::web_app::model::Movie;

/// Card for one catalog movie
#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let poster = movie.poster_src();
    let rating = movie.rating_label();
    let language = movie.language_label();
    let year = movie.release_year();
    let title = movie.title;

    view! {
        <li class="movie-card bg-dark-100 p-5 rounded-2xl shadow-inner shadow-light-100/10">
            <img src=poster alt=title.clone() class="rounded-lg h-auto w-full" />

            <div class="mt-4">
                <h3 class="text-white font-bold text-base line-clamp-1">{title}</h3>

                <div class="content mt-2 flex flex-row items-center flex-wrap gap-2">
                    <div class="rating flex flex-row items-center gap-1">
                        <img src="/star.svg" alt="Star Icon" class="size-4 object-contain" />
                        <p class="font-bold text-base text-white">{rating}</p>
                    </div>
                    <span class="text-sm text-gray-100">"•"</span>
                    <p class="lang capitalize text-gray-100 font-medium text-base">{language}</p>
                    <span class="text-sm text-gray-100">"•"</span>
                    <p class="year text-gray-100 font-medium text-base">{year}</p>
                </div>
            </div>
        </li>
    }
}

/// Grid of movie cards
#[component]
pub fn MovieGrid(movies: Vec<Movie>) -> impl IntoView {
    view! {
        <ul class="grid grid-cols-1 gap-5 xs:grid-cols-2 md:grid-cols-3 lg:grid-cols-4">
            {movies
                .into_iter()
                .map(|movie| view! { <MovieCard movie=movie /> })
                .collect_view()}
        </ul>
    }
}
