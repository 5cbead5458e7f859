use crate::pages::landing::content::{HEADING_ACCENT, HEADING_PREFIX, SUBTITLE};
use leptos::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <div class="text-center">
            <h1 class="text-4xl font-extrabold text-gray-900 dark:text-white sm:text-5xl md:text-6xl" role="heading" aria-level="1">
                {HEADING_PREFIX}" "<span class="text-indigo-600">{HEADING_ACCENT}</span>
            </h1>
            <p class="mt-3 max-w-2xl mx-auto text-xl text-gray-500 dark:text-gray-400">
                {SUBTITLE}
            </p>
        </div>
    }
}
