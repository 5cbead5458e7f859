use leptos::*;

pub mod components;
pub mod content;

mod panel;

pub use panel::LandingPanel;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! { <LandingPanel /> }
}
