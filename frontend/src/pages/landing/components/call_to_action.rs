use crate::{
    components::common::{Button, ButtonVariant},
    pages::landing::content::{CTA_BUTTON, CTA_TEXT, CTA_TITLE},
};
use leptos::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <div class="mt-16 text-center">
            <h2 class="text-3xl font-bold text-gray-900 dark:text-white">{CTA_TITLE}</h2>
            <p class="mt-4 text-xl text-gray-600 dark:text-gray-300">{CTA_TEXT}</p>
            <Button variant=ButtonVariant::Primary class="mt-8 px-8 py-3 md:py-4 md:text-lg md:px-10">
                {CTA_BUTTON}
            </Button>
        </div>
    }
}
