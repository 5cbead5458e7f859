use crate::{components::cards::FeatureCard, pages::landing::content::FeatureEntry};
use leptos::*;

#[component]
pub fn FeaturesGrid(features: &'static [FeatureEntry]) -> impl IntoView {
    view! {
        <div class="mt-12">
            <div class="grid grid-cols-1 gap-8 sm:grid-cols-2 lg:grid-cols-3">
                {features
                    .iter()
                    .map(|feature| view! {
                        <FeatureCard
                            icon=feature.icon
                            title=feature.title
                            description=feature.description
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
