use crate::components::common::SectionHeading;
use leptos::*;

/// Centered heading plus one paragraph; used for the document types and
/// tech stack blocks.
#[component]
pub fn InfoBlock(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="mt-16 text-center">
            <SectionHeading title=title subtitle=text />
        </div>
    }
}
