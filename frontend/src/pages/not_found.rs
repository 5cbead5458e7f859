use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="text-center py-24">
                <p class="text-6xl font-extrabold text-indigo-600">"404"</p>
                <h1 class="mt-4 text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</h1>
                <a href="/" class="mt-6 inline-block text-indigo-600 hover:text-indigo-700 font-medium">
                    "Back to Project Alchemist"
                </a>
            </div>
        </Layout>
    }
}
