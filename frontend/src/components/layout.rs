use crate::pages::landing::content::COPYRIGHT;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-16 border-t border-gray-200 dark:border-gray-700 py-6">
            <p class="text-center text-sm text-gray-500 dark:text-gray-400">{COPYRIGHT}</p>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 to-indigo-100 dark:from-gray-900 dark:to-gray-950 py-12 px-4 sm:px-6 lg:px-8">
            <main class="max-w-7xl mx-auto">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}
