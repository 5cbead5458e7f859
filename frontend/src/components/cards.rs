use leptos::*;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature flex flex-col items-center p-6 bg-white dark:bg-gray-800 rounded-xl shadow-lg hover:shadow-xl transition-all duration-300 transform hover:scale-105">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-lg font-bold text-gray-800 dark:text-gray-100">{title}</h3>
            <p class="mt-2 text-sm text-gray-600 dark:text-gray-300 text-center">{description}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(quote: &'static str, author: &'static str) -> impl IntoView {
    view! {
        <div class="testimonial bg-white dark:bg-gray-800 p-6 rounded-lg shadow-md">
            <p class="text-gray-600 dark:text-gray-300 italic">{quote}</p>
            <p class="mt-4 font-semibold text-gray-900 dark:text-gray-100">{author}</p>
        </div>
    }
}
