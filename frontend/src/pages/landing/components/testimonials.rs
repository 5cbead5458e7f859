use crate::{
    components::{cards::TestimonialCard, common::SectionHeading},
    pages::landing::content::{Testimonial, TESTIMONIALS_TITLE},
};
use leptos::*;

#[component]
pub fn TestimonialsSection(testimonials: &'static [Testimonial]) -> impl IntoView {
    view! {
        <div class="mt-16 text-center">
            <SectionHeading title=TESTIMONIALS_TITLE />
            <div class="mt-6 grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                {testimonials
                    .iter()
                    .map(|t| view! { <TestimonialCard quote=t.quote author=t.author /> })
                    .collect_view()}
            </div>
        </div>
    }
}
