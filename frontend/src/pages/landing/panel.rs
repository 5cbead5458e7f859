use crate::{
    components::layout::Layout,
    pages::landing::{
        components::{CallToAction, FeaturesGrid, HeroSection, InfoBlock, TestimonialsSection},
        content::{
            DOCUMENT_TYPES, DOCUMENT_TYPES_TITLE, FEATURES, TECH_STACK, TECH_STACK_TITLE,
            TESTIMONIALS,
        },
    },
};
use leptos::*;

#[component]
pub fn LandingPanel() -> impl IntoView {
    view! {
        <Layout>
            <HeroSection />
            <FeaturesGrid features=&FEATURES[..] />
            <InfoBlock title=DOCUMENT_TYPES_TITLE text=DOCUMENT_TYPES />
            <InfoBlock title=TECH_STACK_TITLE text=TECH_STACK />
            <TestimonialsSection testimonials=&TESTIMONIALS[..] />
            <CallToAction />
        </Layout>
    }
}
