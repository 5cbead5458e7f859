pub mod call_to_action;
pub mod features;
pub mod hero;
pub mod info;
pub mod testimonials;

pub use call_to_action::CallToAction;
pub use features::FeaturesGrid;
pub use hero::HeroSection;
pub use info::InfoBlock;
pub use testimonials::TestimonialsSection;
