use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "border border-transparent text-white bg-indigo-600 hover:bg-indigo-700 focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-indigo-600",
        }
    }
}

/// Plain `type="button"` element with no click handler.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center rounded-md text-base font-medium transition-colors duration-200 {} {}",
        variant.classes(),
        class
    );
    view! {
        <button type="button" class=classes>
            {children()}
        </button>
    }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold text-gray-900 dark:text-white">{title}</h2>
        {subtitle.map(|text| view! {
            <p class="mt-2 text-lg text-gray-600 dark:text-gray-300">{text}</p>
        })}
    }
}
