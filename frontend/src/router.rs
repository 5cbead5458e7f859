use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::{LandingPage, NotFoundPage};

pub const ROUTE_PATHS: &[&str] = &["/", "/*any"];

pub const PAGE_TITLE: &str = crate::pages::landing::content::PRODUCT_NAME;

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text=PAGE_TITLE/>
        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
