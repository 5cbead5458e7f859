use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Whether the `dark` class should be on `<html>`, given what the OS reports.
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            ThemePreference::System => system_prefers_dark,
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
        }
    }

    pub fn follows_system(self) -> bool {
        matches!(self, ThemePreference::System)
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::ThemePreference;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    const DARK_CLASS: &str = "dark";
    const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    fn update_html_class(html: &web_sys::Element, is_dark: bool) {
        let list = html.class_list();
        let result = if is_dark {
            list.add_1(DARK_CLASS)
        } else {
            list.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            log::warn!("could not update the dark theme class");
        }
    }

    pub fn init(preference: ThemePreference) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(html) = window.document().and_then(|doc| doc.document_element()) else {
            return;
        };

        let media_query = window.match_media(DARK_QUERY).ok().flatten();
        let system_dark = media_query.as_ref().map(|q| q.matches()).unwrap_or(false);
        update_html_class(&html, preference.is_dark(system_dark));
        log::debug!("theme applied: {:?} (system dark: {})", preference, system_dark);

        if !preference.follows_system() {
            return;
        }
        if let Some(list) = media_query {
            let html_clone = html.clone();
            let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
                update_html_class(&html_clone, event.matches());
            }) as Box<dyn FnMut(_)>);
            if list
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not watch the system color scheme");
            }
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::init as init_theme;

#[cfg(not(target_arch = "wasm32"))]
pub fn init_theme(_preference: ThemePreference) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_preference_follows_os() {
        assert!(ThemePreference::System.is_dark(true));
        assert!(!ThemePreference::System.is_dark(false));
        assert!(ThemePreference::System.follows_system());
    }

    #[test]
    fn explicit_preferences_ignore_os() {
        assert!(!ThemePreference::Light.is_dark(true));
        assert!(ThemePreference::Dark.is_dark(false));
        assert!(!ThemePreference::Dark.follows_system());
    }

    #[test]
    fn preference_deserializes_lowercase_names() {
        let dark: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(dark, ThemePreference::Dark);
        assert!(serde_json::from_str::<ThemePreference>("\"Dark\"").is_err());
    }
}
