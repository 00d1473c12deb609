use dioxus::prelude::*;

use crate::pages::{Badges, Buttons, Cards, Forms, Home, Layouts, Modals, Navigation, Tooltips};

/// Application routes, one preview page per component family.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/badges")]
    Badges {},
    #[route("/buttons")]
    Buttons {},
    #[route("/cards")]
    Cards {},
    #[route("/forms")]
    Forms {},
    #[route("/layout")]
    Layouts {},
    #[route("/modals")]
    Modals {},
    #[route("/tooltips")]
    Tooltips {},
    #[route("/navigation")]
    Navigation {},
}

impl Route {
    /// Display name for the lookbook sidebar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home {} => "Overview",
            Route::Badges {} => "Badges",
            Route::Buttons {} => "Buttons",
            Route::Cards {} => "Cards",
            Route::Forms {} => "Forms",
            Route::Layouts {} => "Layout",
            Route::Modals {} => "Modals",
            Route::Tooltips {} => "Tooltips",
            Route::Navigation {} => "Navigation",
        }
    }

    /// Look up a page by name, the way the class-mapping enums parse:
    /// case-insensitive, anything unrecognized lands on the overview.
    pub fn from_name(name: &str) -> Route {
        match name.trim().to_ascii_lowercase().as_str() {
            "badges" => Route::Badges {},
            "buttons" => Route::Buttons {},
            "cards" => Route::Cards {},
            "forms" => Route::Forms {},
            "layout" | "layouts" => Route::Layouts {},
            "modals" => Route::Modals {},
            "tooltips" => Route::Tooltips {},
            "navigation" => Route::Navigation {},
            _ => Route::Home {},
        }
    }

    /// All pages, in sidebar order.
    pub fn all() -> [Route; 9] {
        [
            Route::Home {},
            Route::Badges {},
            Route::Buttons {},
            Route::Cards {},
            Route::Forms {},
            Route::Layouts {},
            Route::Modals {},
            Route::Tooltips {},
            Route::Navigation {},
        ]
    }
}

/// Root application component.
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_map_to_routes() {
        assert_eq!(Route::from_name("badges"), Route::Badges {});
        assert_eq!(Route::from_name(" Tooltips "), Route::Tooltips {});
        assert_eq!(Route::from_name("layouts"), Route::Layouts {});
        assert_eq!(Route::from_name("navigation"), Route::Navigation {});
    }

    #[test]
    fn unknown_page_names_open_the_overview() {
        assert_eq!(Route::from_name("gadgets"), Route::Home {});
        assert_eq!(Route::from_name(""), Route::Home {});
    }
}
