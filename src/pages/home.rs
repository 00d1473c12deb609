//! Lookbook landing page.

use dioxus::prelude::*;
use tailframe_ui::{Card, CardShadow, CardVariant};

use crate::app::Route;
use crate::components::PreviewPage;

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    // Honor --page on startup. The value is consumed on first read, so
    // navigating back to the overview stays put.
    use_effect(move || {
        if let Some(page) = crate::take_initial_page() {
            let route = Route::from_name(&page);
            if route != (Route::Home {}) {
                tracing::info!("Jumping to requested page '{}'", page);
                navigator.replace(route);
            }
        }
    });

    rsx! {
        PreviewPage { title: "Tailframe Component Kit",
            Card { variant: CardVariant::Bordered, shadow: CardShadow::Sm,
                p { class: "text-gray-700",
                    "Presentational Dioxus components styled with Tailwind utility classes. "
                    "Every component is a pure mapping from declarative props to a "
                    "deterministic class string; interaction is annotated via data "
                    "attributes for an external behavior layer."
                }
                p { class: "mt-3 text-sm text-gray-500",
                    "Pick a family from the sidebar to browse its variants."
                }
            }
        }
    }
}
