//! Shared chrome for the lookbook pages.

use dioxus::prelude::*;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct PreviewPageProps {
    /// Page heading
    pub title: String,
    pub children: Element,
}

/// Page shell: sidebar with one link per family, heading, content column.
#[component]
pub fn PreviewPage(props: PreviewPageProps) -> Element {
    let current: Route = use_route();

    rsx! {
        div { class: "min-h-screen bg-gray-50 flex",
            aside { class: "w-48 shrink-0 border-r border-gray-200 bg-white p-4",
                p { class: "mb-4 text-xs font-semibold uppercase tracking-wide text-gray-400",
                    "Tailframe"
                }
                nav { class: "space-y-1",
                    for route in Route::all() {
                        Link {
                            to: route.clone(),
                            class: if route == current {
                                "block rounded-md px-3 py-2 text-sm font-medium bg-indigo-50 text-indigo-700"
                            } else {
                                "block rounded-md px-3 py-2 text-sm font-medium text-gray-600 hover:bg-gray-50 hover:text-gray-900"
                            },
                            "{route.title()}"
                        }
                    }
                }
            }
            main { class: "flex-1 overflow-y-auto p-8",
                h1 { class: "mb-8 text-2xl font-bold text-gray-900", "{props.title}" }
                div { class: "space-y-10", {props.children} }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PreviewSectionProps {
    /// Section heading
    pub title: String,
    /// Optional explanatory note under the heading
    #[props(default)]
    pub note: Option<String>,
    pub children: Element,
}

/// One labelled preview block.
#[component]
pub fn PreviewSection(props: PreviewSectionProps) -> Element {
    rsx! {
        section {
            h3 { class: "text-lg font-semibold text-gray-900 mb-1", "{props.title}" }
            if let Some(note) = &props.note {
                p { class: "text-sm text-gray-600 mb-3", "{note}" }
            }
            div { class: "mt-3 flex flex-wrap items-center gap-3", {props.children} }
        }
    }
}
