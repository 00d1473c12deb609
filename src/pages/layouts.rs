//! Layout previews: sections, grids and flex rows.

use dioxus::prelude::*;
use tailframe_ui::{
    Background, Container, Flex, FlexAlign, FlexJustify, Grid, GridGap, LayoutPadding, Section,
};

use crate::components::{PreviewPage, PreviewSection};

#[component]
pub fn Layouts() -> Element {
    rsx! {
        PreviewPage { title: "Layout",
            PreviewSection { title: "Section containers",
                div { class: "w-full space-y-4",
                    Section { background: Background::Gray, padding: LayoutPadding::Sm,
                        p { class: "text-sm text-gray-600", "Default container" }
                    }
                    Section {
                        container: Container::Narrow,
                        background: Background::Primary,
                        padding: LayoutPadding::Sm,
                        p { class: "text-sm text-gray-600", "Narrow container" }
                    }
                    Section {
                        container: Container::Fluid,
                        background: Background::Dark,
                        padding: LayoutPadding::Sm,
                        p { class: "text-sm text-white", "Fluid container" }
                    }
                }
            }
            PreviewSection {
                title: "Grid",
                note: "Single column on mobile, capped at two columns at the sm: breakpoint.",
                Grid { cols: 4, gap: GridGap::Sm, class: "w-full",
                    for i in 1..=8 {
                        div { class: "rounded-md bg-indigo-50 p-4 text-center text-sm text-indigo-700",
                            "Cell {i}"
                        }
                    }
                }
            }
            PreviewSection { title: "Flex rows",
                div { class: "w-full space-y-4",
                    Flex { justify: FlexJustify::Between, class: "w-full rounded-md bg-gray-100 p-3",
                        span { "start" }
                        span { "middle" }
                        span { "end" }
                    }
                    Flex {
                        justify: FlexJustify::Center,
                        align: FlexAlign::Center,
                        class: "w-full rounded-md bg-gray-100 p-3",
                        span { "centered" }
                    }
                    Flex { wrap: true, class: "w-full rounded-md bg-gray-100 p-3 gap-2",
                        for i in 1..=12 {
                            span { class: "rounded bg-white px-3 py-1 text-sm shadow-sm", "Item {i}" }
                        }
                    }
                }
            }
        }
    }
}
