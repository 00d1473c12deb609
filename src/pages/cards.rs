//! Card previews: variants, padding, shadow and rounding grids.

use dioxus::prelude::*;
use tailframe_ui::{Card, CardPadding, CardRounded, CardShadow, CardVariant, Grid, GridGap};

use crate::components::{PreviewPage, PreviewSection};

#[component]
pub fn Cards() -> Element {
    rsx! {
        PreviewPage { title: "Cards",
            PreviewSection { title: "Variants",
                Grid { cols: 3, gap: GridGap::Sm, class: "w-full",
                    Card { p { "Default" } }
                    Card { variant: CardVariant::Bordered, p { "Bordered" } }
                    Card { variant: CardVariant::Elevated, p { "Elevated" } }
                }
            }
            PreviewSection { title: "Padding",
                Grid { cols: 4, gap: GridGap::Sm, class: "w-full",
                    Card { variant: CardVariant::Bordered, padding: CardPadding::None, p { "None" } }
                    Card { variant: CardVariant::Bordered, padding: CardPadding::Sm, p { "Small" } }
                    Card { variant: CardVariant::Bordered, p { "Default" } }
                    Card { variant: CardVariant::Bordered, padding: CardPadding::Lg, p { "Large" } }
                }
            }
            PreviewSection { title: "Shadow",
                Grid { cols: 5, gap: GridGap::Sm, class: "w-full",
                    Card { shadow: CardShadow::None, p { "None" } }
                    Card { shadow: CardShadow::Sm, p { "Small" } }
                    Card { p { "Default" } }
                    Card { shadow: CardShadow::Lg, p { "Large" } }
                    Card { shadow: CardShadow::Xl, p { "Extra large" } }
                }
            }
            PreviewSection { title: "Rounding",
                Grid { cols: 5, gap: GridGap::Sm, class: "w-full",
                    Card { variant: CardVariant::Bordered, rounded: CardRounded::None, p { "None" } }
                    Card { variant: CardVariant::Bordered, rounded: CardRounded::Sm, p { "Small" } }
                    Card { variant: CardVariant::Bordered, p { "Default" } }
                    Card { variant: CardVariant::Bordered, rounded: CardRounded::Lg, p { "Large" } }
                    Card { variant: CardVariant::Bordered, rounded: CardRounded::Xl, p { "Extra large" } }
                }
            }
        }
    }
}
