//! Tooltip previews: positions, variants, sizes and triggers.
//!
//! Panels render with `opacity-0` until the behavior layer shows them;
//! the lookbook is only checking placement and annotation, so a hover
//! override makes them visible here.

use dioxus::prelude::*;
use tailframe_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Tooltip, TooltipPosition, TooltipSize,
    TooltipTrigger, TooltipVariant,
};

use crate::components::{PreviewPage, PreviewSection};

const POSITIONS: [(TooltipPosition, &str); 8] = [
    (TooltipPosition::Top, "Top"),
    (TooltipPosition::Bottom, "Bottom"),
    (TooltipPosition::Left, "Left"),
    (TooltipPosition::Right, "Right"),
    (TooltipPosition::TopLeft, "Top left"),
    (TooltipPosition::TopRight, "Top right"),
    (TooltipPosition::BottomLeft, "Bottom left"),
    (TooltipPosition::BottomRight, "Bottom right"),
];

const VARIANTS: [(TooltipVariant, &str); 7] = [
    (TooltipVariant::Dark, "Dark"),
    (TooltipVariant::Light, "Light"),
    (TooltipVariant::Primary, "Primary"),
    (TooltipVariant::Success, "Success"),
    (TooltipVariant::Warning, "Warning"),
    (TooltipVariant::Error, "Error"),
    (TooltipVariant::Info, "Info"),
];

#[component]
pub fn Tooltips() -> Element {
    rsx! {
        // Lookbook-only override so the annotated panels are visible.
        style {
            "[data-tooltip-target=\"wrapper\"]:hover [data-tooltip-target=\"tooltip\"] {{ opacity: 1; }}"
        }
        PreviewPage { title: "Tooltips",
            PreviewSection { title: "Positions", note: "Hover each trigger.",
                div { class: "flex flex-wrap gap-8 py-8",
                    for (position, label) in POSITIONS {
                        Tooltip { text: "Tooltip", position,
                            Button { variant: ButtonVariant::Outline, "{label}" }
                        }
                    }
                }
            }
            PreviewSection { title: "Variants",
                div { class: "flex flex-wrap gap-8 py-8",
                    for (variant, label) in VARIANTS {
                        Tooltip { text: "{label} tooltip", variant,
                            Badge { variant: BadgeVariant::Secondary, "{label}" }
                        }
                    }
                }
            }
            PreviewSection { title: "Sizes",
                div { class: "flex flex-wrap gap-8 py-8",
                    Tooltip { text: "Small", size: TooltipSize::Sm,
                        Button { variant: ButtonVariant::Ghost, "Small" }
                    }
                    Tooltip { text: "Default",
                        Button { variant: ButtonVariant::Ghost, "Default" }
                    }
                    Tooltip { text: "Large", size: TooltipSize::Lg,
                        Button { variant: ButtonVariant::Ghost, "Large" }
                    }
                }
            }
            PreviewSection {
                title: "Triggers and delay",
                note: "The trigger only selects which events are annotated.",
                div { class: "flex flex-wrap gap-8 py-8",
                    Tooltip { text: "Shown on hover", delay: 300,
                        Button { variant: ButtonVariant::Secondary, "Hover (300ms)" }
                    }
                    Tooltip { text: "Toggled on click", trigger: TooltipTrigger::Click,
                        Button { variant: ButtonVariant::Secondary, "Click" }
                    }
                    Tooltip { text: "Shown on focus", trigger: TooltipTrigger::Focus,
                        Button { variant: ButtonVariant::Secondary, "Focus" }
                    }
                }
            }
            PreviewSection { title: "Without arrow",
                div { class: "py-8",
                    Tooltip { text: "No arrow here", arrow: false,
                        Button { variant: ButtonVariant::Outline, "Hover me" }
                    }
                }
            }
        }
    }
}
