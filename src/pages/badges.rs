//! Badge previews: color, size, rounding, removable and linked badges.

use dioxus::prelude::*;
use tailframe_ui::{Badge, BadgeRounded, BadgeSize, BadgeVariant};

use crate::components::{PreviewPage, PreviewSection};

const LIGHT_VARIANTS: [(BadgeVariant, &str); 8] = [
    (BadgeVariant::Default, "Default"),
    (BadgeVariant::Primary, "Primary"),
    (BadgeVariant::Secondary, "Secondary"),
    (BadgeVariant::Success, "Success"),
    (BadgeVariant::Warning, "Warning"),
    (BadgeVariant::Error, "Error"),
    (BadgeVariant::Info, "Info"),
    (BadgeVariant::Outline, "Outline"),
];

const SOLID_VARIANTS: [(BadgeVariant, &str); 6] = [
    (BadgeVariant::SolidPrimary, "Primary"),
    (BadgeVariant::SolidSecondary, "Secondary"),
    (BadgeVariant::SolidSuccess, "Success"),
    (BadgeVariant::SolidWarning, "Warning"),
    (BadgeVariant::SolidError, "Error"),
    (BadgeVariant::SolidInfo, "Info"),
];

#[component]
pub fn Badges() -> Element {
    rsx! {
        PreviewPage { title: "Badges",
            PreviewSection { title: "Light variants",
                for (variant, label) in LIGHT_VARIANTS {
                    Badge { variant, "{label}" }
                }
            }
            PreviewSection { title: "Solid variants",
                for (variant, label) in SOLID_VARIANTS {
                    Badge { variant, "{label}" }
                }
            }
            PreviewSection { title: "Sizes",
                Badge { variant: BadgeVariant::Primary, size: BadgeSize::Sm, "Small" }
                Badge { variant: BadgeVariant::Primary, "Default" }
                Badge { variant: BadgeVariant::Primary, size: BadgeSize::Lg, "Large" }
                Badge { variant: BadgeVariant::Primary, size: BadgeSize::Xl, "Extra Large" }
            }
            PreviewSection { title: "Rounding",
                Badge { variant: BadgeVariant::Primary, rounded: BadgeRounded::None, "None" }
                Badge { variant: BadgeVariant::Primary, rounded: BadgeRounded::Sm, "Small" }
                Badge { variant: BadgeVariant::Primary, "Default" }
                Badge { variant: BadgeVariant::Primary, rounded: BadgeRounded::Lg, "Large" }
                Badge { variant: BadgeVariant::Primary, rounded: BadgeRounded::Full, "Full" }
            }
            PreviewSection {
                title: "Removable",
                note: "The remove affordance is annotated for the behavior layer.",
                Badge { variant: BadgeVariant::Primary, removable: true, "JavaScript" }
                Badge { variant: BadgeVariant::Success, removable: true, "Rust" }
                Badge { variant: BadgeVariant::Info, removable: true, "Python" }
                Badge { variant: BadgeVariant::Warning, removable: true, "CSS" }
                Badge { variant: BadgeVariant::Error, removable: true, "HTML" }
            }
            PreviewSection { title: "With status dot",
                Badge { variant: BadgeVariant::Success, dot: true, "Online" }
                Badge { variant: BadgeVariant::Warning, dot: true, "Away" }
                Badge { variant: BadgeVariant::Error, dot: true, "Offline" }
                Badge { variant: BadgeVariant::SolidSuccess, dot: true, "Active" }
            }
            PreviewSection {
                title: "As links",
                note: "A badge with an href renders as a hyperlink.",
                Badge { variant: BadgeVariant::Primary, href: "#", "Documentation" }
                Badge { variant: BadgeVariant::Outline, href: "#", target: "_blank", "External" }
            }
        }
    }
}
