//! Button previews: variants, sizes, disabled state and link buttons.

use dioxus::prelude::*;
use tailframe_ui::{Button, ButtonSize, ButtonVariant};

use crate::components::{PreviewPage, PreviewSection};

const VARIANTS: [(ButtonVariant, &str); 6] = [
    (ButtonVariant::Primary, "Primary"),
    (ButtonVariant::Secondary, "Secondary"),
    (ButtonVariant::Destructive, "Destructive"),
    (ButtonVariant::Outline, "Outline"),
    (ButtonVariant::Ghost, "Ghost"),
    (ButtonVariant::Link, "Link"),
];

#[component]
pub fn Buttons() -> Element {
    rsx! {
        PreviewPage { title: "Buttons",
            PreviewSection { title: "Variants",
                for (variant, label) in VARIANTS {
                    Button { variant, "{label}" }
                }
            }
            PreviewSection { title: "Sizes",
                Button { size: ButtonSize::Sm, "Small" }
                Button { "Default" }
                Button { size: ButtonSize::Lg, "Large" }
                Button { size: ButtonSize::Icon, "+" }
            }
            PreviewSection { title: "Disabled",
                for (variant, label) in VARIANTS {
                    Button { variant, disabled: true, "{label}" }
                }
            }
            PreviewSection {
                title: "As links",
                note: "A button with an href renders as a hyperlink; type, disabled and form are dropped.",
                Button { href: "#", "Plain link" }
                Button { variant: ButtonVariant::Secondary, href: "#", target: "_blank", "New tab" }
                Button { variant: ButtonVariant::Destructive, href: "#", method: "delete", "Sign out" }
            }
            PreviewSection { title: "Form association",
                Button { button_type: "submit", form: "external-form", "Submit elsewhere" }
            }
        }
    }
}
