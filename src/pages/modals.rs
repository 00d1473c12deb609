//! Modal previews.
//!
//! A modal overlays the whole window, so only one is shown at a time,
//! chosen by the size selector.

use dioxus::prelude::*;
use tailframe_ui::{Button, ButtonVariant, Modal, ModalSize};

use crate::components::{PreviewPage, PreviewSection};

const SIZES: [(ModalSize, &str); 5] = [
    (ModalSize::Sm, "Small"),
    (ModalSize::Default, "Default"),
    (ModalSize::Lg, "Large"),
    (ModalSize::Xl, "Extra large"),
    (ModalSize::Full, "Full"),
];

#[component]
pub fn Modals() -> Element {
    let mut open: Signal<Option<ModalSize>> = use_signal(|| None);

    rsx! {
        PreviewPage { title: "Modals",
            PreviewSection {
                title: "Sizes",
                note: "Open/close toggling belongs to the behavior layer; the lookbook fakes it locally.",
                for (size, label) in SIZES {
                    Button { onclick: move |_| open.set(Some(size)), "{label}" }
                }
            }

            if let Some(size) = open() {
                Modal { size, modal_id: "modal_preview",
                    div { class: "p-6",
                        h3 { class: "text-lg font-semibold text-gray-900 mb-4", "Modal" }
                        p { class: "text-gray-600 mb-6",
                            "This panel demonstrates the {size:?} size variant. The overlay, "
                            "scroll container and centering wrapper are all part of the scaffold."
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| open.set(None),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
