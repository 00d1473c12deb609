//! Modal Components
//!
//! Structural markup for dialogs: a fixed overlay, a scroll container, a
//! centering wrapper and the panel itself. Open/close behavior belongs to
//! the external behavior layer; this component only annotates it with
//! `data-action` attributes.

use dioxus::prelude::*;

use super::{join_classes, merge_class};
use crate::id::element_id;

/// Modal panel width.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
    Full,
}

impl ModalSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ModalSize::Sm => "sm:my-8 sm:w-full sm:max-w-sm",
            ModalSize::Lg => "sm:my-8 sm:w-full sm:max-w-2xl",
            ModalSize::Xl => "sm:my-8 sm:w-full sm:max-w-4xl",
            ModalSize::Full => "sm:my-8 sm:w-full sm:max-w-6xl",
            ModalSize::Default => "sm:my-8 sm:w-full sm:max-w-lg",
        }
    }
}

impl From<&str> for ModalSize {
    /// Permissive parse: unrecognized input degrades to the default size.
    fn from(s: &str) -> Self {
        match s {
            "sm" => ModalSize::Sm,
            "lg" => ModalSize::Lg,
            "xl" => ModalSize::Xl,
            "full" => ModalSize::Full,
            _ => ModalSize::Default,
        }
    }
}

/// Dimmed backdrop behind the panel.
pub const OVERLAY_CLASSES: &str = "fixed inset-0 bg-gray-500 bg-opacity-75 transition-opacity";

/// Outer scroll container.
pub const MODAL_CONTAINER_CLASSES: &str = "fixed inset-0 z-10 w-screen overflow-y-auto";

/// Centering wrapper inside the scroll container.
pub const MODAL_WRAPPER_CLASSES: &str =
    "flex min-h-full items-end justify-center p-4 text-center sm:items-center sm:p-0";

/// Close-button region in the panel's top-right corner.
pub const CLOSE_BUTTON_CLASSES: &str = "absolute right-0 top-0 hidden pr-4 pt-4 sm:block";

/// Close icon coloring.
pub const CLOSE_ICON_CLASSES: &str = "h-6 w-6 text-gray-400 hover:text-gray-500";

/// Panel class string for the given size.
pub fn modal_panel_classes(size: ModalSize) -> String {
    join_classes(&[
        "relative transform overflow-hidden rounded-lg bg-white text-left shadow-xl transition-all",
        size.classes(),
    ])
}

/// Properties for the Modal component
#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    /// Panel width
    #[props(default)]
    pub size: ModalSize,
    /// Render the top-right close button
    #[props(default = true)]
    pub closable: bool,
    /// Annotate the overlay so a backdrop click closes the modal
    #[props(default = true)]
    pub backdrop_closable: bool,
    /// Root element id; minted as `modal_<8 hex>` when absent
    #[props(default)]
    pub modal_id: Option<String>,
    /// Optional additional CSS classes on the panel
    #[props(default)]
    pub class: Option<String>,
    /// Panel content
    pub children: Element,
}

/// Dialog scaffold: overlay, scroll container, centering wrapper, panel.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal { size: ModalSize::Sm, closable: false,
///         div { class: "p-6", "Are you sure?" }
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let modal_id = props.modal_id.clone().unwrap_or_else(|| element_id("modal"));
    let panel_class = merge_class(props.class.as_deref(), &modal_panel_classes(props.size));

    rsx! {
        div {
            id: "{modal_id}",
            class: "relative z-10",
            role: "dialog",
            "aria-modal": "true",

            div {
                class: OVERLAY_CLASSES,
                "aria-hidden": "true",
                "data-action": if props.backdrop_closable { "click->modal#close" },
            }

            div { class: MODAL_CONTAINER_CLASSES,
                div { class: MODAL_WRAPPER_CLASSES,
                    div { class: "{panel_class}", "data-modal-target": "panel",
                        if props.closable {
                            div { class: CLOSE_BUTTON_CLASSES,
                                button {
                                    r#type: "button",
                                    class: CLOSE_ICON_CLASSES,
                                    "data-action": "click->modal#close",
                                    "aria-label": "Close",
                                    "\u{00D7}"
                                }
                            }
                        }
                        {props.children}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_classes() {
        assert_eq!(ModalSize::Sm.classes(), "sm:my-8 sm:w-full sm:max-w-sm");
        assert_eq!(ModalSize::Full.classes(), "sm:my-8 sm:w-full sm:max-w-6xl");
        assert_eq!(ModalSize::default().classes(), "sm:my-8 sm:w-full sm:max-w-lg");
    }

    #[test]
    fn unknown_size_falls_back_to_default() {
        assert_eq!(ModalSize::from("humongous"), ModalSize::Default);
        assert_eq!(ModalSize::from(""), ModalSize::Default);
    }

    #[test]
    fn panel_classes_end_with_size() {
        let c = modal_panel_classes(ModalSize::Xl);
        assert!(c.starts_with("relative transform overflow-hidden rounded-lg bg-white"));
        assert!(c.ends_with("sm:max-w-4xl"));
    }

    #[test]
    fn structural_regions_are_fixed() {
        assert_eq!(
            OVERLAY_CLASSES,
            "fixed inset-0 bg-gray-500 bg-opacity-75 transition-opacity"
        );
        assert_eq!(MODAL_CONTAINER_CLASSES, "fixed inset-0 z-10 w-screen overflow-y-auto");
        assert!(MODAL_WRAPPER_CLASSES.contains("min-h-full items-end justify-center"));
    }
}
