//! Form Components
//!
//! Forms are not parameterized like the other families: the contract is a
//! set of fixed class constants that callers compose into their own
//! markup, plus a couple of convenience components built from them.

use dioxus::prelude::*;

use crate::id::element_id;

/// Vertical rhythm for a form container.
pub const FORM_CLASSES: &str = "space-y-6";

/// Text input styling shared by all form fields.
pub const INPUT_CLASSES: &str = "block w-full rounded-md border-0 py-1.5 text-gray-900 \
     shadow-sm ring-1 ring-inset ring-gray-300 placeholder:text-gray-400 focus:ring-2 \
     focus:ring-inset focus:ring-indigo-600 sm:text-sm sm:leading-6";

/// Field label styling.
pub const LABEL_CLASSES: &str = "block text-sm font-medium leading-6 text-gray-900";

/// Full-width submit button styling.
pub const FORM_BUTTON_CLASSES: &str = "flex w-full justify-center rounded-md bg-indigo-600 \
     px-3 py-1.5 text-sm font-semibold leading-6 text-white shadow-sm hover:bg-indigo-500 \
     focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 \
     focus-visible:outline-indigo-600";

/// Inline validation error styling.
pub const ERROR_CLASSES: &str = "mt-2 text-sm text-red-600";

/// Properties for the TextField component
#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    /// Field label
    pub label: String,
    /// `name` attribute
    pub name: String,
    /// Input type (text, email, password, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Pre-filled value
    #[props(default)]
    pub value: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Validation error shown under the input
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association; minted when absent
    #[props(default)]
    pub id: Option<String>,
}

/// Labelled text input with optional inline error.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     form { class: FORM_CLASSES,
///         TextField { label: "Email", name: "email", input_type: "email", required: true }
///         SubmitButton { "Sign in" }
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| element_id("field"));

    rsx! {
        div {
            label { class: LABEL_CLASSES, r#for: "{id}", "{props.label}" }
            div { class: "mt-2",
                input {
                    id: "{id}",
                    class: INPUT_CLASSES,
                    r#type: "{props.input_type}",
                    name: "{props.name}",
                    value: props.value.clone(),
                    placeholder: props.placeholder.clone(),
                    required: props.required,
                    disabled: props.disabled,
                }
            }
            if let Some(error) = &props.error {
                p { class: ERROR_CLASSES, "{error}" }
            }
        }
    }
}

/// Properties for the SubmitButton component
#[derive(Props, Clone, PartialEq)]
pub struct SubmitButtonProps {
    pub children: Element,
}

/// Full-width form submit button.
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    rsx! {
        button { class: FORM_BUTTON_CLASSES, r#type: "submit", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_constants_are_fixed() {
        assert_eq!(FORM_CLASSES, "space-y-6");
        assert_eq!(ERROR_CLASSES, "mt-2 text-sm text-red-600");
        assert!(LABEL_CLASSES.starts_with("block text-sm font-medium"));
    }

    #[test]
    fn input_classes_carry_focus_ring() {
        assert!(INPUT_CLASSES.contains("focus:ring-indigo-600"));
        assert!(INPUT_CLASSES.contains("ring-1 ring-inset ring-gray-300"));
    }

    #[test]
    fn form_button_is_full_width() {
        assert!(FORM_BUTTON_CLASSES.starts_with("flex w-full justify-center"));
        assert!(FORM_BUTTON_CLASSES.contains("bg-indigo-600"));
    }
}
