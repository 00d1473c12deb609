//! Button Components
//!
//! Action buttons with a shared focus-ring/disabled base. A button with
//! an `href` renders as a hyperlink: the link branch drops `type`,
//! `disabled` and `form` and instead carries `target` plus a
//! `data-method` hint for the behavior layer.

use dioxus::prelude::*;

use super::{join_classes, merge_class};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Indigo filled button
    #[default]
    Primary,
    /// White with an inset ring
    Secondary,
    /// Red filled, for destructive actions
    Destructive,
    /// Bordered, white background
    Outline,
    /// No chrome until hovered
    Ghost,
    /// Styled like an inline link
    Link,
}

impl ButtonVariant {
    /// Returns the Tailwind classes for this variant.
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-indigo-600 text-white hover:bg-indigo-500 focus-visible:ring-indigo-600"
            }
            ButtonVariant::Secondary => {
                "bg-white text-gray-900 ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
            }
            ButtonVariant::Destructive => {
                "bg-red-600 text-white hover:bg-red-500 focus-visible:ring-red-600"
            }
            ButtonVariant::Outline => {
                "border border-gray-300 bg-white text-gray-700 hover:bg-gray-50 focus-visible:ring-indigo-600"
            }
            ButtonVariant::Ghost => "text-gray-700 hover:bg-gray-100 focus-visible:ring-indigo-600",
            ButtonVariant::Link => {
                "text-indigo-600 underline-offset-4 hover:underline focus-visible:ring-indigo-600"
            }
        }
    }
}

impl From<&str> for ButtonVariant {
    /// Permissive parse: unrecognized input degrades to `Primary`.
    fn from(s: &str) -> Self {
        match s {
            "secondary" => ButtonVariant::Secondary,
            "destructive" => ButtonVariant::Destructive,
            "outline" => ButtonVariant::Outline,
            "ghost" => ButtonVariant::Ghost,
            "link" => ButtonVariant::Link,
            _ => ButtonVariant::Primary,
        }
    }
}

/// Button sizes, including the square icon size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-8 rounded-md px-3 text-sm",
            ButtonSize::Lg => "h-12 rounded-md px-8 text-lg",
            ButtonSize::Icon => "h-10 w-10 rounded-md",
            ButtonSize::Default => "h-10 rounded-md px-4 py-2 text-sm",
        }
    }
}

impl From<&str> for ButtonSize {
    fn from(s: &str) -> Self {
        match s {
            "sm" => ButtonSize::Sm,
            "lg" => ButtonSize::Lg,
            "icon" => ButtonSize::Icon,
            _ => ButtonSize::Default,
        }
    }
}

const BUTTON_BASE_CLASSES: &str = "inline-flex items-center justify-center font-medium \
     transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
     focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

/// Full computed class string for a button, in cascade order:
/// base, variant, size, disabled state.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, disabled: bool) -> String {
    join_classes(&[
        BUTTON_BASE_CLASSES,
        variant.classes(),
        size.classes(),
        if disabled { "opacity-50 cursor-not-allowed" } else { "" },
    ])
}

/// Properties for the Button component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Size variant
    #[props(default)]
    pub size: ButtonSize,
    /// Whether the button is disabled (static branch only)
    #[props(default = false)]
    pub disabled: bool,
    /// `type` attribute (static branch only)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Associated form id (static branch only)
    #[props(default)]
    pub form: Option<String>,
    /// When set, the button renders as a hyperlink
    #[props(default)]
    pub href: Option<String>,
    /// Link target (hyperlink branch only)
    #[props(default)]
    pub target: Option<String>,
    /// HTTP method hint, emitted as `data-method` (hyperlink branch only)
    #[props(default)]
    pub method: Option<String>,
    /// Optional additional CSS classes, preserved before the computed ones
    #[props(default)]
    pub class: Option<String>,
    /// Click handler (static branch only; hyperlinks navigate)
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Extra attributes forwarded to the root element
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    /// Button content
    pub children: Element,
}

/// Styled action button.
///
/// Renders a `button` by default, or an `a` when `href` is set. The two
/// branches carry disjoint attribute sets so a hyperlink can never end up
/// with `disabled` or `type` on it.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button { variant: ButtonVariant::Primary, "Save" }
///     Button { variant: ButtonVariant::Destructive, size: ButtonSize::Lg, "Delete" }
///     Button { href: "/sign-out", method: "delete", "Sign out" }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = merge_class(
        props.class.as_deref(),
        &button_classes(props.variant, props.size, props.disabled),
    );

    if let Some(href) = props.href.clone() {
        rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: props.target.clone(),
                "data-method": props.method.clone(),
                ..props.attributes,
                {props.children}
            }
        }
    } else {
        rsx! {
            button {
                class: "{class}",
                r#type: "{props.button_type}",
                disabled: props.disabled,
                form: props.form.clone(),
                onclick: move |_| {
                    if let Some(handler) = &props.onclick {
                        handler.call(());
                    }
                },
                ..props.attributes,
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(
            ButtonVariant::Primary.classes(),
            "bg-indigo-600 text-white hover:bg-indigo-500 focus-visible:ring-indigo-600"
        );
        assert_eq!(
            ButtonVariant::Destructive.classes(),
            "bg-red-600 text-white hover:bg-red-500 focus-visible:ring-red-600"
        );
        assert_eq!(
            ButtonVariant::Link.classes(),
            "text-indigo-600 underline-offset-4 hover:underline focus-visible:ring-indigo-600"
        );
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn unknown_variant_falls_back_to_primary() {
        assert_eq!(ButtonVariant::from("wiggle"), ButtonVariant::Primary);
        assert_eq!(ButtonSize::from("enormous"), ButtonSize::Default);
    }

    #[test]
    fn size_classes() {
        assert_eq!(ButtonSize::Sm.classes(), "h-8 rounded-md px-3 text-sm");
        assert_eq!(ButtonSize::Icon.classes(), "h-10 w-10 rounded-md");
        assert_eq!(ButtonSize::default().classes(), "h-10 rounded-md px-4 py-2 text-sm");
    }

    #[test]
    fn disabled_appends_state_classes_last() {
        let c = button_classes(ButtonVariant::Primary, ButtonSize::Default, true);
        assert!(c.ends_with("opacity-50 cursor-not-allowed"));

        let c = button_classes(ButtonVariant::Primary, ButtonSize::Default, false);
        assert!(c.ends_with(ButtonSize::Default.classes()));
        assert!(!c.contains("cursor-not-allowed"));
    }

    #[test]
    fn button_classes_start_with_base() {
        let c = button_classes(ButtonVariant::Ghost, ButtonSize::Sm, false);
        assert!(c.starts_with("inline-flex items-center justify-center font-medium"));
        assert!(c.contains("disabled:pointer-events-none disabled:opacity-50"));
    }
}
