//! Badge Components
//!
//! Small status/label pills. Light variants use a tinted background with
//! dark text, solid variants invert that. A badge with an `href` renders
//! as a hyperlink instead of a `span`.

use dioxus::prelude::*;

use super::{join_classes, merge_class};

/// Badge color variants.
///
/// `Danger` and `SolidDanger` are aliases kept for callers that use the
/// danger vocabulary; they style identically to `Error`/`SolidError`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    /// Gray light badge
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Danger,
    Info,
    Outline,
    SolidPrimary,
    SolidSecondary,
    SolidSuccess,
    SolidWarning,
    SolidError,
    SolidDanger,
    SolidInfo,
}

impl BadgeVariant {
    /// Returns the Tailwind classes for this variant.
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "bg-indigo-100 text-indigo-800 hover:bg-indigo-200",
            BadgeVariant::Secondary => "bg-gray-100 text-gray-800 hover:bg-gray-200",
            BadgeVariant::Success => "bg-green-100 text-green-800 hover:bg-green-200",
            BadgeVariant::Warning => "bg-yellow-100 text-yellow-800 hover:bg-yellow-200",
            BadgeVariant::Error | BadgeVariant::Danger => {
                "bg-red-100 text-red-800 hover:bg-red-200"
            }
            BadgeVariant::Info => "bg-blue-100 text-blue-800 hover:bg-blue-200",
            BadgeVariant::Outline => "border border-gray-300 text-gray-700 hover:bg-gray-50",
            BadgeVariant::SolidPrimary => "bg-indigo-600 text-white hover:bg-indigo-700",
            BadgeVariant::SolidSecondary => "bg-gray-600 text-white hover:bg-gray-700",
            BadgeVariant::SolidSuccess => "bg-green-600 text-white hover:bg-green-700",
            BadgeVariant::SolidWarning => "bg-yellow-600 text-white hover:bg-yellow-700",
            BadgeVariant::SolidError | BadgeVariant::SolidDanger => {
                "bg-red-600 text-white hover:bg-red-700"
            }
            BadgeVariant::SolidInfo => "bg-blue-600 text-white hover:bg-blue-700",
            BadgeVariant::Default => "bg-gray-100 text-gray-800 hover:bg-gray-200",
        }
    }

    /// Background classes for the optional leading color dot.
    pub fn dot_classes(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "bg-indigo-500",
            BadgeVariant::Success => "bg-green-500",
            BadgeVariant::Warning => "bg-yellow-500",
            BadgeVariant::Error | BadgeVariant::Danger => "bg-red-500",
            BadgeVariant::Info => "bg-blue-500",
            BadgeVariant::SolidPrimary => "bg-indigo-300",
            BadgeVariant::SolidSuccess => "bg-green-300",
            BadgeVariant::SolidWarning => "bg-yellow-300",
            BadgeVariant::SolidError | BadgeVariant::SolidDanger => "bg-red-300",
            BadgeVariant::SolidInfo => "bg-blue-300",
            // default, secondary, outline and solid secondary share gray
            _ => "bg-gray-500",
        }
    }

    /// Classes for the trailing remove button.
    pub fn remove_button_classes(&self) -> &'static str {
        if self.is_solid() {
            "ml-1.5 -mr-0.5 h-3 w-3 text-white/70 hover:text-white"
        } else {
            "ml-1.5 -mr-0.5 h-3 w-3 text-current/70 hover:text-current"
        }
    }

    fn is_solid(&self) -> bool {
        matches!(
            self,
            BadgeVariant::SolidPrimary
                | BadgeVariant::SolidSecondary
                | BadgeVariant::SolidSuccess
                | BadgeVariant::SolidWarning
                | BadgeVariant::SolidError
                | BadgeVariant::SolidDanger
                | BadgeVariant::SolidInfo
        )
    }
}

impl From<&str> for BadgeVariant {
    /// Permissive parse: unrecognized input degrades to the default
    /// variant, never an error.
    fn from(s: &str) -> Self {
        match s {
            "primary" => BadgeVariant::Primary,
            "secondary" => BadgeVariant::Secondary,
            "success" => BadgeVariant::Success,
            "warning" => BadgeVariant::Warning,
            "error" => BadgeVariant::Error,
            "danger" => BadgeVariant::Danger,
            "info" => BadgeVariant::Info,
            "outline" => BadgeVariant::Outline,
            "solid_primary" => BadgeVariant::SolidPrimary,
            "solid_secondary" => BadgeVariant::SolidSecondary,
            "solid_success" => BadgeVariant::SolidSuccess,
            "solid_warning" => BadgeVariant::SolidWarning,
            "solid_error" => BadgeVariant::SolidError,
            "solid_danger" => BadgeVariant::SolidDanger,
            "solid_info" => BadgeVariant::SolidInfo,
            _ => BadgeVariant::Default,
        }
    }
}

/// Badge padding/text sizes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeSize {
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
}

impl BadgeSize {
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeSize::Sm => "px-2 py-0.5 text-xs",
            BadgeSize::Lg => "px-3 py-1 text-sm",
            BadgeSize::Xl => "px-4 py-1.5 text-base",
            BadgeSize::Default => "px-2.5 py-0.5 text-sm",
        }
    }
}

impl From<&str> for BadgeSize {
    fn from(s: &str) -> Self {
        match s {
            "sm" => BadgeSize::Sm,
            "lg" => BadgeSize::Lg,
            "xl" => BadgeSize::Xl,
            _ => BadgeSize::Default,
        }
    }
}

/// Badge corner rounding.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeRounded {
    None,
    Sm,
    #[default]
    Default,
    Lg,
    Full,
}

impl BadgeRounded {
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeRounded::None => "",
            BadgeRounded::Sm => "rounded-sm",
            BadgeRounded::Lg => "rounded-lg",
            BadgeRounded::Full => "rounded-full",
            BadgeRounded::Default => "rounded",
        }
    }
}

impl From<&str> for BadgeRounded {
    fn from(s: &str) -> Self {
        match s {
            "none" => BadgeRounded::None,
            "sm" => BadgeRounded::Sm,
            "lg" => BadgeRounded::Lg,
            "full" => BadgeRounded::Full,
            _ => BadgeRounded::Default,
        }
    }
}

/// Full computed class string for a badge, in cascade order:
/// base, variant, size, rounding.
pub fn badge_classes(variant: BadgeVariant, size: BadgeSize, rounded: BadgeRounded) -> String {
    join_classes(&[
        "inline-flex items-center font-medium transition-colors",
        variant.classes(),
        size.classes(),
        rounded.classes(),
    ])
}

/// Properties for the Badge component
#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    /// Visual style variant
    #[props(default)]
    pub variant: BadgeVariant,
    /// Padding/text size
    #[props(default)]
    pub size: BadgeSize,
    /// Corner rounding
    #[props(default)]
    pub rounded: BadgeRounded,
    /// Render a trailing remove affordance
    #[props(default = false)]
    pub removable: bool,
    /// Render a leading color dot matching the variant
    #[props(default = false)]
    pub dot: bool,
    /// When set, the badge renders as a hyperlink
    #[props(default)]
    pub href: Option<String>,
    /// Link target, only emitted on the hyperlink branch
    #[props(default)]
    pub target: Option<String>,
    /// Optional additional CSS classes, preserved before the computed ones
    #[props(default)]
    pub class: Option<String>,
    /// Extra attributes forwarded to the root element
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    /// Badge content
    pub children: Element,
}

/// Status/label badge.
///
/// Renders a `span` by default, or an `a` when `href` is set.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Badge { variant: BadgeVariant::Success, "Active" }
///     Badge { variant: BadgeVariant::Primary, href: "#", "Docs" }
///     Badge { variant: BadgeVariant::Warning, removable: true, "CSS" }
/// }
/// ```
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let class = merge_class(
        props.class.as_deref(),
        &badge_classes(props.variant, props.size, props.rounded),
    );

    let dot_class = props.variant.dot_classes();
    let inner = rsx! {
        if props.dot {
            span { class: "mr-1.5 h-1.5 w-1.5 rounded-full {dot_class}" }
        }
        {props.children}
        if props.removable {
            button {
                r#type: "button",
                class: props.variant.remove_button_classes(),
                "data-action": "click->badge#remove",
                "aria-label": "Remove",
                "\u{00D7}"
            }
        }
    };

    if let Some(href) = props.href.clone() {
        rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: props.target.clone(),
                ..props.attributes,
                {inner}
            }
        }
    } else {
        rsx! {
            span { class: "{class}", ..props.attributes, {inner} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_variant_classes() {
        assert_eq!(
            BadgeVariant::Primary.classes(),
            "bg-indigo-100 text-indigo-800 hover:bg-indigo-200"
        );
        assert_eq!(
            BadgeVariant::SolidInfo.classes(),
            "bg-blue-600 text-white hover:bg-blue-700"
        );
        assert_eq!(
            BadgeVariant::Outline.classes(),
            "border border-gray-300 text-gray-700 hover:bg-gray-50"
        );
    }

    #[test]
    fn badge_variant_default_is_gray() {
        assert_eq!(
            BadgeVariant::default().classes(),
            "bg-gray-100 text-gray-800 hover:bg-gray-200"
        );
    }

    #[test]
    fn danger_aliases_error() {
        assert_eq!(BadgeVariant::Danger.classes(), BadgeVariant::Error.classes());
        assert_eq!(
            BadgeVariant::SolidDanger.classes(),
            BadgeVariant::SolidError.classes()
        );
    }

    #[test]
    fn unknown_variant_falls_back_to_default() {
        assert_eq!(BadgeVariant::from("sparkle"), BadgeVariant::Default);
        assert_eq!(BadgeSize::from("gigantic"), BadgeSize::Default);
        assert_eq!(BadgeRounded::from("oval"), BadgeRounded::Default);
    }

    #[test]
    fn badge_classes_assemble_in_order() {
        let c = badge_classes(BadgeVariant::Primary, BadgeSize::Sm, BadgeRounded::Full);
        assert_eq!(
            c,
            "inline-flex items-center font-medium transition-colors \
             bg-indigo-100 text-indigo-800 hover:bg-indigo-200 \
             px-2 py-0.5 text-xs rounded-full"
        );
    }

    #[test]
    fn rounded_none_drops_its_segment() {
        let c = badge_classes(BadgeVariant::Default, BadgeSize::Default, BadgeRounded::None);
        assert!(!c.contains("  "));
        assert!(!c.ends_with(' '));
    }

    #[test]
    fn remove_button_follows_solid_vs_light() {
        assert!(BadgeVariant::SolidPrimary
            .remove_button_classes()
            .contains("text-white/70"));
        assert!(BadgeVariant::Primary
            .remove_button_classes()
            .contains("text-current/70"));
    }

    #[test]
    fn dot_colors_track_variant() {
        assert_eq!(BadgeVariant::Success.dot_classes(), "bg-green-500");
        assert_eq!(BadgeVariant::SolidSuccess.dot_classes(), "bg-green-300");
        assert_eq!(BadgeVariant::Default.dot_classes(), "bg-gray-500");
        assert_eq!(BadgeVariant::Secondary.dot_classes(), "bg-gray-500");
    }
}
