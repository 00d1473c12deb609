//! Tooltip Components
//!
//! The richest family: position picks both the panel placement and the
//! arrow geometry, trigger picks which interaction events get annotated,
//! and the arrow's border-trick triangle uses `border-*-current` so its
//! color follows the variant's text color.

use dioxus::prelude::*;

use super::{join_classes, merge_class};
use crate::id::element_id;

/// Tooltip color variants. `Danger` aliases `Error`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TooltipVariant {
    #[default]
    Dark,
    Light,
    Primary,
    Success,
    Warning,
    Error,
    Danger,
    Info,
}

impl TooltipVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            TooltipVariant::Light => {
                "bg-white text-gray-900 border border-gray-200 shadow-lg rounded"
            }
            TooltipVariant::Primary => "bg-indigo-600 text-white rounded",
            TooltipVariant::Success => "bg-green-600 text-white rounded",
            TooltipVariant::Warning => "bg-yellow-600 text-white rounded",
            TooltipVariant::Error | TooltipVariant::Danger => "bg-red-600 text-white rounded",
            TooltipVariant::Info => "bg-blue-600 text-white rounded",
            TooltipVariant::Dark => "bg-gray-900 text-white rounded",
        }
    }
}

impl From<&str> for TooltipVariant {
    fn from(s: &str) -> Self {
        match s {
            "light" => TooltipVariant::Light,
            "primary" => TooltipVariant::Primary,
            "success" => TooltipVariant::Success,
            "warning" => TooltipVariant::Warning,
            "error" => TooltipVariant::Error,
            "danger" => TooltipVariant::Danger,
            "info" => TooltipVariant::Info,
            _ => TooltipVariant::Dark,
        }
    }
}

/// Tooltip text size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TooltipSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl TooltipSize {
    pub fn classes(&self) -> &'static str {
        match self {
            TooltipSize::Sm => "px-1.5 py-0.5 text-xs",
            TooltipSize::Lg => "px-3 py-1.5 text-base",
            TooltipSize::Default => "px-2 py-1 text-sm",
        }
    }
}

impl From<&str> for TooltipSize {
    fn from(s: &str) -> Self {
        match s {
            "sm" => TooltipSize::Sm,
            "lg" => TooltipSize::Lg,
            _ => TooltipSize::Default,
        }
    }
}

/// Panel placement relative to the trigger. Corner positions anchor the
/// panel to the trigger's edge instead of centering on it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TooltipPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl TooltipPosition {
    pub fn classes(&self) -> &'static str {
        match self {
            TooltipPosition::Bottom => "top-full left-1/2 transform -translate-x-1/2 mt-1",
            TooltipPosition::Left => "right-full top-1/2 transform -translate-y-1/2 mr-1",
            TooltipPosition::Right => "left-full top-1/2 transform -translate-y-1/2 ml-1",
            TooltipPosition::TopLeft => "bottom-full left-0 mb-1",
            TooltipPosition::TopRight => "bottom-full right-0 mb-1",
            TooltipPosition::BottomLeft => "top-full left-0 mt-1",
            TooltipPosition::BottomRight => "top-full right-0 mt-1",
            TooltipPosition::Top => "bottom-full left-1/2 transform -translate-x-1/2 mb-1",
        }
    }
}

impl From<&str> for TooltipPosition {
    /// Accepts both the `_left`/`_right` and `_start`/`_end` vocabularies.
    fn from(s: &str) -> Self {
        match s {
            "bottom" => TooltipPosition::Bottom,
            "left" => TooltipPosition::Left,
            "right" => TooltipPosition::Right,
            "top_left" | "top_start" => TooltipPosition::TopLeft,
            "top_right" | "top_end" => TooltipPosition::TopRight,
            "bottom_left" | "bottom_start" => TooltipPosition::BottomLeft,
            "bottom_right" | "bottom_end" => TooltipPosition::BottomRight,
            _ => TooltipPosition::Top,
        }
    }
}

/// Interaction category the behavior layer listens for.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TooltipTrigger {
    #[default]
    Hover,
    Click,
    Focus,
}

impl TooltipTrigger {
    /// The `data-action` annotation for this trigger.
    pub fn action(&self) -> &'static str {
        match self {
            TooltipTrigger::Click => "click->tooltip#toggle",
            TooltipTrigger::Focus => "focus->tooltip#show blur->tooltip#hide",
            TooltipTrigger::Hover => "mouseenter->tooltip#show mouseleave->tooltip#hide",
        }
    }
}

impl From<&str> for TooltipTrigger {
    fn from(s: &str) -> Self {
        match s {
            "click" => TooltipTrigger::Click,
            "focus" => TooltipTrigger::Focus,
            _ => TooltipTrigger::Hover,
        }
    }
}

/// Full computed class string for the tooltip panel:
/// base, hidden state, variant, size, position.
pub fn tooltip_classes(
    variant: TooltipVariant,
    size: TooltipSize,
    position: TooltipPosition,
) -> String {
    join_classes(&[
        "absolute z-50 px-2 py-1 text-sm transition-opacity duration-200",
        "opacity-0 pointer-events-none",
        variant.classes(),
        size.classes(),
        position.classes(),
    ])
}

/// Arrow triangle classes for the given position. The triangle is pure
/// CSS (four borders, three transparent); `border-*-current` makes its
/// color track the panel's text color, mirroring the variant. Corner
/// positions anchor the arrow near the panel's anchored edge.
pub fn arrow_classes(position: TooltipPosition) -> &'static str {
    match position {
        TooltipPosition::Bottom => {
            "absolute w-0 h-0 bottom-full left-1/2 transform -translate-x-1/2 \
             border-l-4 border-r-4 border-b-4 border-transparent border-b-current"
        }
        TooltipPosition::BottomLeft => {
            "absolute w-0 h-0 bottom-full left-2 \
             border-l-4 border-r-4 border-b-4 border-transparent border-b-current"
        }
        TooltipPosition::BottomRight => {
            "absolute w-0 h-0 bottom-full right-2 \
             border-l-4 border-r-4 border-b-4 border-transparent border-b-current"
        }
        TooltipPosition::Left => {
            "absolute w-0 h-0 right-full top-1/2 transform -translate-y-1/2 \
             border-t-4 border-b-4 border-l-4 border-transparent border-l-current"
        }
        TooltipPosition::Right => {
            "absolute w-0 h-0 left-full top-1/2 transform -translate-y-1/2 \
             border-t-4 border-b-4 border-r-4 border-transparent border-r-current"
        }
        TooltipPosition::TopLeft => {
            "absolute w-0 h-0 top-full left-2 \
             border-l-4 border-r-4 border-t-4 border-transparent border-t-current"
        }
        TooltipPosition::TopRight => {
            "absolute w-0 h-0 top-full right-2 \
             border-l-4 border-r-4 border-t-4 border-transparent border-t-current"
        }
        TooltipPosition::Top => {
            "absolute w-0 h-0 top-full left-1/2 transform -translate-x-1/2 \
             border-l-4 border-r-4 border-t-4 border-transparent border-t-current"
        }
    }
}

/// Properties for the Tooltip component
#[derive(Props, Clone, PartialEq)]
pub struct TooltipProps {
    /// Tooltip text
    pub text: String,
    #[props(default)]
    pub position: TooltipPosition,
    #[props(default)]
    pub trigger: TooltipTrigger,
    #[props(default)]
    pub variant: TooltipVariant,
    #[props(default)]
    pub size: TooltipSize,
    /// Show/hide delay in milliseconds, forwarded to the behavior layer
    #[props(default = 0)]
    pub delay: u32,
    /// Render the arrow triangle
    #[props(default = true)]
    pub arrow: bool,
    /// Panel id; minted as `tooltip_<8 hex>` when absent
    #[props(default)]
    pub tooltip_id: Option<String>,
    /// Optional additional CSS classes on the wrapper
    #[props(default)]
    pub class: Option<String>,
    /// Extra attributes forwarded to the wrapper
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    /// The trigger content the tooltip wraps
    pub children: Element,
}

/// Tooltip wrapper + hidden panel.
///
/// The wrapper annotates the trigger events and delay; the panel starts
/// with `opacity-0 pointer-events-none` and is toggled entirely by the
/// external behavior layer.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Tooltip { text: "Copied!", trigger: TooltipTrigger::Click,
///         Button { variant: ButtonVariant::Ghost, "Copy" }
///     }
/// }
/// ```
#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let tooltip_id = props
        .tooltip_id
        .clone()
        .unwrap_or_else(|| element_id("tooltip"));
    let wrapper_class = merge_class(props.class.as_deref(), "relative inline-block");
    let panel_class = tooltip_classes(props.variant, props.size, props.position);

    rsx! {
        span {
            class: "{wrapper_class}",
            "data-action": props.trigger.action(),
            "data-tooltip-delay-value": "{props.delay}",
            "data-tooltip-target": "wrapper",
            "aria-describedby": "{tooltip_id}",
            ..props.attributes,
            {props.children}
            div {
                id: "{tooltip_id}",
                role: "tooltip",
                class: "{panel_class}",
                "data-tooltip-target": "tooltip",
                "{props.text}"
                if props.arrow {
                    span { class: arrow_classes(props.position) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classes() {
        assert_eq!(TooltipVariant::Dark.classes(), "bg-gray-900 text-white rounded");
        assert_eq!(
            TooltipVariant::Light.classes(),
            "bg-white text-gray-900 border border-gray-200 shadow-lg rounded"
        );
        assert_eq!(TooltipVariant::Danger.classes(), TooltipVariant::Error.classes());
    }

    #[test]
    fn position_classes() {
        assert_eq!(
            TooltipPosition::Top.classes(),
            "bottom-full left-1/2 transform -translate-x-1/2 mb-1"
        );
        assert_eq!(TooltipPosition::BottomLeft.classes(), "top-full left-0 mt-1");
        assert_eq!(TooltipPosition::TopRight.classes(), "bottom-full right-0 mb-1");
    }

    #[test]
    fn start_end_vocabulary_parses_to_corners() {
        assert_eq!(TooltipPosition::from("top_start"), TooltipPosition::TopLeft);
        assert_eq!(TooltipPosition::from("bottom_end"), TooltipPosition::BottomRight);
        assert_eq!(TooltipPosition::from("sideways"), TooltipPosition::Top);
    }

    #[test]
    fn trigger_actions() {
        assert_eq!(
            TooltipTrigger::Hover.action(),
            "mouseenter->tooltip#show mouseleave->tooltip#hide"
        );
        assert_eq!(TooltipTrigger::Click.action(), "click->tooltip#toggle");
        assert_eq!(TooltipTrigger::Focus.action(), "focus->tooltip#show blur->tooltip#hide");
        assert_eq!(TooltipTrigger::from("tap"), TooltipTrigger::Hover);
    }

    #[test]
    fn panel_classes_assemble_in_order() {
        let c = tooltip_classes(
            TooltipVariant::Primary,
            TooltipSize::Sm,
            TooltipPosition::Right,
        );
        assert!(c.starts_with("absolute z-50 px-2 py-1 text-sm transition-opacity duration-200"));
        assert!(c.contains("opacity-0 pointer-events-none bg-indigo-600 text-white rounded"));
        assert!(c.ends_with("left-full top-1/2 transform -translate-y-1/2 ml-1"));
    }

    #[test]
    fn arrow_geometry_follows_position() {
        assert!(arrow_classes(TooltipPosition::Top).contains("border-t-current"));
        assert!(arrow_classes(TooltipPosition::Bottom).contains("border-b-current"));
        assert!(arrow_classes(TooltipPosition::Left).contains("border-l-current"));
        assert!(arrow_classes(TooltipPosition::Right).contains("border-r-current"));
    }

    #[test]
    fn corner_arrows_anchor_to_the_edge() {
        let c = arrow_classes(TooltipPosition::BottomLeft);
        assert!(c.contains("left-2"));
        assert!(c.contains("border-b-current"));
        assert!(!c.contains("left-1/2"));

        let c = arrow_classes(TooltipPosition::TopRight);
        assert!(c.contains("right-2"));
        assert!(c.contains("border-t-current"));
    }
}
