//! Card Components
//!
//! White surface containers. No tag switch here; a card is always a
//! `div`, assembled as background, padding, shadow, rounding, variant.

use dioxus::prelude::*;

use super::{join_classes, merge_class};

/// Card border/elevation variants.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardVariant {
    /// Plain white surface
    #[default]
    Default,
    /// Gray border
    Bordered,
    /// Subtle ring elevation
    Elevated,
}

impl CardVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            CardVariant::Bordered => "border border-gray-200",
            CardVariant::Elevated => "ring-1 ring-gray-900/5",
            CardVariant::Default => "",
        }
    }
}

impl From<&str> for CardVariant {
    fn from(s: &str) -> Self {
        match s {
            "bordered" => CardVariant::Bordered,
            "elevated" => CardVariant::Elevated,
            _ => CardVariant::Default,
        }
    }
}

/// Card inner padding.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Default,
    Lg,
}

impl CardPadding {
    pub fn classes(&self) -> &'static str {
        match self {
            CardPadding::None => "",
            CardPadding::Sm => "p-4",
            CardPadding::Lg => "p-8",
            CardPadding::Default => "p-6",
        }
    }
}

impl From<&str> for CardPadding {
    fn from(s: &str) -> Self {
        match s {
            "none" => CardPadding::None,
            "sm" => CardPadding::Sm,
            "lg" => CardPadding::Lg,
            _ => CardPadding::Default,
        }
    }
}

/// Card drop shadow.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardShadow {
    None,
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
}

impl CardShadow {
    pub fn classes(&self) -> &'static str {
        match self {
            CardShadow::None => "",
            CardShadow::Sm => "shadow-sm",
            CardShadow::Lg => "shadow-lg",
            CardShadow::Xl => "shadow-xl",
            CardShadow::Default => "shadow",
        }
    }
}

impl From<&str> for CardShadow {
    fn from(s: &str) -> Self {
        match s {
            "none" => CardShadow::None,
            "sm" => CardShadow::Sm,
            "lg" => CardShadow::Lg,
            "xl" => CardShadow::Xl,
            _ => CardShadow::Default,
        }
    }
}

/// Card corner rounding. Cards default to `rounded-md` and offer `xl`
/// where badges offer `full`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardRounded {
    None,
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
}

impl CardRounded {
    pub fn classes(&self) -> &'static str {
        match self {
            CardRounded::None => "",
            CardRounded::Sm => "rounded-sm",
            CardRounded::Lg => "rounded-lg",
            CardRounded::Xl => "rounded-xl",
            CardRounded::Default => "rounded-md",
        }
    }
}

impl From<&str> for CardRounded {
    fn from(s: &str) -> Self {
        match s {
            "none" => CardRounded::None,
            "sm" => CardRounded::Sm,
            "lg" => CardRounded::Lg,
            "xl" => CardRounded::Xl,
            _ => CardRounded::Default,
        }
    }
}

/// Full computed class string for a card: `bg-white`, then padding,
/// shadow, rounding and finally the variant.
pub fn card_classes(
    variant: CardVariant,
    padding: CardPadding,
    shadow: CardShadow,
    rounded: CardRounded,
) -> String {
    join_classes(&[
        "bg-white",
        padding.classes(),
        shadow.classes(),
        rounded.classes(),
        variant.classes(),
    ])
}

/// Properties for the Card component
#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(default)]
    pub variant: CardVariant,
    #[props(default)]
    pub padding: CardPadding,
    #[props(default)]
    pub shadow: CardShadow,
    #[props(default)]
    pub rounded: CardRounded,
    /// Optional additional CSS classes, preserved before the computed ones
    #[props(default)]
    pub class: Option<String>,
    /// Card content
    pub children: Element,
}

/// White surface container.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card { variant: CardVariant::Bordered, shadow: CardShadow::Lg,
///         h3 { "Report" }
///         p { "Quarterly numbers." }
///     }
/// }
/// ```
#[component]
pub fn Card(props: CardProps) -> Element {
    let class = merge_class(
        props.class.as_deref(),
        &card_classes(props.variant, props.padding, props.shadow, props.rounded),
    );

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_defaults() {
        let c = card_classes(
            CardVariant::default(),
            CardPadding::default(),
            CardShadow::default(),
            CardRounded::default(),
        );
        assert_eq!(c, "bg-white p-6 shadow rounded-md");
    }

    #[test]
    fn variant_comes_last() {
        let c = card_classes(
            CardVariant::Bordered,
            CardPadding::Sm,
            CardShadow::None,
            CardRounded::Lg,
        );
        assert_eq!(c, "bg-white p-4 rounded-lg border border-gray-200");
    }

    #[test]
    fn unknown_values_fall_back() {
        assert_eq!(CardVariant::from("frosted"), CardVariant::Default);
        assert_eq!(CardShadow::from("dramatic"), CardShadow::Default);
        assert_eq!(CardRounded::from("full"), CardRounded::Default);
    }

    #[test]
    fn all_none_leaves_only_background() {
        let c = card_classes(
            CardVariant::Default,
            CardPadding::None,
            CardShadow::None,
            CardRounded::None,
        );
        assert_eq!(c, "bg-white");
    }
}
