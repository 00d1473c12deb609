//! Layout Components
//!
//! Page-level container sections plus grid/flex class helpers. The
//! container axis also accepts a plain `bool` (the historical API) via
//! `From<bool>`.

use dioxus::prelude::*;

use super::{join_classes, merge_class};

/// Horizontal container behavior.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Container {
    /// Centered responsive container
    #[default]
    Default,
    /// Full width
    Fluid,
    /// Centered, capped at max-w-4xl
    Narrow,
    /// Centered, capped at max-w-7xl
    Wide,
    /// No container classes at all
    None,
}

impl Container {
    pub fn classes(&self) -> &'static str {
        match self {
            Container::Default => "container mx-auto",
            Container::Fluid => "w-full",
            Container::Narrow => "container mx-auto max-w-4xl",
            Container::Wide => "container mx-auto max-w-7xl",
            Container::None => "",
        }
    }
}

impl From<bool> for Container {
    fn from(on: bool) -> Self {
        if on {
            Container::Default
        } else {
            Container::None
        }
    }
}

impl From<&str> for Container {
    fn from(s: &str) -> Self {
        match s {
            "default" | "true" => Container::Default,
            "fluid" => Container::Fluid,
            "narrow" => Container::Narrow,
            "wide" => Container::Wide,
            // Unrecognized values degrade to no container classes,
            // like `false` on the bool axis.
            _ => Container::None,
        }
    }
}

/// Section padding, including axis-only responsive steps.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LayoutPadding {
    None,
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
    /// Horizontal only, responsive
    X,
    /// Vertical only, responsive
    Y,
}

impl LayoutPadding {
    pub fn classes(&self) -> &'static str {
        match self {
            LayoutPadding::None => "",
            LayoutPadding::Sm => "p-4",
            LayoutPadding::Lg => "p-8",
            LayoutPadding::Xl => "p-12",
            LayoutPadding::X => "px-4 sm:px-6 lg:px-8",
            LayoutPadding::Y => "py-4 sm:py-6 lg:py-8",
            LayoutPadding::Default => "p-6",
        }
    }
}

impl From<&str> for LayoutPadding {
    fn from(s: &str) -> Self {
        match s {
            "none" => LayoutPadding::None,
            "sm" => LayoutPadding::Sm,
            "lg" => LayoutPadding::Lg,
            "xl" => LayoutPadding::Xl,
            "x" => LayoutPadding::X,
            "y" => LayoutPadding::Y,
            _ => LayoutPadding::Default,
        }
    }
}

/// Section margin. Defaults to no margin, unlike padding.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LayoutMargin {
    #[default]
    None,
    Sm,
    Lg,
    Xl,
    X,
    Y,
    /// Horizontal centering
    Auto,
}

impl LayoutMargin {
    pub fn classes(&self) -> &'static str {
        match self {
            LayoutMargin::Sm => "m-4",
            LayoutMargin::Lg => "m-8",
            LayoutMargin::Xl => "m-12",
            LayoutMargin::X => "mx-4 sm:mx-6 lg:mx-8",
            LayoutMargin::Y => "my-4 sm:my-6 lg:my-8",
            LayoutMargin::Auto => "mx-auto",
            LayoutMargin::None => "",
        }
    }
}

impl From<&str> for LayoutMargin {
    fn from(s: &str) -> Self {
        match s {
            "sm" => LayoutMargin::Sm,
            "lg" => LayoutMargin::Lg,
            "xl" => LayoutMargin::Xl,
            "x" => LayoutMargin::X,
            "y" => LayoutMargin::Y,
            "auto" => LayoutMargin::Auto,
            _ => LayoutMargin::None,
        }
    }
}

/// Section background tint.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Background {
    /// No background classes (same as `None`)
    #[default]
    Default,
    None,
    Gray,
    White,
    Dark,
    Primary,
}

impl Background {
    pub fn classes(&self) -> &'static str {
        match self {
            Background::Gray => "bg-gray-50",
            Background::White => "bg-white",
            Background::Dark => "bg-gray-900",
            Background::Primary => "bg-indigo-50",
            Background::Default | Background::None => "",
        }
    }
}

impl From<&str> for Background {
    fn from(s: &str) -> Self {
        match s {
            "none" => Background::None,
            "gray" => Background::Gray,
            "white" => Background::White,
            "dark" => Background::Dark,
            "primary" => Background::Primary,
            _ => Background::Default,
        }
    }
}

/// Full computed class string for a layout section:
/// container, padding, margin, background.
pub fn section_classes(
    container: Container,
    padding: LayoutPadding,
    margin: LayoutMargin,
    background: Background,
) -> String {
    join_classes(&[
        container.classes(),
        padding.classes(),
        margin.classes(),
        background.classes(),
    ])
}

/// Grid gap steps.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GridGap {
    None,
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
}

impl GridGap {
    pub fn classes(&self) -> &'static str {
        match self {
            GridGap::None => "gap-0",
            GridGap::Sm => "gap-4",
            GridGap::Lg => "gap-8",
            GridGap::Xl => "gap-12",
            GridGap::Default => "gap-6",
        }
    }
}

impl From<&str> for GridGap {
    fn from(s: &str) -> Self {
        match s {
            "none" => GridGap::None,
            "sm" => GridGap::Sm,
            "lg" => GridGap::Lg,
            "xl" => GridGap::Xl,
            _ => GridGap::Default,
        }
    }
}

/// Responsive grid classes: single column on mobile, capped at two
/// columns at the `sm:` breakpoint, the full count at `lg:`. A column
/// count of 0 is clamped to 1 rather than rejected.
pub fn grid_classes(cols: u32, gap: GridGap) -> String {
    let cols = cols.max(1);
    format!(
        "grid grid-cols-1 {} sm:grid-cols-{} lg:grid-cols-{}",
        gap.classes(),
        cols.min(2),
        cols
    )
}

/// Flex row direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Col,
    ColReverse,
}

impl FlexDirection {
    fn token(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::Col => "col",
            FlexDirection::ColReverse => "col-reverse",
        }
    }
}

/// Main-axis distribution.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FlexJustify {
    #[default]
    Start,
    End,
    Center,
    Between,
    Around,
    Evenly,
}

impl FlexJustify {
    fn token(&self) -> &'static str {
        match self {
            FlexJustify::Start => "start",
            FlexJustify::End => "end",
            FlexJustify::Center => "center",
            FlexJustify::Between => "between",
            FlexJustify::Around => "around",
            FlexJustify::Evenly => "evenly",
        }
    }
}

/// Cross-axis alignment.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FlexAlign {
    #[default]
    Start,
    End,
    Center,
    Baseline,
    Stretch,
}

impl FlexAlign {
    fn token(&self) -> &'static str {
        match self {
            FlexAlign::Start => "start",
            FlexAlign::End => "end",
            FlexAlign::Center => "center",
            FlexAlign::Baseline => "baseline",
            FlexAlign::Stretch => "stretch",
        }
    }
}

/// Flex row classes: direction, justification, alignment, wrapping.
pub fn flex_classes(
    direction: FlexDirection,
    justify: FlexJustify,
    align: FlexAlign,
    wrap: bool,
) -> String {
    format!(
        "flex flex-{} justify-{} items-{} {}",
        direction.token(),
        justify.token(),
        align.token(),
        if wrap { "flex-wrap" } else { "flex-nowrap" }
    )
}

/// Properties for the Section component
#[derive(Props, Clone, PartialEq)]
pub struct SectionProps {
    #[props(default)]
    pub container: Container,
    #[props(default)]
    pub padding: LayoutPadding,
    #[props(default)]
    pub margin: LayoutMargin,
    #[props(default)]
    pub background: Background,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Page section with container/padding/margin/background axes.
#[component]
pub fn Section(props: SectionProps) -> Element {
    let class = merge_class(
        props.class.as_deref(),
        &section_classes(props.container, props.padding, props.margin, props.background),
    );

    rsx! {
        section { class: "{class}", {props.children} }
    }
}

/// Properties for the Grid component
#[derive(Props, Clone, PartialEq)]
pub struct GridProps {
    /// Column count at the `lg:` breakpoint
    #[props(default = 1)]
    pub cols: u32,
    #[props(default)]
    pub gap: GridGap,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Responsive grid container.
#[component]
pub fn Grid(props: GridProps) -> Element {
    let class = merge_class(props.class.as_deref(), &grid_classes(props.cols, props.gap));

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

/// Properties for the Flex component
#[derive(Props, Clone, PartialEq)]
pub struct FlexProps {
    #[props(default)]
    pub direction: FlexDirection,
    #[props(default)]
    pub justify: FlexJustify,
    #[props(default)]
    pub align: FlexAlign,
    #[props(default = false)]
    pub wrap: bool,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Flex row container.
#[component]
pub fn Flex(props: FlexProps) -> Element {
    let class = merge_class(
        props.class.as_deref(),
        &flex_classes(props.direction, props.justify, props.align, props.wrap),
    );

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_defaults() {
        let c = section_classes(
            Container::default(),
            LayoutPadding::default(),
            LayoutMargin::default(),
            Background::default(),
        );
        assert_eq!(c, "container mx-auto p-6");
    }

    #[test]
    fn container_from_bool() {
        assert_eq!(Container::from(true), Container::Default);
        assert_eq!(Container::from(false), Container::None);
    }

    #[test]
    fn axis_padding_and_margin() {
        assert_eq!(LayoutPadding::X.classes(), "px-4 sm:px-6 lg:px-8");
        assert_eq!(LayoutMargin::Y.classes(), "my-4 sm:my-6 lg:my-8");
        assert_eq!(LayoutMargin::Auto.classes(), "mx-auto");
    }

    #[test]
    fn grid_caps_intermediate_breakpoint_at_two() {
        assert_eq!(
            grid_classes(4, GridGap::Default),
            "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4"
        );
        assert_eq!(
            grid_classes(1, GridGap::Sm),
            "grid grid-cols-1 gap-4 sm:grid-cols-1 lg:grid-cols-1"
        );
    }

    #[test]
    fn grid_clamps_zero_cols_to_one() {
        assert_eq!(
            grid_classes(0, GridGap::None),
            "grid grid-cols-1 gap-0 sm:grid-cols-1 lg:grid-cols-1"
        );
    }

    #[test]
    fn flex_classes_cover_all_axes() {
        assert_eq!(
            flex_classes(
                FlexDirection::Col,
                FlexJustify::Between,
                FlexAlign::Center,
                true
            ),
            "flex flex-col justify-between items-center flex-wrap"
        );
        assert_eq!(
            flex_classes(
                FlexDirection::default(),
                FlexJustify::default(),
                FlexAlign::default(),
                false
            ),
            "flex flex-row justify-start items-start flex-nowrap"
        );
    }

    #[test]
    fn unknown_values_fall_back() {
        // The container axis degrades unknowns to no classes at all;
        // the other axes land on their defaults.
        assert_eq!(Container::from("huge"), Container::None);
        assert_eq!(Container::from("huge").classes(), "");
        assert_eq!(Container::from("default"), Container::Default);
        assert_eq!(LayoutMargin::from("everywhere"), LayoutMargin::None);
        assert_eq!(Background::from("plaid"), Background::Default);
    }
}
