//! Rendered-markup tests.
//!
//! Class tables are covered by the unit tests next to each component;
//! these tests assert the things only rendered HTML can show: the tag
//! switch on `href`, the attribute surface of each branch, caller-class
//! preservation and minted-id format.

use dioxus::prelude::*;
use tailframe_ui::*;

fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

#[test]
fn default_badge_renders_a_span_with_default_classes() {
    let html = render(rsx! {
        Badge { "Badge" }
    });

    assert!(html.contains("<span"));
    assert!(!html.contains("<a"));
    assert!(html.contains(
        "inline-flex items-center font-medium transition-colors \
         bg-gray-100 text-gray-800 hover:bg-gray-200 px-2.5 py-0.5 text-sm rounded"
    ));
    assert!(html.contains("Badge"));
}

#[test]
fn badge_with_href_renders_a_hyperlink() {
    let html = render(rsx! {
        Badge { variant: BadgeVariant::Primary, href: "#", "Docs" }
    });

    assert!(html.contains("<a"));
    assert!(html.contains(r##"href="#""##));
    assert!(html.contains("bg-indigo-100 text-indigo-800 hover:bg-indigo-200"));
}

#[test]
fn removable_badge_carries_the_remove_affordance() {
    let html = render(rsx! {
        Badge { variant: BadgeVariant::SolidPrimary, removable: true, "JavaScript" }
    });

    assert!(html.contains(r#"data-action="click->badge#remove""#));
    assert!(html.contains("text-white/70"));
}

#[test]
fn destructive_lg_button_renders_a_button_element() {
    let html = render(rsx! {
        Button { variant: ButtonVariant::Destructive, size: ButtonSize::Lg, "Delete" }
    });

    assert!(html.contains("<button"));
    assert!(html.contains(r#"type="button""#));
    assert!(html.contains("bg-red-600 text-white hover:bg-red-500"));
    assert!(html.contains("h-12 rounded-md px-8 text-lg"));
}

#[test]
fn link_button_swaps_the_attribute_surface() {
    let html = render(rsx! {
        Button { href: "#", method: "delete", "Sign out" }
    });

    assert!(html.contains("<a"));
    assert!(html.contains(r##"href="#""##));
    assert!(html.contains(r#"data-method="delete""#));
    // The hyperlink branch must not carry button-only attributes.
    assert!(!html.contains("type="));
    assert!(!html.contains("disabled="));
    assert!(!html.contains("form="));
}

#[test]
fn caller_class_is_preserved_with_computed_classes_appended() {
    let html = render(rsx! {
        Badge { class: "custom-badge", "Hi" }
    });

    assert!(html.contains(r#"class="custom-badge inline-flex items-center"#));
}

#[test]
fn card_is_a_plain_container() {
    let html = render(rsx! {
        Card { variant: CardVariant::Bordered, "Content" }
    });

    assert!(html.contains("<div"));
    assert!(html.contains("bg-white p-6 shadow rounded-md border border-gray-200"));
}

#[test]
fn modal_mints_distinct_well_formed_ids() {
    let first = render(rsx! {
        Modal { "one" }
    });
    let second = render(rsx! {
        Modal { "two" }
    });

    let id_of = |html: &str| {
        let start = html.find(r#"id="modal_"#).expect("minted id") + 4;
        html[start..].split('"').next().expect("closing quote").to_string()
    };

    let a = id_of(&first);
    let b = id_of(&second);
    assert_ne!(a, b);
    for id in [&a, &b] {
        let token = id.strip_prefix("modal_").expect("modal prefix");
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

#[test]
fn modal_respects_a_supplied_id_and_renders_identically() {
    let make = || {
        render(rsx! {
            Modal { modal_id: "modal_feedback", size: ModalSize::Sm, "Body" }
        })
    };

    let first = make();
    assert!(first.contains(r#"id="modal_feedback""#));
    assert!(first.contains("sm:max-w-sm"));
    // Identical options, identical output once the id is pinned.
    assert_eq!(first, make());
}

#[test]
fn modal_backdrop_annotation_is_optional() {
    let closable = render(rsx! {
        Modal { modal_id: "modal_a", "x" }
    });
    assert!(closable.contains(r#"data-action="click->modal#close""#));

    let locked = render(rsx! {
        Modal { modal_id: "modal_b", closable: false, backdrop_closable: false, "x" }
    });
    assert!(!locked.contains("click->modal#close"));
}

#[test]
fn modal_renders_all_four_regions() {
    let html = render(rsx! {
        Modal { modal_id: "modal_r", "Body" }
    });

    assert!(html.contains("fixed inset-0 bg-gray-500 bg-opacity-75 transition-opacity"));
    assert!(html.contains("fixed inset-0 z-10 w-screen overflow-y-auto"));
    assert!(html.contains("flex min-h-full items-end justify-center"));
    assert!(html.contains("relative transform overflow-hidden rounded-lg bg-white"));
}

#[test]
fn bottom_left_tooltip_places_panel_and_arrow() {
    let html = render(rsx! {
        Tooltip {
            text: "Hi",
            position: TooltipPosition::BottomLeft,
            arrow: true,
            tooltip_id: "tooltip_t",
            span { "trigger" }
        }
    });

    // Panel anchored to the trigger's left edge, below it.
    assert!(html.contains("top-full left-0 mt-1"));
    // Bottom-pointing triangle, anchored left rather than centered.
    assert!(html.contains("border-b-current"));
    assert!(html.contains("left-2"));
}

#[test]
fn tooltip_trigger_annotations() {
    let hover = render(rsx! {
        Tooltip { text: "t", tooltip_id: "tooltip_h", delay: 300, span { "x" } }
    });
    assert!(hover.contains(r#"data-action="mouseenter->tooltip#show mouseleave->tooltip#hide""#));
    assert!(hover.contains(r#"data-tooltip-delay-value="300""#));
    assert!(hover.contains(r#"data-tooltip-target="wrapper""#));
    assert!(hover.contains(r#"data-tooltip-target="tooltip""#));
    assert!(hover.contains(r#"role="tooltip""#));

    let click = render(rsx! {
        Tooltip { text: "t", tooltip_id: "tooltip_c", trigger: TooltipTrigger::Click, span { "x" } }
    });
    assert!(click.contains(r#"data-action="click->tooltip#toggle""#));
}

#[test]
fn tooltip_without_arrow_omits_the_triangle() {
    let html = render(rsx! {
        Tooltip { text: "t", tooltip_id: "tooltip_n", arrow: false, span { "x" } }
    });
    assert!(!html.contains("border-t-current"));
}

#[test]
fn topnav_composes_its_sub_components() {
    let html = render(rsx! {
        TopNav { page_title: "Team", page_subtitle: "Who does what" }
    });

    // Current link styling from NavLinks.
    assert!(html.contains("border-indigo-600 text-gray-900"));
    // Profile dropdown annotation.
    assert!(html.contains(r#"data-action="click->dropdown#toggle""#));
    // Page header pass-through.
    assert!(html.contains("Team"));
    assert!(html.contains("Who does what"));
}

#[test]
fn identical_options_render_identically() {
    let make = || {
        render(rsx! {
            Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm, disabled: true, "Save" }
        })
    };
    assert_eq!(make(), make());
}
