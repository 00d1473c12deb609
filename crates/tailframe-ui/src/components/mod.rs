//! Reusable presentational components.
//!
//! Each family lives in its own module and shares one shape: props in,
//! a deterministic Tailwind class string plus a root tag out. Components
//! never call each other; the topnav composite only passes options
//! through to its siblings.

mod badge;
mod button;
mod card;
mod form;
mod layout;
mod modal;
mod tooltip;
mod topnav;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use layout::*;
pub use modal::*;
pub use tooltip::*;
pub use topnav::*;

/// Join class segments with single spaces, dropping empty segments.
pub(crate) fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merge a caller-supplied class with the computed classes.
///
/// The caller's class comes first and the computed classes are appended,
/// never replacing it.
pub(crate) fn merge_class(custom: Option<&str>, computed: &str) -> String {
    match custom {
        Some(c) if !c.is_empty() => format!("{} {}", c, computed),
        _ => computed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_drops_empty_segments() {
        assert_eq!(join_classes(&["a", "", "b"]), "a b");
        assert_eq!(join_classes(&["", ""]), "");
    }

    #[test]
    fn merge_appends_computed_after_custom() {
        assert_eq!(merge_class(Some("custom"), "computed"), "custom computed");
        assert_eq!(merge_class(None, "computed"), "computed");
        assert_eq!(merge_class(Some(""), "computed"), "computed");
    }
}
