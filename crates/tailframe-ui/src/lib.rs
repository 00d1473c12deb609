//! Tailframe UI Components
//!
//! This crate provides presentational Dioxus components styled with
//! Tailwind utility classes. Every component is a pure mapping from a
//! small set of declarative props (variant, size, rounded, ...) to a
//! deterministic class string and an HTML tag choice.
//!
//! ## Contract
//!
//! - Option enums are closed; unrecognized string input falls back to the
//!   documented default variant instead of erroring.
//! - Class assembly is order-stable: base classes, then variant, then
//!   size, then shape, then state.
//! - A caller-supplied `class` prop is always preserved, with the
//!   computed classes appended after it.
//! - Presence of `href` switches the root tag to a hyperlink (`a`) and
//!   swaps the attribute surface accordingly.
//! - Interactive behavior (show/hide/toggle) is only annotated through
//!   `data-action` / `data-*-target` attributes for an external behavior
//!   layer; no component holds state across renders.

pub mod components;
pub mod id;

pub use components::*;
pub use id::{element_id, element_id_with};
