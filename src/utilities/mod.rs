// Utilities module
// Helper functions shared across components

pub mod helpers;
pub mod layout;

pub use helpers::{coerce_to_boolean, BoolAttr};
pub use layout::{compute_margins, Margins};
