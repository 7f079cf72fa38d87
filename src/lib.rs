// Tab Components Library
// Presentational tab widgets (buttons, panels, groups) for web user interfaces

// Core infrastructure - palette, color resolution, events
pub mod core;
// Elements (per-widget state objects)
pub mod elements;
// OOP-style manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
pub use crate::core::*;
pub use crate::elements::*;
pub use crate::managers::*;
pub use crate::utilities::*;
