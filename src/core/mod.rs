// Core infrastructure module
// Foundational types that elements and managers depend on

pub mod events;
pub mod palette;
pub mod resolver;

pub use events::TabEvent;
pub use palette::{ColorToken, PaletteColor, PaletteColorError, PALETTE_MARKER};
pub use resolver::{resolve_tab_colors, ActiveOverride, TabColors};
