// Elements module
// Per-widget state objects for the tab components

pub mod tab;
pub mod tab_button;
pub mod tab_group;

pub use tab::Tab;
pub use tab_button::TabButton;
pub use tab_group::TabGroup;
