// Managers module
// OOP-style wrappers and declarative configuration for tab strips

pub mod tab_strip;

pub use tab_strip::TabStripManager;

// Re-export YAML configuration types from tab_strip module
pub use tab_strip::{
    create_group_from_config,
    create_tabs_from_config,
    TabConfigYaml,
    TabStripConfigYaml,
};
