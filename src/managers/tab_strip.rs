// Tab Strip Manager
// Provides YAML configuration helpers and an OOP-style tab strip wrapper

use serde::Deserialize;

use crate::core::events::TabEvent;
use crate::elements::tab::Tab;
use crate::elements::tab_button::TabButton;
use crate::elements::tab_group::TabGroup;
use crate::utilities::helpers::BoolAttr;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab strip configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabStripConfigYaml {
    /// Group alignment: "left", "center" or "right" (defaults to "left")
    #[serde(default = "default_align")]
    pub align: String,
    /// Width of the tab region as a CSS length (defaults to "100%")
    #[serde(default = "default_width")]
    pub width: String,
    /// Render the tabs small
    #[serde(default)]
    pub small: bool,
    /// Background color for the active tab (palette slot or CSS color)
    pub active_color: Option<String>,
    /// Label color for the active tab (palette slot or CSS color)
    pub active_color_label: Option<String>,
    /// List of tabs
    #[serde(default)]
    pub tabs: Vec<TabConfigYaml>,
}

fn default_align() -> String {
    "left".to_string()
}

fn default_width() -> String {
    "100%".to_string()
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Tab ID (generated when omitted)
    pub id: Option<String>,
    /// Tab display label
    pub label: String,
    /// Optional initial state: "active", "disabled" or "hidden"
    pub default: Option<String>,
    /// Button alignment (defaults to "center")
    pub align: Option<String>,
    /// Background color (palette slot or CSS color)
    pub color: Option<String>,
    /// Label color (palette slot or CSS color)
    pub color_label: Option<String>,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Convert YAML tab configurations into tabs
///
/// Determines which tab starts active:
/// - If any tab has default: "active", use the first such tab
/// - Otherwise, default the first visible tab to active
pub fn create_tabs_from_config(config: &TabStripConfigYaml) -> Vec<Tab> {
    let explicit_active = config
        .tabs
        .iter()
        .position(|t| t.default.as_deref() == Some("active"));

    let mut tabs: Vec<Tab> = config
        .tabs
        .iter()
        .enumerate()
        .map(|(idx, t)| {
            let mut tab = match &t.id {
                Some(id) => Tab::with_id(id, &t.label),
                None => Tab::new(&t.label),
            };

            match t.default.as_deref() {
                Some("active") => {
                    tab.set_active(idx == explicit_active.unwrap_or(usize::MAX));
                }
                Some("disabled") => {
                    tab.set_disabled(true);
                }
                Some("hidden") => {
                    tab.set_hidden(true);
                }
                Some(other) => {
                    eprintln!(
                        "Warning: unknown tab default '{}' for tab '{}'. Expected 'active', 'disabled' or 'hidden'",
                        other, t.label
                    );
                }
                None => {}
            }

            if let Some(align) = &t.align {
                tab.set_align(align);
            }
            tab.set_color(t.color.as_deref());
            tab.set_color_label(t.color_label.as_deref());
            tab
        })
        .collect();

    // No explicit active tab: default the first visible one
    if explicit_active.is_none() {
        if let Some(tab) = tabs.iter_mut().find(|tab| tab.visible()) {
            tab.set_active(true);
        }
    }

    tabs
}

/// Convert a YAML strip configuration into a group with its tabs registered
pub fn create_group_from_config(config: &TabStripConfigYaml) -> TabGroup {
    let mut group = TabGroup::new();
    group.set_align(&config.align);
    group.set_width(&config.width);
    group.set_small(config.small);
    group.set_active_color(config.active_color.as_deref());
    group.set_active_color_label(config.active_color_label.as_deref());

    for tab in create_tabs_from_config(config) {
        group.register_tab(tab);
    }
    group
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                           Tab Strip Manager - OOP Style Strip Operations                       │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab strip manager wrapper for OOP-style tab operations
///
/// Owns the group and keeps one button per registered tab in step with it.
/// Mutating operations return the notifications produced, for the caller to
/// dispatch however it likes.
pub struct TabStripManager {
    group: TabGroup,
    buttons: Vec<TabButton>,
}

impl TabStripManager {
    /// Wrap an existing group, deriving its buttons
    pub fn new(group: TabGroup) -> Self {
        let mut manager = Self {
            group,
            buttons: Vec::new(),
        };
        manager.rebuild_buttons();
        manager
    }

    /// Create a manager directly from YAML configuration
    pub fn from_config(config: &TabStripConfigYaml) -> Self {
        Self::new(create_group_from_config(config))
    }

    fn rebuild_buttons(&mut self) {
        let active_override = self.group.active_override();
        let small = self.group.is_small();
        self.buttons = self
            .group
            .tabs()
            .iter()
            .map(|tab| {
                let mut button = TabButton::for_tab(tab);
                button.set_small(small);
                button.set_active_override(active_override.clone());
                button
            })
            .collect();
    }

    pub fn group(&self) -> &TabGroup {
        &self.group
    }

    pub fn buttons(&self) -> &[TabButton] {
        &self.buttons
    }

    pub fn button(&self, id: &str) -> Option<&TabButton> {
        self.buttons.iter().find(|button| button.id() == id)
    }

    /// Identifier of the currently active tab, if any
    pub fn active_tab(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|button| button.is_active())
            .map(|button| button.id())
    }

    /// Number of tabs not hidden
    pub fn visible_count(&self) -> usize {
        self.group.visible_count()
    }

    /// Register a new tab, returning its identifier
    pub fn add_tab(&mut self, tab: Tab) -> String {
        let id = self.group.register_tab(tab);
        self.rebuild_buttons();
        id
    }

    /// Remove a tab from the strip
    pub fn remove_tab(&mut self, id: &str) -> Option<Tab> {
        let removed = self.group.remove_tab(id)?;
        self.rebuild_buttons();
        Some(removed)
    }

    /// Route a click on a tab button
    ///
    /// A click on an enabled tab activates it exclusively: every other tab is
    /// deactivated (silently - deactivation carries no notification) and the
    /// clicked one reports `Clicked` followed by `Activated`. Clicks on
    /// disabled or unknown tabs produce nothing.
    pub fn handle_click(&mut self, id: &str) -> Vec<TabEvent> {
        let mut events = Vec::new();

        let Some(clicked) = self.buttons.iter().position(|b| b.id() == id) else {
            return events;
        };
        match self.buttons[clicked].click() {
            Some(event) => events.push(event),
            None => return events, // disabled
        }

        for (idx, button) in self.buttons.iter_mut().enumerate() {
            if idx == clicked {
                if let Some(event) = button.set_active(true) {
                    events.push(event);
                }
            } else {
                button.set_active(false);
            }
        }

        // Panels mirror the buttons; the button already reported the activation
        for tab in self.group.tabs_mut() {
            let target = tab.id() == id;
            let _ = tab.set_active(target);
        }

        events
    }

    /// Hide or show a tab on both the panel and its button
    pub fn set_tab_hidden(&mut self, id: &str, value: impl Into<BoolAttr> + Clone) -> Vec<TabEvent> {
        let mut events = Vec::new();
        if let Some(tab) = self.group.tab_mut(id) {
            if let Some(event) = tab.set_hidden(value.clone()) {
                events.push(event);
            }
        }
        if let Some(button) = self.buttons.iter_mut().find(|b| b.id() == id) {
            button.set_hidden(value);
        }
        if !events.is_empty() {
            log::debug!("{} tabs visible after state change", self.visible_count());
        }
        events
    }

    /// Enable or disable a tab on both the panel and its button
    pub fn set_tab_disabled(
        &mut self,
        id: &str,
        value: impl Into<BoolAttr> + Clone,
    ) -> Vec<TabEvent> {
        let mut events = Vec::new();
        if let Some(tab) = self.group.tab_mut(id) {
            if let Some(event) = tab.set_disabled(value.clone()) {
                events.push(event);
            }
        }
        if let Some(button) = self.buttons.iter_mut().find(|b| b.id() == id) {
            button.set_disabled(value);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> TabStripConfigYaml {
        serde_yaml::from_str(
            r#"
align: center
width: 80%
small: true
active_color: "color-03"
tabs:
  - id: general
    label: General
  - id: advanced
    label: Advanced
    default: active
    color: "color-05"
  - id: legacy
    label: Legacy
    default: disabled
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config: TabStripConfigYaml = serde_yaml::from_str("tabs: []").unwrap();
        assert_eq!(config.align, "left");
        assert_eq!(config.width, "100%");
        assert!(!config.small);
        assert!(config.tabs.is_empty());
    }

    #[test]
    fn test_explicit_active_tab_wins() {
        let tabs = create_tabs_from_config(&sample_config());
        assert!(!tabs[0].is_active());
        assert!(tabs[1].is_active());
        assert!(tabs[2].is_disabled());
    }

    #[test]
    fn test_first_visible_tab_defaults_to_active() {
        let config: TabStripConfigYaml = serde_yaml::from_str(
            r#"
tabs:
  - label: Hidden
    default: hidden
  - label: First
  - label: Second
"#,
        )
        .unwrap();
        let tabs = create_tabs_from_config(&config);
        assert!(!tabs[0].is_active());
        assert!(tabs[1].is_active());
        assert!(!tabs[2].is_active());
    }

    #[test]
    fn test_group_from_config() {
        let group = create_group_from_config(&sample_config());
        assert_eq!(group.align(), "center");
        assert_eq!(group.width(), "80%");
        assert!(group.is_small());
        assert_eq!(group.margin_left(), "auto");
        assert_eq!(group.margin_right(), "auto");
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_click_switches_active_tab_exclusively() {
        let mut manager = TabStripManager::from_config(&sample_config());
        assert_eq!(manager.active_tab(), Some("advanced"));

        let events = manager.handle_click("general");
        assert_eq!(
            events,
            vec![
                TabEvent::Clicked("general".to_string()),
                TabEvent::Activated("general".to_string()),
            ]
        );
        assert_eq!(manager.active_tab(), Some("general"));
        assert!(!manager.button("advanced").unwrap().is_active());
        assert!(manager.group().tab("general").unwrap().is_active());
    }

    #[test]
    fn test_click_on_disabled_tab_is_ignored() {
        let mut manager = TabStripManager::from_config(&sample_config());
        let events = manager.handle_click("legacy");
        assert!(events.is_empty());
        assert_eq!(manager.active_tab(), Some("advanced"));
    }

    #[test]
    fn test_click_on_unknown_tab_is_ignored() {
        let mut manager = TabStripManager::from_config(&sample_config());
        assert!(manager.handle_click("missing").is_empty());
    }

    #[test]
    fn test_hiding_a_tab_updates_visible_count() {
        let mut manager = TabStripManager::from_config(&sample_config());
        assert_eq!(manager.visible_count(), 3);

        let events = manager.set_tab_hidden("general", true);
        assert_eq!(
            events,
            vec![TabEvent::StateChanged("general".to_string())]
        );
        assert_eq!(manager.visible_count(), 2);

        // Hiding an already-hidden tab notifies nothing
        assert!(manager.set_tab_hidden("general", true).is_empty());
    }

    #[test]
    fn test_buttons_inherit_group_settings() {
        let manager = TabStripManager::from_config(&sample_config());
        let button = manager.button("advanced").unwrap();
        assert!(button.is_small());
        // Active tab takes the group's palette override, not its own color
        assert_eq!(button.colors().classes, "tc-color-03");
    }

    #[test]
    fn test_add_and_remove_tabs() {
        let mut manager = TabStripManager::from_config(&sample_config());
        let id = manager.add_tab(Tab::new("Extra"));
        assert_eq!(manager.group().len(), 4);
        assert!(manager.button(&id).is_some());

        manager.remove_tab(&id);
        assert_eq!(manager.group().len(), 3);
        assert!(manager.button(&id).is_none());
    }
}
