// Tab Group Component
// Group-level settings (sizing, alignment, active colors) and the owned tabs

use crate::core::events::TabEvent;
use crate::core::palette::ColorToken;
use crate::core::resolver::ActiveOverride;
use crate::elements::tab::Tab;
use crate::utilities::helpers::{coerce_to_boolean, BoolAttr};
use crate::utilities::layout::{compute_margins, Margins};

/// Default width of the tab region
pub const DEFAULT_GROUP_WIDTH: &str = "100%";

/// Default alignment of the whole group
pub const DEFAULT_GROUP_ALIGN: &str = "left";

/// A horizontal group of tabs
///
/// Owns its tabs outright; tabs enter on registration and leave on removal.
/// Margins are recomputed on every alignment change and exposed as CSS-facing
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    small: bool,
    width: String,
    align: String,
    margins: Margins,
    active_color: ColorToken,
    active_color_label: ColorToken,
    tabs: Vec<Tab>,
}

impl Default for TabGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl TabGroup {
    pub fn new() -> Self {
        Self {
            small: false,
            width: DEFAULT_GROUP_WIDTH.to_string(),
            align: DEFAULT_GROUP_ALIGN.to_string(),
            margins: compute_margins(DEFAULT_GROUP_ALIGN),
            active_color: ColorToken::Unset,
            active_color_label: ColorToken::Unset,
            tabs: Vec::new(),
        }
    }

    pub fn is_small(&self) -> bool {
        self.small
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn align(&self) -> &str {
        &self.align
    }

    pub fn margin_left(&self) -> &str {
        self.margins.margin_left
    }

    pub fn margin_right(&self) -> &str {
        self.margins.margin_right
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_small(&mut self, value: impl Into<BoolAttr>) {
        self.small = coerce_to_boolean(value);
    }

    /// Width of the tab region as a CSS length; not validated
    pub fn set_width(&mut self, value: impl Into<String>) {
        self.width = value.into();
    }

    /// Set the group alignment and recompute the auto-margins
    pub fn set_align(&mut self, value: impl Into<String>) {
        self.align = value.into();
        self.margins = compute_margins(&self.align);
    }

    pub fn set_active_color(&mut self, value: Option<&str>) {
        self.active_color = ColorToken::parse(value);
    }

    pub fn set_active_color_label(&mut self, value: Option<&str>) {
        self.active_color_label = ColorToken::parse(value);
    }

    /// The override handed to buttons for their active state
    ///
    /// A palette-backed active color yields only a background class; literal
    /// colors travel as inline background/label values. No colors set means
    /// no override.
    pub fn active_override(&self) -> Option<ActiveOverride> {
        if let ColorToken::Palette(slot) = &self.active_color {
            return Some(ActiveOverride::Classes(slot.background_class()));
        }

        let background = match &self.active_color {
            ColorToken::Literal(value) => Some(value.clone()),
            _ => None,
        };
        let label = match &self.active_color_label {
            ColorToken::Literal(value) => Some(value.clone()),
            _ => None,
        };

        if background.is_none() && label.is_none() {
            None
        } else {
            Some(ActiveOverride::Inline { background, label })
        }
    }

    /// Register a tab with the group, returning its identifier
    pub fn register_tab(&mut self, tab: Tab) -> String {
        let id = tab.id().to_string();
        log::debug!("tab `{id}` registered with group");
        self.tabs.push(tab);
        id
    }

    /// Remove a tab from the group
    pub fn remove_tab(&mut self, id: &str) -> Option<Tab> {
        let index = self.tabs.iter().position(|tab| tab.id() == id)?;
        log::debug!("tab `{id}` removed from group");
        Some(self.tabs.remove(index))
    }

    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id() == id)
    }

    pub fn tab_mut(&mut self, id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.id() == id)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> impl Iterator<Item = &mut Tab> {
        self.tabs.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Number of tabs not hidden (disabled tabs still count as visible)
    pub fn visible_count(&self) -> usize {
        self.tabs.iter().filter(|tab| tab.visible()).count()
    }

    /// Hide or show a tab, forwarding its notification
    pub fn set_tab_hidden(&mut self, id: &str, value: impl Into<BoolAttr>) -> Option<TabEvent> {
        self.tab_mut(id)?.set_hidden(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let group = TabGroup::new();
        assert!(!group.is_small());
        assert_eq!(group.width(), "100%");
        assert_eq!(group.align(), "left");
        assert_eq!(group.margin_left(), "");
        assert_eq!(group.margin_right(), "auto");
        assert!(group.is_empty());
    }

    #[test]
    fn test_align_recomputes_margins() {
        let mut group = TabGroup::new();
        group.set_align("right");
        assert_eq!(group.margin_left(), "auto");
        assert_eq!(group.margin_right(), "");
        group.set_align("center");
        assert_eq!(group.margin_left(), "auto");
        assert_eq!(group.margin_right(), "auto");
    }

    #[test]
    fn test_register_and_remove() {
        let mut group = TabGroup::new();
        let id = group.register_tab(Tab::new("One"));
        group.register_tab(Tab::new("Two"));
        assert_eq!(group.len(), 2);

        let removed = group.remove_tab(&id).unwrap();
        assert_eq!(removed.label, "One");
        assert_eq!(group.len(), 1);
        assert!(group.remove_tab(&id).is_none());
    }

    #[test]
    fn test_visible_count_ignores_hidden_only() {
        let mut group = TabGroup::new();
        let id1 = group.register_tab(Tab::new("One"));
        let id2 = group.register_tab(Tab::new("Two"));
        group.register_tab(Tab::new("Three"));

        group.set_tab_hidden(&id1, true);
        group.tab_mut(&id2).unwrap().set_disabled(true);
        assert_eq!(group.visible_count(), 2);
    }

    #[test]
    fn test_palette_active_color_yields_background_class() {
        let mut group = TabGroup::new();
        group.set_active_color(Some("color-08"));
        group.set_active_color_label(Some("color-01"));
        assert_eq!(
            group.active_override(),
            Some(ActiveOverride::Classes("tc-color-08".to_string()))
        );
    }

    #[test]
    fn test_literal_active_colors_yield_inline_override() {
        let mut group = TabGroup::new();
        group.set_active_color(Some("#224"));
        group.set_active_color_label(Some("gainsboro"));
        assert_eq!(
            group.active_override(),
            Some(ActiveOverride::Inline {
                background: Some("#224".to_string()),
                label: Some("gainsboro".to_string()),
            })
        );
    }

    #[test]
    fn test_no_active_colors_means_no_override() {
        let mut group = TabGroup::new();
        assert_eq!(group.active_override(), None);
        // An unknown palette slot degrades to no override as well
        group.set_active_color(Some("color-77"));
        assert_eq!(group.active_override(), None);
    }
}
