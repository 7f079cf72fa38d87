// Tab Component
// State of one content tab: a labelled panel that shows its content when active

use uuid::Uuid;

use crate::core::events::TabEvent;
use crate::core::palette::ColorToken;
use crate::utilities::helpers::{coerce_to_boolean, BoolAttr};

/// Default alignment of a tab button inside the strip
pub const DEFAULT_TAB_ALIGN: &str = "center";

/// One tab registered with a group
///
/// Holds the coercible flags and color tokens of a single tab. Mutators return
/// the notifications to dispatch; nothing here fires callbacks or touches the
/// DOM - that stays with the host rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    id: String,
    pub label: String,
    active: bool,
    disabled: bool,
    hidden: bool,
    align: String,
    color: ColorToken,
    color_label: ColorToken,
}

impl Tab {
    /// Create a tab with a generated identifier
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), label)
    }

    /// Create a tab with an explicit identifier
    pub fn with_id(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            active: false,
            disabled: false,
            hidden: false,
            align: DEFAULT_TAB_ALIGN.to_string(),
            color: ColorToken::Unset,
            color_label: ColorToken::Unset,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hidden tabs are not shown; disabled tabs stay visible but unselectable
    pub fn visible(&self) -> bool {
        !self.hidden
    }

    /// Whether the tab's content panel should currently be displayed
    pub fn shows_content(&self) -> bool {
        self.active && !self.hidden
    }

    pub fn align(&self) -> &str {
        &self.align
    }

    pub fn color(&self) -> &ColorToken {
        &self.color
    }

    pub fn color_label(&self) -> &ColorToken {
        &self.color_label
    }

    /// Set the active flag; activating produces an `Activated` notification,
    /// deactivating is silent
    pub fn set_active(&mut self, value: impl Into<BoolAttr>) -> Option<TabEvent> {
        self.active = coerce_to_boolean(value);
        if self.active {
            log::debug!("tab `{}` activated", self.id);
            Some(TabEvent::Activated(self.id.clone()))
        } else {
            None
        }
    }

    /// Set the disabled flag; the transition into the disabled state produces
    /// a `StateChanged` notification
    pub fn set_disabled(&mut self, value: impl Into<BoolAttr>) -> Option<TabEvent> {
        let disabled = coerce_to_boolean(value);
        let entered = disabled && !self.disabled;
        self.disabled = disabled;
        if entered {
            log::debug!("tab `{}` disabled", self.id);
            Some(TabEvent::StateChanged(self.id.clone()))
        } else {
            None
        }
    }

    /// Set the hidden flag; the transition into the hidden state produces a
    /// `StateChanged` notification so the parent can recount visible tabs
    pub fn set_hidden(&mut self, value: impl Into<BoolAttr>) -> Option<TabEvent> {
        let hidden = coerce_to_boolean(value);
        let entered = hidden && !self.hidden;
        self.hidden = hidden;
        if entered {
            log::debug!("tab `{}` hidden", self.id);
            Some(TabEvent::StateChanged(self.id.clone()))
        } else {
            None
        }
    }

    /// Alignment is free-form and never validated
    pub fn set_align(&mut self, value: impl Into<String>) {
        self.align = value.into();
    }

    pub fn set_color(&mut self, value: Option<&str>) {
        self.color = ColorToken::parse(value);
    }

    pub fn set_color_label(&mut self, value: Option<&str>) {
        self.color_label = ColorToken::parse(value);
    }

    /// A click on an enabled tab produces a `Clicked` notification
    pub fn click(&self) -> Option<TabEvent> {
        if self.disabled {
            None
        } else {
            Some(TabEvent::Clicked(self.id.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tab = Tab::new("General");
        assert!(!tab.is_active());
        assert!(!tab.is_disabled());
        assert!(!tab.is_hidden());
        assert!(tab.visible());
        assert_eq!(tab.align(), "center");
        assert!(tab.color().is_unset());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(Tab::new("a").id(), Tab::new("b").id());
    }

    #[test]
    fn test_activate_emits_once_per_set() {
        let mut tab = Tab::with_id("t1", "General");
        assert_eq!(
            tab.set_active(true),
            Some(TabEvent::Activated("t1".to_string()))
        );
        // Deactivation is silent
        assert_eq!(tab.set_active(false), None);
    }

    #[test]
    fn test_activate_accepts_coercible_input() {
        let mut tab = Tab::with_id("t1", "General");
        assert!(tab.set_active("true").is_some());
        assert!(tab.is_active());
        tab.set_active("false");
        assert!(!tab.is_active());
    }

    #[test]
    fn test_hide_emits_state_changed_on_transition_only() {
        let mut tab = Tab::with_id("t1", "General");
        assert_eq!(
            tab.set_hidden(true),
            Some(TabEvent::StateChanged("t1".to_string()))
        );
        // Re-setting the same value emits nothing
        assert_eq!(tab.set_hidden(true), None);
        assert_eq!(tab.set_hidden(false), None);
    }

    #[test]
    fn test_disable_emits_state_changed_on_transition_only() {
        let mut tab = Tab::with_id("t1", "General");
        assert!(tab.set_disabled(true).is_some());
        assert!(tab.set_disabled(true).is_none());
        assert!(tab.visible()); // disabled tabs stay visible
    }

    #[test]
    fn test_click_blocked_when_disabled() {
        let mut tab = Tab::with_id("t1", "General");
        assert_eq!(tab.click(), Some(TabEvent::Clicked("t1".to_string())));
        tab.set_disabled(true);
        assert_eq!(tab.click(), None);
    }

    #[test]
    fn test_shows_content() {
        let mut tab = Tab::with_id("t1", "General");
        assert!(!tab.shows_content());
        tab.set_active(true);
        assert!(tab.shows_content());
        tab.set_hidden(true);
        assert!(!tab.shows_content());
    }
}
