// Tab Button Component
// State of one button in the tab strip, including its resolved colors

use crate::core::events::TabEvent;
use crate::core::palette::ColorToken;
use crate::core::resolver::{resolve_tab_colors, ActiveOverride, TabColors};
use crate::elements::tab::{Tab, DEFAULT_TAB_ALIGN};
use crate::utilities::helpers::{coerce_to_boolean, BoolAttr};

/// The clickable button surface of a tab
///
/// Mirrors one registered `Tab` and adds the strip-facing concerns: small
/// sizing, the group's active-color override and color resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    id: String,
    pub label: String,
    small: bool,
    active: bool,
    disabled: bool,
    hidden: bool,
    align: String,
    color: ColorToken,
    color_label: ColorToken,
    active_override: Option<ActiveOverride>,
}

impl TabButton {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            small: false,
            active: false,
            disabled: false,
            hidden: false,
            align: DEFAULT_TAB_ALIGN.to_string(),
            color: ColorToken::Unset,
            color_label: ColorToken::Unset,
            active_override: None,
        }
    }

    /// Build the button mirroring a registered tab
    pub fn for_tab(tab: &Tab) -> Self {
        Self {
            id: tab.id().to_string(),
            label: tab.label.clone(),
            small: false,
            active: tab.is_active(),
            disabled: tab.is_disabled(),
            hidden: tab.is_hidden(),
            align: tab.align().to_string(),
            color: tab.color().clone(),
            color_label: tab.color_label().clone(),
            active_override: None,
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

    pub fn is_small(&self) -> bool {
        self.small
    }

    pub fn visible(&self) -> bool {
        !self.hidden
    }

    pub fn align(&self) -> &str {
        &self.align
    }

    /// Set the active flag; activating produces an `Activated` notification
    pub fn set_active(&mut self, value: impl Into<BoolAttr>) -> Option<TabEvent> {
        self.active = coerce_to_boolean(value);
        if self.active {
            log::debug!("tab button `{}` activated", self.id);
            Some(TabEvent::Activated(self.id.clone()))
        } else {
            None
        }
    }

    /// Set the disabled flag; entering the disabled state produces a
    /// `StateChanged` notification
    pub fn set_disabled(&mut self, value: impl Into<BoolAttr>) -> Option<TabEvent> {
        let disabled = coerce_to_boolean(value);
        let entered = disabled && !self.disabled;
        self.disabled = disabled;
        entered.then(|| TabEvent::StateChanged(self.id.clone()))
    }

    /// Set the hidden flag; entering the hidden state produces a
    /// `StateChanged` notification
    pub fn set_hidden(&mut self, value: impl Into<BoolAttr>) -> Option<TabEvent> {
        let hidden = coerce_to_boolean(value);
        let entered = hidden && !self.hidden;
        self.hidden = hidden;
        entered.then(|| TabEvent::StateChanged(self.id.clone()))
    }

    pub fn set_small(&mut self, value: impl Into<BoolAttr>) {
        self.small = coerce_to_boolean(value);
    }

    pub fn set_align(&mut self, value: impl Into<String>) {
        self.align = value.into();
    }

    pub fn set_color(&mut self, value: Option<&str>) {
        self.color = ColorToken::parse(value);
    }

    pub fn set_color_label(&mut self, value: Option<&str>) {
        self.color_label = ColorToken::parse(value);
    }

    /// Set the group's active-color override from its raw string encoding
    pub fn set_active_colors(&mut self, value: Option<&str>) {
        self.active_override = ActiveOverride::parse(value);
    }

    /// Set the group's active-color override from an already-parsed value
    pub fn set_active_override(&mut self, value: Option<ActiveOverride>) {
        self.active_override = value;
    }

    /// A click on an enabled button produces a `Clicked` notification
    pub fn click(&self) -> Option<TabEvent> {
        if self.disabled {
            None
        } else {
            log::debug!("tab button `{}` clicked", self.id);
            Some(TabEvent::Clicked(self.id.clone()))
        }
    }

    /// Resolve the button's effective CSS classes and inline colors
    pub fn colors(&self) -> TabColors {
        resolve_tab_colors(
            &self.color,
            &self.color_label,
            self.active,
            self.active_override.as_ref(),
        )
    }
}
