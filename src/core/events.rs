// Tab Events
// Notifications produced by tab mutators, dispatched by the caller
//
// Mutators return the events to emit instead of firing callbacks themselves,
// so state mutation stays decoupled from whatever delivery mechanism the host
// wires up (observer list, channel, event bus).

/// Opaque identifier of a tab
pub type TabId = String;

/// Notifications a tab can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// The tab became active (content should be shown)
    Activated(TabId),

    /// The tab was hidden or disabled; the parent should recount visible tabs
    StateChanged(TabId),

    /// The tab was clicked while enabled
    Clicked(TabId),
}

impl TabEvent {
    /// Identifier of the tab that produced the event
    pub fn tab_id(&self) -> &str {
        match self {
            TabEvent::Activated(id) | TabEvent::StateChanged(id) | TabEvent::Clicked(id) => id,
        }
    }
}
