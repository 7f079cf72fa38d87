// Color Resolver
// Derives the CSS-facing colors of a tab button from its tokens and active state
//
// Pure functions of their inputs; invalid color input never errors, it just
// resolves to "no color applied".

use super::palette::{ColorToken, PALETTE_MARKER};

/// Group-supplied color override for the active tab
///
/// Encoded on the wire as a single string: a value containing the palette
/// marker is used verbatim as a CSS class (membership in the palette is NOT
/// checked here, matching the historical behavior); any other value carries
/// inline colors as `background;label`, the label being optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveOverride {
    /// Class string applied as-is to the active tab
    Classes(String),
    /// Inline CSS color values for the active tab
    Inline {
        background: Option<String>,
        label: Option<String>,
    },
}

impl ActiveOverride {
    /// Classify a raw override string; empty/absent input carries no override
    pub fn parse(value: Option<&str>) -> Option<Self> {
        let raw = match value {
            Some(raw) if !raw.is_empty() => raw,
            _ => return None,
        };

        if raw.contains(PALETTE_MARKER) {
            return Some(ActiveOverride::Classes(raw.to_string()));
        }

        let mut parts = raw.split(';');
        let background = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
        let label = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
        Some(ActiveOverride::Inline { background, label })
    }
}

/// Resolved colors for one tab button
///
/// `classes` feeds the element's class attribute; `background` and `label`
/// feed inline `background-color` / `color` styles. Unset fields mean the
/// stylesheet default applies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabColors {
    pub classes: String,
    pub background: Option<String>,
    pub label: Option<String>,
}

/// Resolve the effective colors of a tab
///
/// Active tabs take their colors exclusively from the group's override (an
/// active tab with no override gets no custom color, even when per-tab colors
/// are set). Inactive tabs combine their own background and label tokens:
/// palette slots become classes, literals become inline values.
pub fn resolve_tab_colors(
    color: &ColorToken,
    color_label: &ColorToken,
    is_active: bool,
    active_override: Option<&ActiveOverride>,
) -> TabColors {
    if is_active {
        return match active_override {
            Some(ActiveOverride::Classes(classes)) => TabColors {
                classes: classes.clone(),
                ..TabColors::default()
            },
            Some(ActiveOverride::Inline { background, label }) => TabColors {
                classes: String::new(),
                background: background.clone(),
                label: label.clone(),
            },
            None => TabColors::default(),
        };
    }

    let mut classes = Vec::new();
    let mut resolved = TabColors::default();

    match color {
        ColorToken::Palette(slot) => classes.push(slot.background_class()),
        ColorToken::Literal(value) => resolved.background = Some(value.clone()),
        ColorToken::Unset => {}
    }

    match color_label {
        ColorToken::Palette(slot) => classes.push(slot.label_class()),
        ColorToken::Literal(value) => resolved.label = Some(value.clone()),
        ColorToken::Unset => {}
    }

    resolved.classes = classes.join(" ");
    resolved
}
