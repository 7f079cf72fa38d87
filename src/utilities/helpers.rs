// Helper utilities for tab components

/// A loosely-typed boolean attribute as the host templating layer may pass it
///
/// Attribute bindings arrive as real booleans, as the strings "true"/"false",
/// or as bare attribute presence with no value at all. Every boolean input of
/// every component funnels through this one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolAttr {
    Bool(bool),
    Text(String),
    /// Attribute present with no value, e.g. `<tab disabled>`
    Present,
    /// Attribute not supplied
    Absent,
}

impl From<bool> for BoolAttr {
    fn from(value: bool) -> Self {
        BoolAttr::Bool(value)
    }
}

impl From<&str> for BoolAttr {
    fn from(value: &str) -> Self {
        BoolAttr::Text(value.to_string())
    }
}

impl From<String> for BoolAttr {
    fn from(value: String) -> Self {
        BoolAttr::Text(value)
    }
}

impl From<Option<&str>> for BoolAttr {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(text) => BoolAttr::Text(text.to_string()),
            None => BoolAttr::Absent,
        }
    }
}

/// Coerce a loosely-typed attribute value to a strict boolean
///
/// "true", bare presence (including the empty string an attribute-only
/// binding produces) and `true` are truthy; everything else, including
/// absence, is false.
pub fn coerce_to_boolean(value: impl Into<BoolAttr>) -> bool {
    match value.into() {
        BoolAttr::Bool(value) => value,
        BoolAttr::Text(text) => text == "true" || text.is_empty(),
        BoolAttr::Present => true,
        BoolAttr::Absent => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_booleans() {
        assert!(coerce_to_boolean(true));
        assert!(!coerce_to_boolean(false));
    }

    #[test]
    fn test_coerce_strings() {
        assert!(coerce_to_boolean("true"));
        assert!(!coerce_to_boolean("false"));
        assert!(!coerce_to_boolean("yes")); // only "true" and presence count
    }

    #[test]
    fn test_coerce_presence() {
        assert!(coerce_to_boolean(BoolAttr::Present));
        assert!(coerce_to_boolean("")); // attribute present with empty value
    }

    #[test]
    fn test_coerce_absence() {
        assert!(!coerce_to_boolean(BoolAttr::Absent));
        assert!(!coerce_to_boolean(None::<&str>));
    }
}
