// Layout calculation for tab groups
// Derives the horizontal auto-margins that position a group of tabs

/// CSS-facing horizontal margins of a tab group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub margin_left: &'static str,
    pub margin_right: &'static str,
}

/// Compute the auto-margins for a group alignment
///
/// "left" pins the group left, "right" pins it right, and any other value
/// (including "center") centers it with auto margins on both sides. Total
/// over all input strings; unrecognized alignments are not an error.
pub fn compute_margins(align: &str) -> Margins {
    match align {
        "left" => Margins {
            margin_left: "",
            margin_right: "auto",
        },
        "right" => Margins {
            margin_left: "auto",
            margin_right: "",
        },
        _ => Margins {
            margin_left: "auto",
            margin_right: "auto",
        },
    }
}
