//! Group routing for items copied onto the product development board
//!
//! Master board sections are free text ("SS26 New Colors – Wave 2",
//! "End of Life batch", ...). Each one lands in one of three fixed
//! destination groups.

pub const NEW_COLORS: &str = "SS26 New Colors";
pub const NEW_STYLES: &str = "SS26 New Styles";
pub const END_OF_LIFE: &str = "End of Life Products";

/// Group used when no rule matches
pub const DEFAULT_GROUP: &str = NEW_COLORS;

/// Destination groups, in the order they are created on the target board
pub const TARGET_GROUPS: &[&str] = &[NEW_COLORS, NEW_STYLES, END_OF_LIFE];

/// Single routing rule: lowercase needle searched in the source group title
#[derive(Debug, Clone, Copy)]
pub struct GroupRule {
    pub needle: &'static str,
    pub target: &'static str,
}

/// Routing rules, evaluated top to bottom. First match wins.
pub const GROUP_RULES: &[GroupRule] = &[
    GroupRule { needle: "new colors", target: NEW_COLORS },
    GroupRule { needle: "new styles", target: NEW_STYLES },
    GroupRule { needle: "end of life", target: END_OF_LIFE },
];

/// Pick the destination group for a source group title
pub fn classify_group(source_group_title: &str) -> &'static str {
    let title = source_group_title.to_lowercase();

    GROUP_RULES
        .iter()
        .find(|rule| title.contains(rule.needle))
        .map(|rule| rule.target)
        .unwrap_or(DEFAULT_GROUP)
}
