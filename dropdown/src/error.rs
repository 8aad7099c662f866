//! Error types.

use thiserror::Error;

/// The current value does not identify exactly one item.
///
/// Never fatal: the label falls back to blank (no match) or to the first
/// match. Surfaced as a usage warning in the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionMismatch {
    /// No item carries the current value.
    #[error("value matches none of the {items} items, label will be blank")]
    NoMatch {
        /// Number of items that were scanned.
        items: usize,
    },

    /// Several items carry the current value.
    #[error("value matches {count} items, showing the first (index {first})")]
    Ambiguous {
        /// How many items matched.
        count: usize,
        /// Index of the item whose label is shown.
        first: usize,
    },
}

/// Errors reported by `DropDownConfig::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The choice list would have no room to show anything.
    #[error("max_height must be greater than zero")]
    ZeroMaxHeight,

    /// A style bag forces a zero width.
    #[error("{bag} style sets a zero width")]
    ZeroWidthOverride {
        /// Which style bag carries the override.
        bag: &'static str,
    },
}
