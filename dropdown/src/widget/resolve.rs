//! Label resolution: which item does the current value point at.

use crate::error::SelectionMismatch;

use super::ChoiceItem;

/// Outcome of scanning the items for the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Index of the first matching item.
    pub index: Option<usize>,
    /// Label to show in the control ("" when nothing matched).
    pub label: &'a str,
    /// Set when the value does not match exactly one item.
    pub mismatch: Option<SelectionMismatch>,
}

/// Return the display label of the first item whose value equals `value`.
///
/// Blank when nothing matches, including when `value` is `None` or `items`
/// is empty.
pub fn resolve_label<'a, V: PartialEq>(items: &'a [ChoiceItem<V>], value: Option<&V>) -> &'a str {
    resolve(items, value).label
}

/// Like [`resolve_label`] but also reports zero or multiple matches.
///
/// A `None` value is the "nothing selected" state and never a mismatch.
pub fn resolve<'a, V: PartialEq>(items: &'a [ChoiceItem<V>], value: Option<&V>) -> Resolution<'a> {
    let Some(value) = value else {
        return Resolution {
            index: None,
            label: "",
            mismatch: None,
        };
    };

    let mut matches = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.value == *value)
        .map(|(i, _)| i);

    let Some(first) = matches.next() else {
        return Resolution {
            index: None,
            label: "",
            mismatch: Some(SelectionMismatch::NoMatch { items: items.len() }),
        };
    };

    let extra = matches.count();
    let mismatch = (extra > 0).then_some(SelectionMismatch::Ambiguous {
        count: extra + 1,
        first,
    });

    Resolution {
        index: Some(first),
        label: items[first].display_label(),
        mismatch,
    }
}
