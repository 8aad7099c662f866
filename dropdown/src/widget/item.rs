//! Items that can be displayed in a DropDown.

/// One choice in the dropdown.
///
/// The value is compared against the widget's current value with `PartialEq`.
/// Position in the item sequence is the item's identity; it is the index
/// reported to the change callback.
///
/// # Example
///
/// ```ignore
/// let items = vec![
///     ChoiceItem::new(1, "Never"),
///     ChoiceItem::new(2, "Every Night"),
///     ChoiceItem::new(3, "Weeknights").disabled(),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem<V> {
    pub value: V,
    /// Text shown in the control when this item is selected.
    pub label: String,
    /// Text shown in the list. Also used in the control when `label` is empty.
    pub primary_text: Option<String>,
    /// Disabled items are shown but cannot be activated.
    pub disabled: bool,
}

impl<V> ChoiceItem<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            primary_text: None,
            disabled: false,
        }
    }

    /// Set the list text (when it differs from the control label).
    pub fn primary_text(mut self, text: impl Into<String>) -> Self {
        self.primary_text = Some(text.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Text for the control: the label, or the primary text if the label is empty.
    pub fn display_label(&self) -> &str {
        match &self.primary_text {
            Some(text) if self.label.is_empty() => text.as_str(),
            _ => self.label.as_str(),
        }
    }

    /// Text for the list row: the primary text, or the label.
    pub fn list_text(&self) -> &str {
        self.primary_text.as_deref().unwrap_or(&self.label)
    }
}

// Plain strings are their own value and label
impl From<&str> for ChoiceItem<String> {
    fn from(s: &str) -> Self {
        ChoiceItem::new(s.to_string(), s)
    }
}

impl<V> From<(V, &str)> for ChoiceItem<V> {
    fn from((value, label): (V, &str)) -> Self {
        ChoiceItem::new(value, label)
    }
}
