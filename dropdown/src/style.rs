//! Style override bags.
//!
//! The widget never interprets colors or spacing. It only cares about
//! `width`, which participates in the anchor width calculation. Every field is
//! optional so that a caller-supplied bag can be layered over a computed one.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub width: Option<u16>,
    pub bold: Option<bool>,
    pub dim: Option<bool>,
    pub hidden: Option<bool>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = Some(true);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = Some(true);
        self
    }

    /// Whether the bag explicitly sets a width.
    pub fn has_width(&self) -> bool {
        self.width.is_some()
    }

    /// Layer `over` on top of `self`. Fields set in `over` win.
    pub fn merge(&self, over: &Style) -> Style {
        Style {
            width: over.width.or(self.width),
            bold: over.bold.or(self.bold),
            dim: over.dim.or(self.dim),
            hidden: over.hidden.or(self.hidden),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
}
