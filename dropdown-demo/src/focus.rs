//! Focus tracking for the demo screen.

use std::cell::RefCell;
use std::rc::Rc;

use dropdown::IconAffordance;

/// Unique identifier for a focusable element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub String);

impl FocusId {
    /// Create a new focus ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for FocusId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Focus state manager
#[derive(Debug, Default)]
pub struct FocusState {
    /// Currently focused element ID
    current: Option<FocusId>,
    /// Focusable elements in tab order
    focusable_ids: Vec<FocusId>,
    /// Focus was reached by keyboard and should be drawn as such
    keyboard_focus: bool,
}

impl FocusState {
    /// Create a focus state over elements in tab order
    pub fn new(ids: impl IntoIterator<Item = FocusId>) -> Self {
        Self {
            focusable_ids: ids.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Get the currently focused element
    pub fn current(&self) -> Option<&FocusId> {
        self.current.as_ref()
    }

    /// Check if an element is focused
    pub fn is_focused(&self, id: &str) -> bool {
        self.current.as_ref().is_some_and(|current| current.0 == id)
    }

    /// Set focus to a specific element
    pub fn set_focus(&mut self, id: impl Into<FocusId>) {
        self.current = Some(id.into());
    }

    /// Clear focus
    pub fn clear_focus(&mut self) {
        self.current = None;
        self.keyboard_focus = false;
    }

    pub fn set_keyboard_focus(&mut self, enabled: bool) {
        self.keyboard_focus = enabled;
    }

    /// Whether the focused element shows the keyboard-focus indicator
    pub fn has_keyboard_focus(&self, id: &str) -> bool {
        self.keyboard_focus && self.is_focused(id)
    }

    /// Move focus to the next element (Tab). Returns the (old, new) pair.
    pub fn focus_next(&mut self) -> Option<(Option<FocusId>, FocusId)> {
        if self.focusable_ids.is_empty() {
            return None;
        }

        let current_idx = self
            .current
            .as_ref()
            .and_then(|c| self.focusable_ids.iter().position(|id| id == c));

        let next_idx = match current_idx {
            Some(idx) => (idx + 1) % self.focusable_ids.len(),
            None => 0,
        };

        let next = self.focusable_ids[next_idx].clone();
        let old = self.current.replace(next.clone());
        self.keyboard_focus = true;
        Some((old, next))
    }

    /// Move focus to the previous element (Shift+Tab). Returns the (old, new) pair.
    pub fn focus_prev(&mut self) -> Option<(Option<FocusId>, FocusId)> {
        if self.focusable_ids.is_empty() {
            return None;
        }

        let current_idx = self
            .current
            .as_ref()
            .and_then(|c| self.focusable_ids.iter().position(|id| id == c));

        let prev_idx = match current_idx {
            Some(0) | None => self.focusable_ids.len() - 1,
            Some(idx) => idx - 1,
        };

        let prev = self.focusable_ids[prev_idx].clone();
        let old = self.current.replace(prev.clone());
        self.keyboard_focus = true;
        Some((old, prev))
    }
}

/// The dropdown's arrow, backed by the shared focus state.
#[derive(Debug)]
pub struct ArrowIcon {
    id: FocusId,
    focus: Rc<RefCell<FocusState>>,
}

impl ArrowIcon {
    pub fn new(id: impl Into<FocusId>, focus: Rc<RefCell<FocusState>>) -> Self {
        Self {
            id: id.into(),
            focus,
        }
    }

    pub fn id(&self) -> &str {
        &self.id.0
    }
}

impl IconAffordance for ArrowIcon {
    fn focus(&mut self) {
        log::debug!("ArrowIcon::focus id={}", self.id.0);
        self.focus.borrow_mut().set_focus(self.id.clone());
    }

    fn set_keyboard_focus(&mut self, enabled: bool) {
        self.focus.borrow_mut().set_keyboard_focus(enabled);
    }
}
