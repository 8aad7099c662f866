//! Event handling for the DropDown widget.

use crate::event::{Event, EventResult, Key, Modifiers};
use crate::focus::IconAffordance;

use super::state::{DropDown, OpenTrigger};
use super::width::RootSurface;

/// What a key means to the dropdown, regardless of its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Down arrow or Space: open the overlay.
    Open,
    /// Escape: close the overlay and hand focus back.
    Cancel,
}

/// Translate a key press into a dropdown action.
pub fn translate_key(key: Key, modifiers: Modifiers) -> Option<KeyAction> {
    if modifiers.is_chord() {
        return None;
    }
    match key {
        Key::Down | Key::SPACE => Some(KeyAction::Open),
        Key::Escape => Some(KeyAction::Cancel),
        _ => None,
    }
}

impl<V, S, I> DropDown<V, S, I>
where
    V: PartialEq,
    S: RootSurface,
    I: IconAffordance,
{
    /// Route an event aimed at the control (label, arrow or underline).
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key { .. } => self.handle_key(event),
            Event::Click { .. } => self.activate_control(event),
            Event::Focus { .. } => self.handle_focus(event),
            Event::Blur { .. } => self.handle_blur(event),
            Event::Resize { .. } => EventResult::Ignored,
        }
    }

    /// Key press while the icon affordance has keyboard focus.
    ///
    /// Only opening is handled here; Escape and commit keys belong to the
    /// choice list while the overlay is open.
    pub fn handle_key(&mut self, event: &Event) -> EventResult {
        let Event::Key { key, modifiers, .. } = event else {
            return EventResult::Ignored;
        };
        if self.config().disabled {
            return EventResult::Ignored;
        }

        let action = translate_key(*key, *modifiers);
        log::trace!("DropDown::handle_key id={} key={:?} action={:?}", self.id(), key, action);

        match action {
            Some(KeyAction::Open) if !self.is_open() => {
                self.open(OpenTrigger::Key);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Focus events stop here so a containing field does not re-render and
    /// steal keyboard focus mid-interaction.
    pub fn handle_focus(&mut self, event: &Event) -> EventResult {
        log::trace!("DropDown::handle_focus id={} target={:?}", self.id(), event.target());
        EventResult::Consumed
    }

    /// Blur events stop here for the same reason as focus events.
    pub fn handle_blur(&mut self, event: &Event) -> EventResult {
        log::trace!("DropDown::handle_blur id={} target={:?}", self.id(), event.target());
        EventResult::Consumed
    }

    /// Key press inside the open choice list that the list did not handle
    /// itself. Escape closes with keyboard provenance.
    pub fn handle_list_key(&mut self, event: &Event) -> EventResult {
        let Event::Key { key, modifiers, .. } = event else {
            return EventResult::Ignored;
        };
        match translate_key(*key, *modifiers) {
            Some(KeyAction::Cancel) => self.on_escape(event),
            _ => EventResult::Ignored,
        }
    }
}
