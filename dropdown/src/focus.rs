//! Focus hand-off to the icon affordance.

/// The clickable arrow next to the label.
///
/// It is the element that holds keyboard focus while the dropdown is closed.
/// After a keyboard-originated close the widget moves focus back onto it and
/// turns on its keyboard-focus indicator.
pub trait IconAffordance {
    /// Move input focus to the affordance.
    fn focus(&mut self);

    /// Toggle the explicit keyboard-focus visual mode.
    fn set_keyboard_focus(&mut self, enabled: bool);
}
