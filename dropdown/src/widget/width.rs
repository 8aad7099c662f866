//! Anchor width calculation.
//!
//! Two independent decisions:
//! - with `auto_width`, the control's root surface sizes itself to its content
//!   (unless the caller pinned a width in the root style)
//! - without `auto_width`, the open overlay is exactly as wide as the control
//!   was at the moment it opened

use crate::config::DropDownConfig;
use crate::overlay::Anchor;
use crate::style::Style;

/// The control's root surface, as seen by the widget.
pub trait RootSurface {
    /// Resolve a handle to the surface as it is laid out right now.
    ///
    /// `None` while the surface is not mounted or not measured yet.
    fn anchor(&self) -> Option<Anchor>;

    /// Drop any fixed width and size the surface to its content.
    fn use_intrinsic_width(&mut self);
}

/// Apply the root-surface half of the calculation.
///
/// Returns whether an intrinsic-width instruction was issued.
pub fn apply_root_width<V, S>(config: &DropDownConfig<V>, surface: &mut S) -> bool
where
    S: RootSurface + ?Sized,
{
    if !config.auto_width {
        return false;
    }
    if config.style.has_width() {
        log::trace!("root style pins width, skipping intrinsic sizing");
        return false;
    }
    surface.use_intrinsic_width();
    true
}

/// Width forced onto the overlay panel, if any.
pub fn overlay_width(auto_width: bool, open: bool, anchor: Option<&Anchor>) -> Option<u16> {
    if auto_width || !open {
        return None;
    }
    anchor.map(Anchor::width)
}

/// Style for the overlay panel: the computed width layered under the
/// caller's menu style.
pub fn menu_style<V>(config: &DropDownConfig<V>, open: bool, anchor: Option<&Anchor>) -> Style {
    match overlay_width(config.auto_width, open, anchor) {
        Some(width) => Style::new().width(width).merge(&config.menu_style),
        None => config.menu_style.clone(),
    }
}
