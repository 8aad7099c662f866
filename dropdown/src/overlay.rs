//! Overlay collaborator contract.
//!
//! The overlay is the floating panel that hosts the choice list while the
//! dropdown is open. It is owned by the host, not the widget:
//! - The widget hands it an [`OverlayProps`] on every render
//! - The overlay positions itself relative to the anchor
//! - Outside clicks are reported back through `DropDown::on_close_requested`
//! - It never takes focus away from the owner widget
//!
//! # Usage
//!
//! ```ignore
//! struct Panel { area: Option<Rect> }
//!
//! impl Overlay for Panel {
//!     fn present(&mut self, props: &OverlayProps) {
//!         self.area = props
//!             .anchor
//!             .as_ref()
//!             .filter(|_| props.open)
//!             .map(|a| calculate_overlay_position(screen, a.rect, (20, 5), props.origin));
//!     }
//! }
//! ```

use crate::geometry::Rect;

/// Handle to the control's root surface at the moment the overlay opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// ID of the widget that owns the overlay.
    /// Used for click-outside detection.
    pub owner_id: String,
    /// The root surface's screen rectangle.
    pub rect: Rect,
}

impl Anchor {
    pub fn new(owner_id: impl Into<String>, rect: Rect) -> Self {
        Self {
            owner_id: owner_id.into(),
            rect,
        }
    }

    /// Rendered width of the root surface.
    pub fn width(&self) -> u16 {
        self.rect.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalOrigin {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalOrigin {
    #[default]
    Left,
    Middle,
    Right,
}

/// Point on the anchor the overlay's top-left corner is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorOrigin {
    pub vertical: VerticalOrigin,
    pub horizontal: HorizontalOrigin,
}

impl AnchorOrigin {
    /// Top-left of the anchor. The dropdown always uses this origin, so the
    /// panel covers the control.
    pub const TOP_LEFT: AnchorOrigin = AnchorOrigin {
        vertical: VerticalOrigin::Top,
        horizontal: HorizontalOrigin::Left,
    };
}

/// How the overlay reveals itself when it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    /// Grow downward from the anchor.
    #[default]
    Vertical,
    /// Fade in place.
    Fade,
    /// Appear at once.
    Instant,
}

/// Everything the overlay needs from the widget for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayProps {
    pub anchor: Option<Anchor>,
    pub open: bool,
    pub animated: bool,
    pub animation: Animation,
    pub origin: AnchorOrigin,
}

/// Floating panel that hosts the choice list.
pub trait Overlay {
    /// Render (or hide) the panel. Must render nothing when `props.open` is false.
    fn present(&mut self, props: &OverlayProps);
}

/// Calculate the screen rectangle for an overlay.
///
/// Pins the overlay's top-left corner to `origin` on the anchor, then shifts
/// it back inside `screen` if it would overflow.
///
/// # Arguments
///
/// * `screen` - Total screen area
/// * `anchor` - Anchor element's rectangle
/// * `content_size` - Size of the overlay content (width, height)
/// * `origin` - Point on the anchor to pin to
pub fn calculate_overlay_position(
    screen: Rect,
    anchor: Rect,
    content_size: (u16, u16),
    origin: AnchorOrigin,
) -> Rect {
    let (width, height) = content_size;

    // Constrain dimensions to screen
    let width = width.min(screen.width);
    let height = height.min(screen.height);

    let x = match origin.horizontal {
        HorizontalOrigin::Left => anchor.x,
        HorizontalOrigin::Middle => anchor.x.saturating_add(anchor.width / 2),
        HorizontalOrigin::Right => anchor.right(),
    };
    let y = match origin.vertical {
        VerticalOrigin::Top => anchor.y,
        VerticalOrigin::Center => anchor.y.saturating_add(anchor.height / 2),
        VerticalOrigin::Bottom => anchor.bottom(),
    };

    Rect::new(
        constrain(x, width, screen.x, screen.width),
        constrain(y, height, screen.y, screen.height),
        width,
        height,
    )
}

/// Constrain a coordinate so `start..start + len` fits within the screen span.
fn constrain(pos: u16, len: u16, screen_start: u16, screen_len: u16) -> u16 {
    let max = screen_start.saturating_add(screen_len.saturating_sub(len));
    pos.min(max).max(screen_start)
}
