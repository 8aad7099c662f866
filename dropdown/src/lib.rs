pub mod config;
pub mod error;
pub mod event;
pub mod focus;
pub mod geometry;
pub mod overlay;
pub mod style;
pub mod widget;

pub use config::DropDownConfig;
pub use error::{ConfigError, SelectionMismatch};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton, Provenance};
pub use focus::IconAffordance;
pub use geometry::Rect;
pub use overlay::{Anchor, AnchorOrigin, Animation, Overlay, OverlayProps, calculate_overlay_position};
pub use style::Style;
pub use widget::{
    ChoiceItem, ChoiceList, ChoiceListProps, CloseRequest, DropDown, DropDownId, DropDownView,
    RootSurface, WidgetState, resolve_label,
};

pub mod prelude {
    pub use crate::config::DropDownConfig;
    pub use crate::event::{Event, EventResult, Key, Modifiers, Provenance};
    pub use crate::focus::IconAffordance;
    pub use crate::geometry::Rect;
    pub use crate::overlay::{Anchor, Overlay, OverlayProps};
    pub use crate::style::Style;
    pub use crate::widget::{
        ChoiceItem, ChoiceList, ChoiceListProps, CloseRequest, DropDown, RootSurface, WidgetState,
    };
}
