//! DropDown widget - a compact control that opens an anchored choice list.

pub mod events;
pub mod item;
pub mod render;
pub mod resolve;
mod state;
pub mod width;

pub use events::{KeyAction, translate_key};
pub use item::ChoiceItem;
pub use render::{ChoiceList, ChoiceListProps, DropDownView};
pub use resolve::{Resolution, resolve, resolve_label};
pub use state::{ChangeHandler, CloseRequest, DropDown, DropDownId, OpenTrigger, WidgetState};
pub use width::RootSurface;
