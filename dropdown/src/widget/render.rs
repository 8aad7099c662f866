//! Render model for the DropDown widget.
//!
//! The widget does not draw anything itself. Each render it derives a
//! [`DropDownView`] from its config and state and hands the overlay and
//! choice-list parts to the host's collaborators.

use crate::focus::IconAffordance;
use crate::overlay::{AnchorOrigin, Overlay, OverlayProps};
use crate::style::Style;

use super::ChoiceItem;
use super::resolve::resolve_label;
use super::state::{DropDown, DropDownId};
use super::width::{RootSurface, menu_style};

/// Inputs for the choice list rendered inside the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceListProps<'a, V> {
    pub items: &'a [ChoiceItem<V>],
    /// Current value, highlighted in the list.
    pub value: Option<&'a V>,
    pub max_height: u16,
    /// Overlay panel style, including the computed width.
    pub style: Style,
    pub list_style: Style,
    /// Compact row density.
    pub desktop: bool,
}

/// Renders the candidate items and reports activations.
///
/// Activations come back through `DropDown::on_item_activated` and Escape
/// through `DropDown::on_escape`. Disabled items must never be reported.
pub trait ChoiceList<V> {
    fn present(&mut self, props: &ChoiceListProps<'_, V>);
}

/// Everything needed to draw the control for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropDownView<'a, V> {
    pub id: DropDownId,
    /// Label of the selected item, blank if none.
    pub label: &'a str,
    pub open: bool,
    pub disabled: bool,
    pub style: Style,
    /// Label style; hidden while the overlay covers the control.
    pub label_style: Style,
    pub icon_style: Style,
    pub underline_style: Style,
    /// Whether the icon affordance takes part in tab order.
    pub icon_focusable: bool,
    pub overlay: OverlayProps,
    pub list: ChoiceListProps<'a, V>,
}

impl<V, S, I> DropDown<V, S, I>
where
    V: PartialEq,
    S: RootSurface,
    I: IconAffordance,
{
    /// Derive the render model. The label is recomputed every time.
    pub fn view(&self) -> DropDownView<'_, V> {
        let config = self.config();
        let state = self.state();

        let label_style = if state.open {
            Style::new().hidden().merge(&config.label_style)
        } else {
            config.label_style.clone()
        };

        DropDownView {
            id: self.id(),
            label: resolve_label(&config.items, config.value.as_ref()),
            open: state.open,
            disabled: config.disabled,
            style: config.style.clone(),
            label_style,
            icon_style: config.icon_style.clone(),
            underline_style: config.underline_style.clone(),
            icon_focusable: !config.disabled,
            overlay: OverlayProps {
                anchor: state.anchor.clone(),
                open: state.open,
                animated: config.animated,
                animation: config.animation,
                origin: AnchorOrigin::TOP_LEFT,
            },
            list: ChoiceListProps {
                items: &config.items,
                value: config.value.as_ref(),
                max_height: config.max_height,
                style: menu_style(config, state.open, state.anchor.as_ref()),
                list_style: config.list_style.clone(),
                desktop: true,
            },
        }
    }

    /// Hand the current view to the overlay and, while open, the choice list.
    ///
    /// An overlay that opened before the surface was laid out picks up its
    /// anchor here.
    pub fn render<O, L>(&mut self, overlay: &mut O, list: &mut L)
    where
        O: Overlay + ?Sized,
        L: ChoiceList<V> + ?Sized,
    {
        self.refresh_anchor();
        let view = self.view();
        log::trace!(
            "DropDown::render id={} open={} label={:?}",
            view.id,
            view.open,
            view.label
        );
        overlay.present(&view.overlay);
        if view.open {
            list.present(&view.list);
        }
    }
}

