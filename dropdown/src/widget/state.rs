//! DropDown widget state and transitions.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::DropDownConfig;
use crate::event::{Event, EventResult, Provenance};
use crate::focus::IconAffordance;
use crate::overlay::Anchor;

use super::resolve::resolve;
use super::width::{RootSurface, apply_root_width};

/// Unique identifier for a DropDown instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropDownId(usize);

impl DropDownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for DropDownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

/// A request to close the overlay, tagged with the modality that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseRequest {
    pub provenance: Provenance,
}

impl CloseRequest {
    pub fn keyboard() -> Self {
        Self {
            provenance: Provenance::Keyboard,
        }
    }

    pub fn pointer() -> Self {
        Self {
            provenance: Provenance::Pointer,
        }
    }

    /// Close with the modality of the triggering event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            provenance: Provenance::of(event),
        }
    }
}

/// Why the overlay opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTrigger {
    /// Pointer activation of the control.
    Control,
    /// Down arrow or Space on the focused control.
    Key,
    /// A containing field asked the widget to take focus.
    FocusRequest,
    /// Deferred open after the first layout pass.
    Immediate,
}

/// Open/closed state plus the anchor captured when the overlay opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub open: bool,
    /// Re-resolved on every open. Stale (and ignored) while closed.
    pub anchor: Option<Anchor>,
}

/// Change callback: `(triggering event, item index, item value)`.
pub type ChangeHandler<V> = Box<dyn FnMut(&Event, usize, &V)>;

/// A dropdown selection widget.
///
/// Shows the label of the selected item and, when activated, asks the host to
/// show an overlay with the choice list anchored to the control. Committing a
/// choice calls the change handler; the caller then supplies a new config with
/// the new value.
///
/// The widget drives two collaborators directly:
/// - `S`, the control's root surface (anchor and width)
/// - `I`, the icon affordance that receives focus after a keyboard close
///
/// # Example
///
/// ```ignore
/// let config = DropDownConfig::new([ChoiceItem::new(1, "One"), ChoiceItem::new(2, "Two")])
///     .value(2);
/// let mut dropdown = DropDown::new(config, surface, icon)
///     .on_change(|_event, index, value| log::info!("picked {index}: {value}"));
/// dropdown.mount();
/// ```
pub struct DropDown<V, S, I> {
    id: DropDownId,
    config: DropDownConfig<V>,
    state: WidgetState,
    surface: S,
    icon: I,
    on_change: Option<ChangeHandler<V>>,
    mounted: bool,
    pending_open: bool,
}

impl<V, S, I> fmt::Debug for DropDown<V, S, I>
where
    V: fmt::Debug,
    S: fmt::Debug,
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropDown")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("surface", &self.surface)
            .field("icon", &self.icon)
            .field("on_change", &self.on_change.is_some())
            .field("mounted", &self.mounted)
            .field("pending_open", &self.pending_open)
            .finish()
    }
}

impl<V, S, I> DropDown<V, S, I>
where
    V: PartialEq,
    S: RootSurface,
    I: IconAffordance,
{
    /// Create a closed, unmounted dropdown.
    pub fn new(config: DropDownConfig<V>, surface: S, icon: I) -> Self {
        Self {
            id: DropDownId::new(),
            config,
            state: WidgetState::default(),
            surface,
            icon,
            on_change: None,
            mounted: false,
            pending_open: false,
        }
    }

    /// Set the change handler.
    pub fn on_change(mut self, handler: impl FnMut(&Event, usize, &V) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Replace (or clear) the change handler.
    pub fn set_on_change(&mut self, handler: Option<ChangeHandler<V>>) {
        self.on_change = handler;
    }

    pub fn id(&self) -> DropDownId {
        self.id
    }

    /// Get the ID as a string (used as the anchor owner id).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Anchor captured by the most recent open.
    pub fn anchor(&self) -> Option<&Anchor> {
        self.state.anchor.as_ref()
    }

    pub fn config(&self) -> &DropDownConfig<V> {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn icon(&self) -> &I {
        &self.icon
    }

    pub fn icon_mut(&mut self) -> &mut I {
        &mut self.icon
    }

    /// Whether a deferred open is waiting for [`DropDown::run_deferred`].
    pub fn has_pending_open(&self) -> bool {
        self.pending_open
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Called once after the control is first placed on screen.
    ///
    /// Applies the width calculation and, with `open_immediately`, schedules
    /// a single deferred open for the next [`DropDown::run_deferred`].
    pub fn mount(&mut self) {
        if self.mounted {
            log::debug!("DropDown::mount id={} already mounted", self.id);
            return;
        }
        self.mounted = true;
        apply_root_width(&self.config, &mut self.surface);
        self.warn_on_mismatch();

        if self.config.open_immediately {
            log::debug!("DropDown::mount id={} scheduling deferred open", self.id);
            self.pending_open = true;
        }
    }

    /// Run the deferred open once the first layout pass has completed.
    ///
    /// Returns whether a deferred transition was consumed.
    pub fn run_deferred(&mut self) -> bool {
        if !std::mem::take(&mut self.pending_open) {
            return false;
        }
        if !self.state.open {
            self.open(OpenTrigger::Immediate);
        }
        true
    }

    /// Supply a new configuration (new items, value, flags or styles).
    pub fn set_config(&mut self, config: DropDownConfig<V>) {
        if let Err(e) = config.validate() {
            log::warn!("DropDown id={} invalid config: {}", self.id, e);
        }
        self.config = config;
        if self.mounted {
            apply_root_width(&self.config, &mut self.surface);
        }
        self.warn_on_mismatch();
        self.refresh_anchor();
    }

    /// Resolve a missing anchor while open.
    ///
    /// Opening before the surface is laid out leaves the overlay without an
    /// anchor. Once the surface can report one it is picked up here. A present
    /// anchor is left alone until the next open. Returns whether it changed.
    pub fn refresh_anchor(&mut self) -> bool {
        if !self.state.open || self.state.anchor.is_some() {
            return false;
        }
        let Some(anchor) = self.surface.anchor() else {
            return false;
        };
        log::debug!(
            "DropDown::refresh_anchor id={} anchor={:?}",
            self.id,
            anchor
        );
        self.state.anchor = Some(anchor);
        true
    }

    fn warn_on_mismatch(&self) {
        let resolution = resolve(&self.config.items, self.config.value.as_ref());
        if let Some(mismatch) = resolution.mismatch {
            log::warn!("DropDown id={}: {}", self.id, mismatch);
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Pointer activation of the control: toggles the overlay.
    ///
    /// While open this acts as a pointer close, so focus is left alone.
    /// Ignored while disabled, but the activation is still consumed.
    pub fn activate_control(&mut self, _event: &Event) -> EventResult {
        if self.config.disabled {
            log::debug!("DropDown::activate_control id={} ignored (disabled)", self.id);
            return EventResult::Consumed;
        }
        self.toggle(OpenTrigger::Control);
        EventResult::Consumed
    }

    /// Open-on-focus-request for containing form fields.
    ///
    /// Toggles the overlay like a control activation. No-op while disabled.
    pub fn open_on_focus_request(&mut self) {
        if self.config.disabled {
            return;
        }
        self.toggle(OpenTrigger::FocusRequest);
    }

    /// The choice list reported an activation of the item at `index`.
    ///
    /// Calls the change handler with the item's value, then closes with the
    /// modality of `event`.
    pub fn on_item_activated(&mut self, event: &Event, index: usize) -> EventResult {
        if !self.state.open {
            log::debug!(
                "DropDown::on_item_activated id={} index={} ignored (closed)",
                self.id,
                index
            );
            return EventResult::Ignored;
        }
        let Some(item) = self.config.items.get(index) else {
            log::warn!(
                "DropDown id={} item index {} out of range ({} items)",
                self.id,
                index,
                self.config.items.len()
            );
            return EventResult::Ignored;
        };

        log::debug!("DropDown::on_item_activated id={} index={}", self.id, index);
        if let Some(handler) = self.on_change.as_mut() {
            handler(event, index, &item.value);
        }
        self.close(CloseRequest::from_event(event));
        EventResult::Consumed
    }

    /// The choice list saw Escape. Always a keyboard close.
    pub fn on_escape(&mut self, _event: &Event) -> EventResult {
        if self.close(CloseRequest::keyboard()) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// The overlay asked to be dismissed (e.g. a click outside it).
    pub fn on_close_requested(&mut self) {
        self.close(CloseRequest::pointer());
    }

    /// Close the overlay.
    ///
    /// After a keyboard close, focus moves to the icon affordance and its
    /// keyboard-focus mode is turned on. Closing a closed dropdown does
    /// nothing. Returns whether the state changed.
    pub fn close(&mut self, request: CloseRequest) -> bool {
        if !self.state.open {
            return false;
        }
        self.state.open = false;
        log::debug!(
            "DropDown::close id={} provenance={:?}",
            self.id,
            request.provenance
        );

        if request.provenance.is_keyboard() {
            self.icon.focus();
            self.icon.set_keyboard_focus(true);
        }
        true
    }

    /// Open the overlay, resolving the anchor from the live surface.
    pub(crate) fn open(&mut self, trigger: OpenTrigger) {
        let anchor = self.surface.anchor();
        if anchor.is_none() {
            log::warn!(
                "DropDown id={} opened without an anchor (surface not laid out)",
                self.id
            );
        }
        log::debug!(
            "DropDown::open id={} trigger={:?} anchor={:?}",
            self.id,
            trigger,
            anchor
        );
        self.state.anchor = anchor;
        self.state.open = true;
    }

    fn toggle(&mut self, trigger: OpenTrigger) {
        if self.state.open {
            self.close(CloseRequest::pointer());
        } else {
            self.open(trigger);
        }
    }
}
