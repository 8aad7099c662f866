//! Dropdown configuration.

use crate::error::ConfigError;
use crate::overlay::Animation;
use crate::style::Style;
use crate::widget::ChoiceItem;

/// Per-render configuration of a dropdown.
///
/// Supplied fresh by the caller whenever its inputs change and never mutated
/// by the widget.
#[derive(Debug, Clone)]
pub struct DropDownConfig<V> {
    /// Choices in display order.
    pub items: Vec<ChoiceItem<V>>,

    /// The value that is currently selected (None = nothing selected).
    pub value: Option<V>,

    /// Ignore all activation while set.
    pub disabled: bool,

    /// Let the control size itself to its content.
    /// When false, the open overlay is as wide as the control.
    pub auto_width: bool,

    /// Open the overlay once, right after the first layout pass.
    pub open_immediately: bool,

    /// Maximum height of the choice list.
    pub max_height: u16,

    /// Whether the overlay animates when it appears.
    pub animated: bool,

    /// Reveal strategy passed to the overlay.
    pub animation: Animation,

    /// Root surface overrides. A `width` here disables intrinsic sizing.
    pub style: Style,

    /// Label overrides.
    pub label_style: Style,

    /// Icon affordance overrides.
    pub icon_style: Style,

    /// Underline overrides.
    pub underline_style: Style,

    /// Overlay panel overrides. Wins over the computed panel width.
    pub menu_style: Style,

    /// Choice list overrides.
    pub list_style: Style,
}

impl<V> Default for DropDownConfig<V> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            value: None,
            disabled: false,
            auto_width: true,
            open_immediately: false,
            max_height: 500,
            animated: true,
            animation: Animation::default(),
            style: Style::default(),
            label_style: Style::default(),
            icon_style: Style::default(),
            underline_style: Style::default(),
            menu_style: Style::default(),
            list_style: Style::default(),
        }
    }
}

impl<V> DropDownConfig<V> {
    /// Create a config with the given items.
    pub fn new(items: impl IntoIterator<Item = ChoiceItem<V>>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Set the selected value.
    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    /// Mark the dropdown as disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn auto_width(mut self, auto_width: bool) -> Self {
        self.auto_width = auto_width;
        self
    }

    pub fn open_immediately(mut self, open_immediately: bool) -> Self {
        self.open_immediately = open_immediately;
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn icon_style(mut self, style: Style) -> Self {
        self.icon_style = style;
        self
    }

    pub fn underline_style(mut self, style: Style) -> Self {
        self.underline_style = style;
        self
    }

    pub fn menu_style(mut self, style: Style) -> Self {
        self.menu_style = style;
        self
    }

    pub fn list_style(mut self, style: Style) -> Self {
        self.list_style = style;
        self
    }

    /// Check for settings that can never render sensibly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `max_height` is zero or a style bag
    /// forces a zero width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_height == 0 {
            return Err(ConfigError::ZeroMaxHeight);
        }
        let bags = [
            ("root", &self.style),
            ("menu", &self.menu_style),
            ("list", &self.list_style),
        ];
        for (bag, style) in bags {
            if style.width == Some(0) {
                return Err(ConfigError::ZeroWidthOverride { bag });
            }
        }
        Ok(())
    }
}
