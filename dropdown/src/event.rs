/// High-level input events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer activation (mouse click or tap)
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Key press without modifiers and without a target.
    pub fn key(key: Key) -> Self {
        Event::Key {
            target: None,
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Left click at a position without a target.
    pub fn click(x: u16, y: u16) -> Self {
        Event::Click {
            target: None,
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// The element this event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => target.as_deref(),
            Event::Focus { target } | Event::Blur { target } => Some(target),
            Event::Resize { .. } => None,
        }
    }
}

/// Input modality an event originated from.
///
/// Decides whether focus is handed back to the icon affordance when the
/// overlay closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provenance {
    Keyboard,
    #[default]
    Pointer,
}

impl Provenance {
    /// Derive the modality from the triggering event.
    pub fn of(event: &Event) -> Self {
        match event {
            Event::Key { .. } | Event::Focus { .. } | Event::Blur { .. } => Provenance::Keyboard,
            Event::Click { .. } | Event::Resize { .. } => Provenance::Pointer,
        }
    }

    pub fn is_keyboard(self) -> bool {
        self == Provenance::Keyboard
    }
}

/// Keys the dropdown and its host route. Anything else never reaches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Home,
    End,
}

impl Key {
    pub const SPACE: Key = Key::Char(' ');

    /// Map a crossterm key code, or `None` for keys nothing here routes
    /// (function, media and bare modifier keys and the like).
    pub fn from_code(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => return None,
        };
        Some(key)
    }
}

/// Modifier keys held during a key press. Only Ctrl and Alt change routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::new()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::new()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::new()
        }
    }

    /// Ctrl or Alt chords are shortcuts, never plain navigation.
    pub fn is_chord(&self) -> bool {
        self.ctrl || self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Whether a handler swallowed an event or lets it bubble to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, stop propagation
    Consumed,
    /// Event was not handled, continue propagation
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
