//! Terminal demo: a controlled notification-frequency dropdown.
//!
//! Tab moves focus between the arrow and the quit button. Down or Space on
//! the arrow opens the menu, Escape closes it and hands focus back to the
//! arrow. Clicking outside the open menu closes it without doing so.

mod error;
mod focus;
mod surfaces;
mod terminal;

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use crossterm::event::{Event as CtEvent, EventStream, KeyEventKind, MouseEventKind};
use dropdown::prelude::*;
use dropdown::{MouseButton, resolve_label};
use futures::StreamExt;
use log::{debug, error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use unicode_width::UnicodeWidthChar;

use error::DemoError;
use focus::{ArrowIcon, FocusId, FocusState};
use surfaces::{ARROW_SPACE, ControlSurface, MenuList, Panel};
use terminal::{Attrs, TerminalGuard};

const ARROW: &str = "arrow";
const QUIT: &str = "quit";
const MENU: &str = "menu";

const CONTROL_X: u16 = 2;
const CONTROL_Y: u16 = 2;
const CONTROL_WIDTH: u16 = 24;
const QUIT_LABEL: &str = "[ Quit ]";

type Frequency = DropDown<u32, ControlSurface, ArrowIcon>;

fn frequency_config() -> DropDownConfig<u32> {
    DropDownConfig::new([
        ChoiceItem::new(1, "Never"),
        ChoiceItem::new(2, "Every Night"),
        ChoiceItem::new(3, "Weeknights"),
        ChoiceItem::new(4, "Weekends").disabled(),
        ChoiceItem::new(5, "Weekly"),
        ChoiceItem::new(6, "").primary_text("Monthly"),
    ])
    .value(2)
    .auto_width(false)
    .open_immediately(true)
    .max_height(5)
    .underline_style(Style::new().dim())
}

struct Demo {
    dropdown: Frequency,
    focus: Rc<RefCell<FocusState>>,
    panel: Panel,
    list: MenuList,
    picked: Rc<RefCell<Option<(usize, u32)>>>,
    status: String,
    quit: bool,
}

impl Demo {
    fn new(config: DropDownConfig<u32>) -> Self {
        let focus = Rc::new(RefCell::new(FocusState::new([
            FocusId::from(ARROW),
            FocusId::from(QUIT),
        ])));
        let picked = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&picked);
        let mut dropdown = DropDown::new(
            config,
            ControlSurface::new("frequency", CONTROL_X, CONTROL_Y, CONTROL_WIDTH),
            ArrowIcon::new(ARROW, Rc::clone(&focus)),
        )
        .on_change(move |event: &Event, index: usize, value: &u32| {
            info!(
                "Picked index={} value={} via {:?}",
                index,
                value,
                Provenance::of(event)
            );
            *sink.borrow_mut() = Some((index, *value));
        });
        let owner = dropdown.id_string();
        dropdown.surface_mut().set_owner(owner);

        Self {
            dropdown,
            focus,
            panel: Panel::default(),
            list: MenuList::new(),
            picked,
            status: String::from("Nothing picked yet"),
            quit: false,
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    fn handle(&mut self, raw: CtEvent) {
        match raw {
            CtEvent::Key(key) if key.kind == KeyEventKind::Press => match Key::from_code(key.code) {
                Some(code) => self.handle_key(code, key.modifiers.into()),
                None => debug!("Unrouted key {:?}", key.code),
            },
            CtEvent::Mouse(mouse) => {
                if let MouseEventKind::Down(button) = mouse.kind {
                    self.handle_click(mouse.column, mouse.row, button.into());
                }
            }
            CtEvent::Resize(width, height) => {
                self.dropdown.handle_event(&Event::Resize { width, height });
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        if modifiers.ctrl && key == Key::Char('c') {
            self.quit = true;
            return;
        }

        if self.dropdown.is_open() {
            self.handle_menu_key(key, modifiers);
            return;
        }

        match key {
            Key::Tab => self.move_focus(true),
            Key::BackTab => self.move_focus(false),
            Key::Char('q') => self.quit = true,
            Key::Enter | Key::SPACE if self.focus.borrow().is_focused(QUIT) => self.quit = true,
            _ => {
                if self.focus.borrow().is_focused(ARROW) {
                    let event = Event::Key {
                        target: Some(ARROW.into()),
                        key,
                        modifiers,
                    };
                    self.dropdown.handle_event(&event);
                }
            }
        }
    }

    fn handle_menu_key(&mut self, key: Key, modifiers: Modifiers) {
        let event = Event::Key {
            target: Some(MENU.into()),
            key,
            modifiers,
        };
        match key {
            Key::Up => self.list.cursor_up(),
            Key::Down => self.list.cursor_down(),
            Key::Home => self.list.cursor_home(),
            Key::End => self.list.cursor_end(),
            Key::Enter | Key::SPACE => {
                if let Some(index) = self.list.cursor_item() {
                    self.dropdown.on_item_activated(&event, index);
                }
            }
            _ => {
                self.dropdown.handle_list_key(&event);
            }
        }
    }

    fn handle_click(&mut self, x: u16, y: u16, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        if self.dropdown.is_open() {
            match self.panel.area() {
                Some(area) if area.contains(x, y) => {
                    if let Some(index) = self.list.index_at(y - area.y) {
                        let event = Event::Click {
                            target: Some(MENU.into()),
                            x,
                            y,
                            button,
                        };
                        self.dropdown.on_item_activated(&event, index);
                    }
                }
                _ => self.dropdown.on_close_requested(),
            }
            return;
        }

        if self.dropdown.surface().rect().contains(x, y) {
            {
                let mut focus = self.focus.borrow_mut();
                focus.set_focus(ARROW);
                focus.set_keyboard_focus(false);
            }
            let event = Event::Click {
                target: Some(ARROW.into()),
                x,
                y,
                button,
            };
            self.dropdown.handle_event(&event);
        } else if quit_rect().contains(x, y) {
            self.quit = true;
        } else {
            self.focus.borrow_mut().clear_focus();
        }
    }

    /// Tab through the focus order, skipping the arrow while it is not focusable.
    fn move_focus(&mut self, forward: bool) {
        let focusable = self.dropdown.view().icon_focusable;
        for _ in 0..2 {
            let moved = {
                let mut focus = self.focus.borrow_mut();
                if forward {
                    focus.focus_next()
                } else {
                    focus.focus_prev()
                }
            };
            let Some((old, new)) = moved else {
                return;
            };

            if let Some(old) = old.filter(|old| old.0 == ARROW) {
                self.dropdown.handle_event(&Event::Blur { target: old.0 });
            }
            if new.0 != ARROW {
                return;
            }
            if focusable {
                self.dropdown.handle_event(&Event::Focus { target: new.0 });
                return;
            }
        }
    }

    /// Feed a picked value back in as the new config value.
    fn apply_pick(&mut self) {
        let picked = self.picked.borrow_mut().take();
        if let Some((index, value)) = picked {
            let config = self.dropdown.config().clone().value(value);
            let label = resolve_label(&config.items, config.value.as_ref()).to_string();
            self.status = format!("Picked #{} {:?} (value {})", index, label, value);
            self.dropdown.set_config(config);
        }
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    fn draw(&mut self, term: &mut TerminalGuard) -> std::io::Result<()> {
        let screen = term.area()?;

        // Layout pass: measuring the control gives the dropdown an anchor
        let labels: Vec<String> = self
            .dropdown
            .config()
            .items
            .iter()
            .map(|item| item.display_label().to_string())
            .collect();
        self.dropdown
            .surface_mut()
            .measure(labels.iter().map(String::as_str));

        self.dropdown.render(&mut self.panel, &mut self.list);
        if !self.dropdown.is_open() {
            self.list.reset();
        }
        self.panel.layout(screen, self.list.content_size());

        term.clear()?;
        term.print(
            CONTROL_X,
            0,
            "Notification frequency",
            Attrs {
                bold: true,
                ..Attrs::default()
            },
        )?;

        let view = self.dropdown.view();
        let focus = self.focus.borrow();
        let rect = self.dropdown.surface().rect();
        let label_width = rect.width.saturating_sub(ARROW_SPACE);

        let label = if view.label_style.is_hidden() {
            fit("", label_width)
        } else {
            fit(view.label, label_width)
        };
        let mut label_attrs = style_attrs(&view.label_style);
        label_attrs.dim |= view.disabled;
        term.print(rect.x, rect.y, &label, label_attrs)?;

        let mut arrow_attrs = style_attrs(&view.icon_style);
        arrow_attrs.dim |= view.disabled;
        arrow_attrs.reverse = focus.has_keyboard_focus(self.dropdown.icon().id());
        term.print(rect.right().saturating_sub(1), rect.y, "▼", arrow_attrs)?;

        let underline = "─".repeat(usize::from(rect.width));
        term.print(rect.x, rect.y + 1, &underline, style_attrs(&view.underline_style))?;

        let quit = quit_rect();
        term.print(
            quit.x,
            quit.y,
            QUIT_LABEL,
            Attrs {
                reverse: focus.has_keyboard_focus(QUIT),
                ..Attrs::default()
            },
        )?;

        if let Some(area) = self.panel.area() {
            let base = style_attrs(&view.list.style.merge(&view.list.list_style));
            for (offset, (index, row)) in (0u16..).zip(self.list.visible_rows()) {
                let attrs = Attrs {
                    bold: base.bold || row.selected,
                    dim: base.dim || row.disabled,
                    reverse: index == self.list.cursor(),
                };
                term.print(area.x, area.y + offset, &fit(&row.text, area.width), attrs)?;
            }
        }

        let focused = focus_label(&focus);
        term.print(
            CONTROL_X,
            screen.bottom().saturating_sub(1),
            &format!("{} | focus: {}", self.status, focused),
            Attrs {
                dim: true,
                ..Attrs::default()
            },
        )?;

        term.flush()
    }
}

fn quit_rect() -> Rect {
    Rect::new(CONTROL_X, CONTROL_Y + 3, QUIT_LABEL.len() as u16, 1)
}

/// Name of the focused element for the status line.
fn focus_label(focus: &FocusState) -> &str {
    focus.current().map_or("nothing", |id| id.0.as_str())
}

fn style_attrs(style: &Style) -> Attrs {
    Attrs {
        bold: style.bold.unwrap_or(false),
        dim: style.dim.unwrap_or(false),
        reverse: false,
    }
}

/// Truncate or pad `text` to exactly `width` cells.
fn fit(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    let log_file = File::create("dropdown-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let config = frequency_config();
    config.validate()?;

    let mut term = TerminalGuard::new()?;
    let mut demo = Demo::new(config);
    demo.dropdown.mount();
    demo.draw(&mut term)?;

    // The first frame has been laid out; deferred work may now run
    tokio::task::yield_now().await;
    if demo.dropdown.run_deferred() {
        demo.draw(&mut term)?;
    }

    let mut events = EventStream::new();
    while let Some(event) = events.next().await {
        match event {
            Ok(raw) => demo.handle(raw),
            Err(e) => {
                error!("Event stream error: {}", e);
                continue;
            }
        }
        if demo.quit {
            debug!("Quit requested");
            break;
        }
        demo.apply_pick();
        demo.draw(&mut term)?;
    }

    Ok(())
}
