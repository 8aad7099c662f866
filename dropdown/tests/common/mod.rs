//! Recording fakes shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use dropdown::prelude::*;

/// Something a collaborator or the change handler was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Change { index: usize, value: i32 },
    Focus,
    KeyboardFocus(bool),
    IntrinsicWidth,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Root surface with a settable rectangle.
#[derive(Debug)]
pub struct FakeSurface {
    pub owner: String,
    pub rect: Option<Rect>,
    pub log: CallLog,
}

impl FakeSurface {
    pub fn new(log: &CallLog, rect: Option<Rect>) -> Self {
        Self {
            owner: "control".to_string(),
            rect,
            log: Rc::clone(log),
        }
    }
}

impl RootSurface for FakeSurface {
    fn anchor(&self) -> Option<Anchor> {
        self.rect.map(|rect| Anchor::new(self.owner.clone(), rect))
    }

    fn use_intrinsic_width(&mut self) {
        self.log.borrow_mut().push(Call::IntrinsicWidth);
    }
}

/// Icon affordance that records focus hand-offs.
#[derive(Debug)]
pub struct FakeIcon {
    pub log: CallLog,
}

impl FakeIcon {
    pub fn new(log: &CallLog) -> Self {
        Self { log: Rc::clone(log) }
    }
}

impl IconAffordance for FakeIcon {
    fn focus(&mut self) {
        self.log.borrow_mut().push(Call::Focus);
    }

    fn set_keyboard_focus(&mut self, enabled: bool) {
        self.log.borrow_mut().push(Call::KeyboardFocus(enabled));
    }
}

pub type TestDropDown = DropDown<i32, FakeSurface, FakeIcon>;

pub const ROOT: Rect = Rect::new(4, 2, 240, 1);

pub fn items() -> Vec<ChoiceItem<i32>> {
    vec![
        ChoiceItem::new(1, "One"),
        ChoiceItem::new(2, "Two"),
        ChoiceItem::new(3, "Three"),
    ]
}

/// A mounted dropdown over `items()` with a change handler writing to the log.
pub fn dropdown(config: DropDownConfig<i32>) -> (TestDropDown, CallLog) {
    let log = call_log();
    let handler_log = Rc::clone(&log);
    let mut dd = DropDown::new(
        config,
        FakeSurface::new(&log, Some(ROOT)),
        FakeIcon::new(&log),
    )
    .on_change(move |_event, index, value| {
        handler_log.borrow_mut().push(Call::Change {
            index,
            value: *value,
        });
    });
    dd.mount();
    log.borrow_mut().clear();
    (dd, log)
}

/// Calls recorded so far, excluding width instructions.
pub fn focus_calls(log: &CallLog) -> Vec<Call> {
    log.borrow()
        .iter()
        .filter(|c| !matches!(c, Call::IntrinsicWidth))
        .cloned()
        .collect()
}
