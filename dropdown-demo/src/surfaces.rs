//! Terminal implementations of the dropdown's collaborators.

use dropdown::overlay::calculate_overlay_position;
use dropdown::{Anchor, ChoiceList, ChoiceListProps, Overlay, OverlayProps, Rect, RootSurface};
use unicode_width::UnicodeWidthStr;

/// Cells reserved right of the label for the gap and the arrow.
pub const ARROW_SPACE: u16 = 2;

// =============================================================================
// Root surface
// =============================================================================

/// The one-line control: label followed by the arrow.
#[derive(Debug)]
pub struct ControlSurface {
    owner_id: String,
    x: u16,
    y: u16,
    fixed_width: u16,
    content_width: u16,
    intrinsic: bool,
    measured: bool,
}

impl ControlSurface {
    pub fn new(owner_id: impl Into<String>, x: u16, y: u16, fixed_width: u16) -> Self {
        Self {
            owner_id: owner_id.into(),
            x,
            y,
            fixed_width,
            content_width: 0,
            intrinsic: false,
            measured: false,
        }
    }

    /// Anchor owner, normally the dropdown's id.
    pub fn set_owner(&mut self, owner_id: impl Into<String>) {
        self.owner_id = owner_id.into();
    }

    /// Record the widest label. Until this runs the surface has no anchor.
    pub fn measure<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) {
        let widest = labels
            .into_iter()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0);
        self.content_width = u16::try_from(widest)
            .unwrap_or(u16::MAX)
            .saturating_add(ARROW_SPACE);
        self.measured = true;
    }

    pub fn width(&self) -> u16 {
        if self.intrinsic {
            self.content_width
        } else {
            self.fixed_width
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), 1)
    }
}

impl RootSurface for ControlSurface {
    fn anchor(&self) -> Option<Anchor> {
        self.measured
            .then(|| Anchor::new(self.owner_id.clone(), self.rect()))
    }

    fn use_intrinsic_width(&mut self) {
        log::debug!("ControlSurface::use_intrinsic_width owner={}", self.owner_id);
        self.intrinsic = true;
    }
}

// =============================================================================
// Overlay
// =============================================================================

/// Floating panel that holds the menu while the dropdown is open.
#[derive(Debug, Default)]
pub struct Panel {
    props: Option<OverlayProps>,
    area: Option<Rect>,
}

impl Panel {
    /// Position the panel for this frame. Clears the area while closed.
    pub fn layout(&mut self, screen: Rect, content_size: (u16, u16)) {
        self.area = self
            .props
            .as_ref()
            .filter(|props| props.open)
            .and_then(|props| props.anchor.as_ref().map(|a| (props.origin, a.rect)))
            .map(|(origin, anchor)| calculate_overlay_position(screen, anchor, content_size, origin));
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }
}

impl Overlay for Panel {
    fn present(&mut self, props: &OverlayProps) {
        let was_open = self.props.as_ref().is_some_and(|p| p.open);
        if props.open && !was_open {
            log::debug!(
                "Panel opening animated={} animation={:?}",
                props.animated,
                props.animation
            );
        }
        self.props = Some(props.clone());
    }
}

// =============================================================================
// Choice list
// =============================================================================

/// One rendered menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub selected: bool,
    pub disabled: bool,
}

/// Menu rows with a keyboard cursor.
#[derive(Debug, Default)]
pub struct MenuList {
    rows: Vec<Row>,
    cursor: usize,
    scroll: usize,
    max_height: u16,
    width: Option<u16>,
    fresh: bool,
}

impl MenuList {
    pub fn new() -> Self {
        Self {
            fresh: true,
            ..Default::default()
        }
    }

    /// Forget rows and cursor once the overlay has closed.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.cursor = 0;
        self.scroll = 0;
        self.fresh = true;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// (width, height) the menu wants.
    pub fn content_size(&self) -> (u16, u16) {
        let natural = self
            .rows
            .iter()
            .map(|row| UnicodeWidthStr::width(row.text.as_str()))
            .max()
            .unwrap_or(0);
        let natural = u16::try_from(natural).unwrap_or(u16::MAX).saturating_add(2);
        let height = u16::try_from(self.rows.len()).unwrap_or(u16::MAX);
        (self.width.unwrap_or(natural), height.min(self.max_height))
    }

    /// Rows currently scrolled into view, with their item index.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        let (_, height) = self.content_size();
        self.rows
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(usize::from(height))
    }

    /// Item index of the enabled row under the cursor.
    pub fn cursor_item(&self) -> Option<usize> {
        self.rows
            .get(self.cursor)
            .filter(|row| !row.disabled)
            .map(|_| self.cursor)
    }

    /// Item index of the enabled row at `offset` rows below the panel top.
    pub fn index_at(&self, offset: u16) -> Option<usize> {
        let index = self.scroll + usize::from(offset);
        self.rows
            .get(index)
            .filter(|row| !row.disabled)
            .map(|_| index)
    }

    pub fn cursor_up(&mut self) {
        if let Some(i) = (0..self.cursor).rev().find(|&i| !self.rows[i].disabled) {
            self.set_cursor(i);
        }
    }

    pub fn cursor_down(&mut self) {
        if let Some(i) = (self.cursor + 1..self.rows.len()).find(|&i| !self.rows[i].disabled) {
            self.set_cursor(i);
        }
    }

    pub fn cursor_home(&mut self) {
        if let Some(i) = self.first_enabled() {
            self.set_cursor(i);
        }
    }

    pub fn cursor_end(&mut self) {
        if let Some(i) = (0..self.rows.len()).rev().find(|&i| !self.rows[i].disabled) {
            self.set_cursor(i);
        }
    }

    fn first_enabled(&self) -> Option<usize> {
        self.rows.iter().position(|row| !row.disabled)
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        let height = usize::from(self.content_size().1.max(1));
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
    }
}

impl<V: PartialEq> ChoiceList<V> for MenuList {
    fn present(&mut self, props: &ChoiceListProps<'_, V>) {
        self.rows = props
            .items
            .iter()
            .map(|item| Row {
                text: item.list_text().to_string(),
                selected: props.value == Some(&item.value),
                disabled: item.disabled,
            })
            .collect();
        self.max_height = props.max_height;
        self.width = props.style.width;

        // Start on the selected row each time the menu opens
        if std::mem::take(&mut self.fresh) {
            let start = self
                .rows
                .iter()
                .position(|row| row.selected && !row.disabled)
                .or_else(|| self.first_enabled())
                .unwrap_or(0);
            self.scroll = 0;
            self.set_cursor(start);
        }
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use dropdown::{AnchorOrigin, Animation, ChoiceItem, Style};

    use super::*;

    fn items() -> Vec<ChoiceItem<u32>> {
        vec![
            ChoiceItem::new(1, "Never"),
            ChoiceItem::new(2, "Every Night"),
            ChoiceItem::new(3, "Weeknights").disabled(),
            ChoiceItem::new(4, "Weekends"),
        ]
    }

    fn present(list: &mut MenuList, items: &[ChoiceItem<u32>], value: Option<&u32>, max_height: u16) {
        list.present(&ChoiceListProps {
            items,
            value,
            max_height,
            style: Style::new(),
            list_style: Style::new(),
            desktop: true,
        });
    }

    #[test]
    fn test_surface_has_no_anchor_until_measured() {
        let mut surface = ControlSurface::new("freq", 2, 3, 20);
        assert!(surface.anchor().is_none());

        surface.measure(["One", "Three"]);

        assert_eq!(surface.anchor(), Some(Anchor::new("freq", Rect::new(2, 3, 20, 1))));
    }

    #[test]
    fn test_surface_intrinsic_width_follows_content() {
        let mut surface = ControlSurface::new("freq", 0, 0, 20);
        surface.measure(["Every Night", "Never"]);
        surface.use_intrinsic_width();
        assert_eq!(surface.width(), 11 + ARROW_SPACE);
    }

    #[test]
    fn test_panel_area_only_while_open() {
        let mut panel = Panel::default();
        let mut props = OverlayProps {
            anchor: Some(Anchor::new("freq", Rect::new(4, 2, 10, 1))),
            open: true,
            animated: true,
            animation: Animation::Vertical,
            origin: AnchorOrigin::TOP_LEFT,
        };
        panel.present(&props);
        panel.layout(Rect::from_size(80, 24), (12, 3));
        assert_eq!(panel.area(), Some(Rect::new(4, 2, 12, 3)));

        props.open = false;
        panel.present(&props);
        panel.layout(Rect::from_size(80, 24), (12, 3));
        assert_eq!(panel.area(), None);
    }

    #[test]
    fn test_menu_starts_on_selected_row() {
        let mut list = MenuList::new();
        present(&mut list, &items(), Some(&4), 10);
        assert_eq!(list.cursor(), 3);
        assert_eq!(list.cursor_item(), Some(3));
    }

    #[test]
    fn test_menu_cursor_skips_disabled() {
        let mut list = MenuList::new();
        present(&mut list, &items(), Some(&2), 10);

        list.cursor_down();
        assert_eq!(list.cursor(), 3);
        list.cursor_up();
        assert_eq!(list.cursor(), 1);
        list.cursor_home();
        assert_eq!(list.cursor(), 0);
        list.cursor_end();
        assert_eq!(list.cursor(), 3);
    }

    #[test]
    fn test_menu_hit_testing_skips_disabled() {
        let mut list = MenuList::new();
        present(&mut list, &items(), None, 10);
        assert_eq!(list.index_at(1), Some(1));
        assert_eq!(list.index_at(2), None);
        assert_eq!(list.index_at(9), None);
    }

    #[test]
    fn test_menu_scrolls_to_cursor() {
        let mut list = MenuList::new();
        present(&mut list, &items(), Some(&4), 2);
        assert_eq!(list.content_size().1, 2);

        let visible: Vec<usize> = list.visible_rows().map(|(i, _)| i).collect();
        assert_eq!(visible, vec![2, 3]);
        assert_eq!(list.index_at(1), Some(3));
    }

    #[test]
    fn test_menu_width_from_style() {
        let mut list = MenuList::new();
        let items = items();
        list.present(&ChoiceListProps {
            items: &items,
            value: None,
            max_height: 10,
            style: Style::new().width(30),
            list_style: Style::new(),
            desktop: true,
        });
        assert_eq!(list.content_size(), (30, 4));
    }

    #[test]
    fn test_menu_reset_reselects_on_next_open() {
        let mut list = MenuList::new();
        let items = items();
        present(&mut list, &items, Some(&1), 10);
        list.cursor_end();

        list.reset();
        present(&mut list, &items, Some(&2), 10);

        assert_eq!(list.cursor(), 1);
    }
}
