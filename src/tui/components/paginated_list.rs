//! Bounded-height list showing one page of items with a pager line below.
//!
//! The pager reads `|< < 1 … 9 [10] 11 … 20 > >|  Show [10] items`. Every
//! control on it is clickable, and the same operations are bound to keys.
//! All page arithmetic is delegated to [`PaginationController`].

use super::{Component, ComponentState, ListItem};
use crate::pagination::{PageLabel, PageSize, PageView, PaginationController, PaginationEvent};
use crate::tui::keys::{KeyAction, KeyMap};
use crate::tui::layout::MaxHeight;
use crate::tui::{styles::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// A clickable element of the pager line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerControl {
    First,
    Previous,
    Page(PageLabel),
    Next,
    Last,
    PageSize,
}

/// One piece of the pager line
#[derive(Debug, Clone, PartialEq)]
struct Segment {
    text: String,
    style: Style,
    control: Option<PagerControl>,
    disabled: bool,
}

impl Segment {
    fn text(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            control: None,
            disabled: false,
        }
    }

    fn control(text: impl Into<String>, style: Style, control: PagerControl, disabled: bool) -> Self {
        Self {
            text: text.into(),
            style,
            control: Some(control),
            disabled,
        }
    }
}

/// Screen area occupied by a control during the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitRegion {
    area: Rect,
    control: PagerControl,
    disabled: bool,
}

impl HitRegion {
    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

/// Paginated list component
#[derive(Debug)]
pub struct PaginatedList<T: ListItem> {
    items: Vec<T>,
    controller: PaginationController,
    max_height: MaxHeight,
    title: Option<String>,
    key_map: KeyMap,

    /// First visible row within the current page
    scroll_offset: usize,

    /// Rows available for items during the last render
    viewport_rows: usize,

    hit_regions: Vec<HitRegion>,
    state: ComponentState,
}

impl<T: ListItem> PaginatedList<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut controller = PaginationController::new();
        controller.set_item_count(items.len());

        Self {
            items,
            controller,
            max_height: MaxHeight::default(),
            title: None,
            key_map: KeyMap::default(),
            scroll_offset: 0,
            viewport_rows: 0,
            hit_regions: Vec::new(),
            state: ComponentState::new().with_focus(true),
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.controller.set_page_size(page_size.get());
        self
    }

    pub fn with_max_height(mut self, max_height: MaxHeight) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the items; the current page is kept when it still exists
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.controller.set_item_count(self.items.len());
        self.scroll_offset = 0;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    /// Register an observer for page and page-size changes
    pub fn on_pagination_event<F>(&mut self, callback: F)
    where
        F: Fn(&PaginationEvent) + Send + Sync + 'static,
    {
        self.controller.add_callback(callback);
    }

    pub fn view(&self) -> PageView<'_, T> {
        self.controller.view(&self.items)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Run the operation behind a pager control. Returns whether anything changed.
    pub fn activate(&mut self, control: PagerControl) -> bool {
        let changed = match control {
            PagerControl::First => self.controller.go_to_first(),
            PagerControl::Previous => self.controller.go_to_previous(),
            PagerControl::Page(label) => self.controller.select_page(label),
            PagerControl::Next => self.controller.go_to_next(),
            PagerControl::Last => self.controller.go_to_last(),
            PagerControl::PageSize => self.controller.cycle_page_size(true),
        };

        if changed {
            self.scroll_offset = 0;
        }
        changed
    }

    /// Handle a key press. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_map.action(&key) else {
            return false;
        };

        match action {
            KeyAction::FirstPage => {
                self.activate(PagerControl::First);
            }
            KeyAction::PreviousPage => {
                self.activate(PagerControl::Previous);
            }
            KeyAction::NextPage => {
                self.activate(PagerControl::Next);
            }
            KeyAction::LastPage => {
                self.activate(PagerControl::Last);
            }
            KeyAction::LargerPageSize => {
                self.activate(PagerControl::PageSize);
            }
            KeyAction::SmallerPageSize => {
                if self.controller.cycle_page_size(false) {
                    self.scroll_offset = 0;
                }
            }
            KeyAction::ScrollUp => self.scroll_up(),
            KeyAction::ScrollDown => self.scroll_down(),
            KeyAction::Quit | KeyAction::Help => return false,
        }
        true
    }

    /// Handle a mouse event. Returns whether the event hit the pager.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .hit_regions
                    .iter()
                    .find(|region| region.contains(event.column, event.row))
                    .copied();

                match hit {
                    Some(region) if region.disabled => true,
                    Some(region) => {
                        debug!(control = ?region.control, "Pager control clicked");
                        self.activate(region.control);
                        true
                    }
                    None => false,
                }
            }
            MouseEventKind::ScrollUp => self.activate(PagerControl::Previous),
            MouseEventKind::ScrollDown => self.activate(PagerControl::Next),
            _ => false,
        }
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        let on_page = self.view().items.len();
        let max_offset = on_page.saturating_sub(self.viewport_rows);
        self.scroll_offset = (self.scroll_offset + 1).min(max_offset);
    }
}

/// Build the pager line for a page view
fn pager_segments<T>(view: &PageView<'_, T>, theme: &Theme) -> Vec<Segment> {
    let nav = |disabled: bool| {
        if disabled {
            theme.disabled_style()
        } else {
            theme.navigation_style()
        }
    };
    let gap = || Segment::text(" ", Style::default());

    let mut segments = vec![
        Segment::control("|<", nav(view.first_disabled), PagerControl::First, view.first_disabled),
        gap(),
        Segment::control("<", nav(view.previous_disabled), PagerControl::Previous, view.previous_disabled),
        gap(),
    ];

    for label in &view.labels {
        let (text, style) = if view.is_selected(*label) {
            (format!("[{}]", label), theme.current_page_style())
        } else if label.is_ellipsis() {
            (label.to_string(), theme.disabled_style())
        } else {
            (label.to_string(), theme.page_style())
        };
        segments.push(Segment::control(
            text,
            style,
            PagerControl::Page(*label),
            view.is_label_disabled(*label),
        ));
        segments.push(gap());
    }

    segments.extend([
        Segment::control(">", nav(view.next_disabled), PagerControl::Next, view.next_disabled),
        gap(),
        Segment::control(">|", nav(view.last_disabled), PagerControl::Last, view.last_disabled),
        Segment::text("  Show ", theme.text_style()),
        Segment::control(
            format!("[{}]", view.page_size),
            theme.navigation_style(),
            PagerControl::PageSize,
            false,
        ),
        Segment::text(" items", theme.text_style()),
    ]);

    segments
}

/// Lay segments out from `area.x` and record where each control landed
fn hit_regions(segments: &[Segment], area: Rect) -> Vec<HitRegion> {
    let mut regions = Vec::new();
    let right = area.x.saturating_add(area.width);
    let mut x = area.x;

    for segment in segments {
        let width = u16::try_from(segment.text.width()).unwrap_or(u16::MAX);
        if let Some(control) = segment.control {
            let visible = width.min(right.saturating_sub(x));
            if visible > 0 {
                regions.push(HitRegion {
                    area: Rect::new(x, area.y, visible, 1),
                    control,
                    disabled: segment.disabled,
                });
            }
        }
        x = x.saturating_add(width);
    }

    regions
}

#[async_trait]
impl<T: ListItem> Component for PaginatedList<T> {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        self.handle_key(event);
        Ok(())
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        self.handle_mouse(event);
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let area = self.max_height.bound(area);
        self.state.size = area;

        let view = self.controller.view(&self.items);

        let border_style = if self.state.has_focus {
            theme.focused_border_style()
        } else {
            theme.border_style()
        };
        let title = match &self.title {
            Some(title) => format!(" {} ({}) ", title, view.summary()),
            None => format!(" {} ", view.summary()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let rows = chunks[0].height as usize;
        let offset = self.scroll_offset.min(view.items.len().saturating_sub(rows));
        let lines: Vec<Line<'static>> = view
            .items
            .iter()
            .skip(offset)
            .take(rows)
            .map(ListItem::content)
            .collect();
        frame.render_widget(Paragraph::new(lines).style(theme.text_style()), chunks[0]);

        let segments = pager_segments(&view, theme);
        let regions = hit_regions(&segments, chunks[1]);
        let spans: Vec<Span<'static>> = segments
            .into_iter()
            .map(|segment| Span::styled(segment.text, segment.style))
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);

        self.scroll_offset = offset;
        self.viewport_rows = rows;
        self.hit_regions = regions;
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        self.state.has_focus = focus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use crate::tui::layout::MIN_LIST_HEIGHT;
    use ratatui::{backend::TestBackend, Terminal};

    fn items(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("Item {:03}", i)).collect()
    }

    fn draw(list: &mut PaginatedList<String>, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| {
                let area = frame.size();
                list.render(frame, area, &theme);
            })
            .unwrap();
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol().to_string())
            .collect()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn region_of(list: &PaginatedList<String>, control: PagerControl) -> HitRegion {
        *list
            .hit_regions
            .iter()
            .find(|region| region.control == control)
            .unwrap()
    }

    #[test]
    fn test_renders_first_page_and_pager() {
        let mut list = PaginatedList::new(items(200));
        let terminal = draw(&mut list, 70, 14);

        assert!(row_text(&terminal, 0).contains("1-10 of 200"));
        assert!(row_text(&terminal, 1).contains("Item 001"));
        assert!(row_text(&terminal, 10).contains("Item 010"));
        assert!(!row_text(&terminal, 11).contains("Item 011"));

        let pager = row_text(&terminal, 12);
        assert!(pager.contains("|< < [1] 2 3 4 5 … 20 > >|"), "{pager}");
        assert!(pager.contains("Show [10] items"));
    }

    #[test]
    fn test_max_height_bounds_the_list() {
        let mut list = PaginatedList::new(items(50)).with_max_height(MaxHeight::Lines(6));
        let terminal = draw(&mut list, 60, 20);

        assert_eq!(list.size().height, 6);
        assert!(row_text(&terminal, 4).contains("|<"));
        assert!(row_text(&terminal, 3).contains("Item 003"));
        assert!(!row_text(&terminal, 8).contains("Item"));
    }

    #[test]
    fn test_tiny_percentage_still_shows_pager() {
        let mut list = PaginatedList::new(items(50)).with_max_height(MaxHeight::Percent(1));
        let terminal = draw(&mut list, 60, 20);

        assert_eq!(list.size().height, MIN_LIST_HEIGHT);
        assert!(row_text(&terminal, 1).contains("|< < [1] 2 3 4 5 > >|"));
    }

    #[test]
    fn test_hit_regions_saturate_on_oversized_text() {
        let segments = vec![
            Segment::text("x".repeat(70_000), Style::default()),
            Segment::control(">", Style::default(), PagerControl::Next, false),
        ];
        let regions = hit_regions(&segments, Rect::new(0, 0, u16::MAX, 1));
        assert!(regions.is_empty(), "{regions:?}");
    }

    #[test]
    fn test_clicking_labels_selects_pages() {
        let mut list = PaginatedList::new(items(200));
        draw(&mut list, 70, 14);

        let last = region_of(&list, PagerControl::Page(PageLabel::Number(20)));
        assert!(list.handle_mouse(click(last.area.x, last.area.y)));
        assert_eq!(list.controller().current_page(), 19);

        let terminal = draw(&mut list, 70, 14);
        let pager = row_text(&terminal, 12);
        assert!(pager.contains("1 … 16 17 18 19 [20]"), "{pager}");

        let first = region_of(&list, PagerControl::First);
        list.handle_mouse(click(first.area.x + 1, first.area.y));
        assert_eq!(list.controller().current_page(), 0);
    }

    #[test]
    fn test_disabled_controls_ignore_clicks() {
        let mut list = PaginatedList::new(items(200));
        draw(&mut list, 70, 14);

        let previous = region_of(&list, PagerControl::Previous);
        assert!(previous.disabled);
        let ellipsis = region_of(&list, PagerControl::Page(PageLabel::Ellipsis));
        assert!(ellipsis.disabled);

        list.handle_mouse(click(previous.area.x, previous.area.y));
        list.handle_mouse(click(ellipsis.area.x, ellipsis.area.y));
        assert_eq!(list.controller().current_page(), 0);
    }

    #[test]
    fn test_page_size_control_cycles() {
        let mut list = PaginatedList::new(items(95));
        draw(&mut list, 70, 14);

        let selector = region_of(&list, PagerControl::PageSize);
        list.handle_mouse(click(selector.area.x, selector.area.y));
        assert_eq!(list.controller().page_size(), PageSize::Twenty);
        assert_eq!(list.controller().total_pages(), 5);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut list = PaginatedList::new(items(95));
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert!(list.handle_key(press(KeyCode::Right)));
        assert_eq!(list.controller().current_page(), 1);
        list.handle_key(press(KeyCode::End));
        assert_eq!(list.controller().current_page(), 9);
        list.handle_key(press(KeyCode::Char('h')));
        assert_eq!(list.controller().current_page(), 8);
        list.handle_key(press(KeyCode::Home));
        assert_eq!(list.controller().current_page(), 0);

        list.handle_key(press(KeyCode::Char('s')));
        assert_eq!(list.controller().page_size(), PageSize::Twenty);
        list.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert_eq!(list.controller().page_size(), PageSize::Ten);

        assert!(!list.handle_key(press(KeyCode::Char('q'))));
        assert!(!list.handle_key(press(KeyCode::Char('z'))));
    }

    #[test]
    fn test_scrolling_within_a_page() {
        let mut list = PaginatedList::new(items(95)).with_max_height(MaxHeight::Lines(7));
        draw(&mut list, 60, 20);
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        // 4 rows for 10 items leaves room to scroll 6 rows
        for _ in 0..10 {
            list.handle_key(press(KeyCode::Down));
        }
        assert_eq!(list.scroll_offset(), 6);

        let terminal = draw(&mut list, 60, 20);
        assert!(row_text(&terminal, 1).contains("Item 007"));

        list.handle_key(press(KeyCode::Up));
        assert_eq!(list.scroll_offset(), 5);

        list.handle_key(press(KeyCode::Right));
        assert_eq!(list.scroll_offset(), 0);
    }

    #[test]
    fn test_empty_list() {
        let mut list: PaginatedList<String> = PaginatedList::new(Vec::new());
        let terminal = draw(&mut list, 60, 8);

        assert!(row_text(&terminal, 0).contains("0 of 0"));
        let pager = row_text(&terminal, 6);
        assert!(pager.contains("|< < > >|"), "{pager}");
        assert!(list.hit_regions.iter().all(|r| r.disabled || r.control == PagerControl::PageSize));
    }

    #[test]
    fn test_set_items_clamps_page() {
        let mut list = PaginatedList::new(items(95)).with_title("Demo");
        list.activate(PagerControl::Last);
        list.set_items(items(15));
        assert_eq!(list.controller().current_page(), 1);
        assert_eq!(list.view().items.len(), 5);
    }

    #[test]
    fn test_events_reach_observers() {
        use std::sync::{Arc, Mutex};

        let mut list = PaginatedList::new(items(95));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        list.on_pagination_event(move |event| sink.lock().unwrap().push(event.clone()));

        list.activate(PagerControl::Next);
        list.activate(PagerControl::Previous);
        list.activate(PagerControl::Previous);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_component_events() {
        let mut list = PaginatedList::new(items(30));
        draw(&mut list, 60, 14);

        list.handle_key_event(KeyEvent::from(KeyCode::Right)).await.unwrap();
        assert_eq!(list.controller().current_page(), 1);

        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        };
        list.handle_mouse_event(scroll).await.unwrap();
        assert_eq!(list.controller().current_page(), 2);
    }
}
