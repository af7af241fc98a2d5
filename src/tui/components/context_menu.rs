//! # ContextMenu Component
//!
//! Small popup anchored under a table row offering Edit and Delete for that
//! customer. Keys: `e` edit, `d` delete, Up/Down + Enter pick, Esc closes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, List, ListItem, ListState};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const ITEMS: [(MenuEvent, &str); 2] = [(MenuEvent::Edit, "Edit    e"), (MenuEvent::Delete, "Delete  d")];
const MENU_WIDTH: u16 = 16;
const MENU_HEIGHT: u16 = ITEMS.len() as u16 + 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    Edit,
    Delete,
    Close,
}

#[derive(Default)]
pub struct ContextMenuState {
    pub highlighted: usize,
    /// Set when the last frame had no visible row to anchor the menu to.
    pub hidden: bool,
    last_area: Rect,
}

impl ContextMenuState {
    pub fn reset(&mut self) {
        self.highlighted = 0;
        self.hidden = false;
    }

    /// Item under a click, if the click landed inside the menu.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<MenuEvent> {
        let inner = Block::bordered().inner(self.last_area);
        if column < inner.x
            || column >= inner.x + inner.width
            || row < inner.y
            || row >= inner.y + inner.height
        {
            return None;
        }
        ITEMS.get((row - inner.y) as usize).map(|(event, _)| *event)
    }

    /// Whether a click landed anywhere on the menu, border included.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let area = self.last_area;
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}

impl EventHandler for ContextMenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::InputChar('e') => Some(MenuEvent::Edit),
            TuiEvent::InputChar('d') => Some(MenuEvent::Delete),
            TuiEvent::Escape | TuiEvent::InputChar('m') | TuiEvent::CursorLeft => {
                Some(MenuEvent::Close)
            }
            TuiEvent::CursorUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.highlighted = (self.highlighted + 1).min(ITEMS.len() - 1);
                None
            }
            TuiEvent::Submit => ITEMS.get(self.highlighted).map(|(event, _)| *event),
            TuiEvent::MouseClick(column, row) => {
                if self.contains(*column, *row) {
                    self.hit_test(*column, *row)
                } else {
                    Some(MenuEvent::Close)
                }
            }
            _ => None,
        }
    }
}

/// Where the menu goes: just below `anchor` (a table row), flipped above it
/// when there is no room, and clamped inside `bounds`.
pub fn menu_area(anchor: Rect, bounds: Rect) -> Rect {
    let width = MENU_WIDTH.min(bounds.width);
    let height = MENU_HEIGHT.min(bounds.height);
    let x = (anchor.x + anchor.width / 4).min(bounds.right().saturating_sub(width));
    let below = anchor.bottom();
    let y = if below + height <= bounds.bottom() {
        below
    } else {
        anchor.y.saturating_sub(height).max(bounds.y)
    };
    Rect {
        x,
        y,
        width,
        height,
    }
}

pub struct ContextMenu<'a> {
    state: &'a mut ContextMenuState,
}

impl<'a> ContextMenu<'a> {
    pub fn new(state: &'a mut ContextMenuState) -> Self {
        Self { state }
    }
}

impl Component for ContextMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.last_area = area;

        let items: Vec<ListItem> = ITEMS
            .iter()
            .map(|(event, label)| {
                let style = match event {
                    MenuEvent::Delete => Style::default().fg(Color::Red),
                    _ => Style::default(),
                };
                ListItem::new(Line::from(*label)).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().border_style(Style::default().fg(Color::Yellow)))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut list_state = ListState::default().with_selected(Some(self.state.highlighted));
        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
