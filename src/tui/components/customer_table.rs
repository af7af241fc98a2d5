//! # Customer Table Component
//!
//! The main list: one row per customer in store order.
//!
//! Two different "current row" notions exist here:
//! - the **cursor** (TUI-local, moved with Up/Down, drawn reversed)
//! - the **selected** customer (core state, marked with `●`)
//!
//! Enter on the cursor row selects it; `m` opens its context menu. Both are
//! turned into core actions by the caller.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CustomerTableState` lives in `TuiState`
//! - `CustomerTable` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::core::customer::{Customer, CustomerId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const EMPTY_LIST_MESSAGE: &str = "Customer list is empty!";

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const HEADER_HEIGHT: u16 = 1;

/// Events emitted by the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    Select(usize),
    ToggleMenu(usize),
    Create,
    Quit,
}

/// Persistent state for the customer table.
pub struct CustomerTableState {
    pub cursor: usize,
    /// Number of rows currently shown; synced from the store every frame.
    pub row_count: usize,
    table_state: TableState,
    last_area: Rect,
}

impl Default for CustomerTableState {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerTableState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            row_count: 0,
            table_state: TableState::default(),
            last_area: Rect::default(),
        }
    }

    /// Update the row count, keeping the cursor on a valid row.
    pub fn sync_rows(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }

    /// Move the cursor onto a specific row (e.g. the selected customer).
    pub fn focus(&mut self, index: usize) {
        if index < self.row_count {
            self.cursor = index;
        }
    }

    fn body_area(&self) -> Rect {
        let inner = Block::bordered().inner(self.last_area);
        Rect {
            y: inner.y + HEADER_HEIGHT,
            height: inner.height.saturating_sub(HEADER_HEIGHT),
            ..inner
        }
    }

    /// Screen area of row `index` from the last render, if it is visible.
    pub fn row_area(&self, index: usize) -> Option<Rect> {
        let body = self.body_area();
        let offset = self.table_state.offset();
        if index < offset || index >= self.row_count {
            return None;
        }
        let line = (index - offset) as u16;
        (line < body.height).then(|| Rect {
            y: body.y + line,
            height: 1,
            ..body
        })
    }

    /// Which row (if any) is drawn at screen position (column, row).
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let body = self.body_area();
        if column < body.x
            || column >= body.x + body.width
            || row < body.y
            || row >= body.y + body.height
        {
            return None;
        }
        let index = self.table_state.offset() + (row - body.y) as usize;
        (index < self.row_count).then_some(index)
    }
}

impl EventHandler for CustomerTableState {
    type Event = TableEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TableEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.row_count > 0 {
                    self.cursor = (self.cursor + 1).min(self.row_count - 1);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.row_count.saturating_sub(1);
                None
            }
            TuiEvent::Submit if self.row_count > 0 => Some(TableEvent::Select(self.cursor)),
            TuiEvent::InputChar('m') | TuiEvent::CursorRight if self.row_count > 0 => {
                Some(TableEvent::ToggleMenu(self.cursor))
            }
            TuiEvent::InputChar('a') => Some(TableEvent::Create),
            TuiEvent::InputChar('q') => Some(TableEvent::Quit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the customer table.
pub struct CustomerTable<'a> {
    state: &'a mut CustomerTableState,
    customers: &'a [Customer],
    selected: Option<&'a CustomerId>,
    is_loading: bool,
    spinner_frame: usize,
}

impl<'a> CustomerTable<'a> {
    pub fn new(
        state: &'a mut CustomerTableState,
        customers: &'a [Customer],
        selected: Option<&'a CustomerId>,
        is_loading: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            customers,
            selected,
            is_loading,
            spinner_frame,
        }
    }
}

impl Component for CustomerTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.last_area = area;
        self.state.sync_rows(self.customers.len());

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Customer List ")
            .title_bottom(Line::from(" ↑↓ Move  Enter Profile  m Menu  a Add  q Quit ").centered());

        if self.is_loading {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            let loading = Paragraph::new(format!("{spinner} Loading customers..."))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(loading, area);
            return;
        }

        if self.customers.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["Name", "Email", "Phone number", "Gender"])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
            .height(HEADER_HEIGHT);

        let rows: Vec<Row> = self
            .customers
            .iter()
            .map(|customer| {
                let is_selected = self.selected == Some(&customer.id);
                let marker = if is_selected { "● " } else { "  " };
                let style = if is_selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(format!("{marker}{}", customer.fields.name)),
                    Cell::from(customer.fields.email.as_str()),
                    Cell::from(customer.fields.phone_number.as_str()),
                    Cell::from(customer.fields.gender.label()),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(35),
                Constraint::Percentage(20),
                Constraint::Percentage(15),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        self.state.table_state.select(Some(self.state.cursor));
        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, customer};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(
        state: &mut CustomerTableState,
        customers: &[Customer],
        selected: Option<&CustomerId>,
        is_loading: bool,
    ) -> String {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                CustomerTable::new(state, customers, selected, is_loading, 0).render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = CustomerTableState::new();
        state.sync_rows(2);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.cursor, 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.cursor, 1);

        state.sync_rows(1);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_key_events() {
        let mut state = CustomerTableState::new();
        state.sync_rows(3);
        state.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(TableEvent::Select(2))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('m')),
            Some(TableEvent::ToggleMenu(2))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('a')),
            Some(TableEvent::Create)
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('q')),
            Some(TableEvent::Quit)
        );
    }

    #[test]
    fn test_empty_table_ignores_select() {
        let mut state = CustomerTableState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('m')), None);
    }

    #[test]
    fn test_render_rows_and_selection_marker() {
        let customers = vec![customer("1", "Ana"), customer("2", "Bao")];
        let mut state = CustomerTableState::new();
        let selected = CustomerId::new("2");
        let text = draw(&mut state, &customers, Some(&selected), false);

        assert!(text.contains("Customer List"));
        assert!(text.contains("Ana"));
        assert!(text.contains("● Bao"));
        assert!(text.contains("ana@example.com"));
        assert!(text.contains("Female"));
    }

    #[test]
    fn test_render_loading_and_empty() {
        let mut state = CustomerTableState::new();
        assert!(draw(&mut state, &[], None, true).contains("Loading customers..."));
        assert!(draw(&mut state, &[], None, false).contains(EMPTY_LIST_MESSAGE));
    }

    #[test]
    fn test_hit_test_and_row_area_after_render() {
        let customers = vec![customer("1", "Ana"), customer("2", "Bao")];
        let mut state = CustomerTableState::new();
        draw(&mut state, &customers, None, false);

        // Border at y=0, header at y=1, first row at y=2
        assert_eq!(state.hit_test(5, 2), Some(0));
        assert_eq!(state.hit_test(5, 3), Some(1));
        assert_eq!(state.hit_test(5, 4), None);
        assert_eq!(state.hit_test(5, 1), None);
        assert_eq!(state.row_area(1).map(|r| r.y), Some(3));
        assert_eq!(state.row_area(5), None);
    }
}
