//! # CustomerForm Component
//!
//! Modal overlay used for both creating and editing a customer.
//!
//! The form does not own the draft. Field values and inline errors live in
//! `core::draft::FormDraft`; this component only tracks which control has
//! focus and where the text cursor is, and turns key presses into
//! `FormEvent`s that the caller maps onto core actions.
//!
//! ```text
//! ┌ Add customer ─────────────────────────────┐
//! │ Full name     Nguyen Van A                │
//! │               This field is required      │
//! │ ...                                       │
//! │ Gender        (•) Male  ( ) Female        │
//! │                                           │
//! │               [ Create ]                  │
//! └──── Tab next  Enter submit  Esc cancel ───┘
//! ```
//!
//! Leaving a text field (Tab, Shift+Tab, Up, Down, click elsewhere) emits
//! `FormEvent::Blur` for it so its error message is recomputed.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use super::text::{next_char_boundary, prev_char_boundary, truncate_to_width, visible_window};
use crate::core::customer::Gender;
use crate::core::draft::{Field, FormDraft};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const LABEL_WIDTH: u16 = 14;
/// Border plus one label/error pair per field, gender, spacer and submit.
pub const FORM_HEIGHT: u16 = 2 + 2 * Field::ALL.len() as u16 + 3;
pub const FORM_WIDTH: u16 = 64;

/// A focusable control in the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Gender,
    Submit,
}

const ORDER: [Focus; 8] = [
    Focus::Field(Field::Name),
    Focus::Field(Field::Avatar),
    Focus::Field(Field::Email),
    Focus::Field(Field::Phone),
    Focus::Field(Field::Description),
    Focus::Field(Field::Address),
    Focus::Gender,
    Focus::Submit,
];

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Edit { field: Field, value: String },
    Blur(Field),
    SetGender(Gender),
    Submit,
    Cancel,
}

/// Persistent focus and cursor state for the open form.
pub struct CustomerFormState {
    pub focus: Focus,
    /// Byte offset into the focused field's value.
    pub cursor: usize,
    rows: Vec<(Focus, Rect)>,
}

impl Default for CustomerFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerFormState {
    pub fn new() -> Self {
        Self {
            focus: ORDER[0],
            cursor: 0,
            rows: Vec::new(),
        }
    }

    /// Start over on the first field with the cursor at the end of its value.
    pub fn reset(&mut self, draft: &FormDraft) {
        self.focus = ORDER[0];
        self.cursor = end_of(self.focus, draft);
        self.rows.clear();
    }

    /// Which control is drawn at (column, row) in the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Focus> {
        self.rows
            .iter()
            .find(|(_, r)| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .map(|(focus, _)| *focus)
    }

    fn focus_on(&mut self, target: Focus, draft: &FormDraft) -> Option<FormEvent> {
        if target == self.focus {
            return None;
        }
        let leaving = self.focus;
        self.focus = target;
        self.cursor = end_of(target, draft);
        match leaving {
            Focus::Field(field) => Some(FormEvent::Blur(field)),
            _ => None,
        }
    }

    fn step_focus(&mut self, step: isize, draft: &FormDraft) -> Option<FormEvent> {
        let index = ORDER.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (index + step).rem_euclid(ORDER.len() as isize) as usize;
        self.focus_on(ORDER[next], draft)
    }

    /// Handle a terminal event against the current draft.
    pub fn handle_event(&mut self, event: &TuiEvent, draft: &FormDraft) -> Option<FormEvent> {
        match event {
            TuiEvent::Escape => return Some(FormEvent::Cancel),
            TuiEvent::Submit => return Some(FormEvent::Submit),
            TuiEvent::NextField | TuiEvent::CursorDown => return self.step_focus(1, draft),
            TuiEvent::PrevField | TuiEvent::CursorUp => return self.step_focus(-1, draft),
            TuiEvent::MouseClick(column, row) => {
                return match self.hit_test(*column, *row) {
                    Some(Focus::Submit) => Some(FormEvent::Submit),
                    Some(target) => self.focus_on(target, draft),
                    None => None,
                };
            }
            _ => {}
        }

        match self.focus {
            Focus::Field(field) => self.edit_text(field, event, draft),
            Focus::Gender => match event {
                TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::InputChar(' ') => {
                    Some(FormEvent::SetGender(draft.gender().toggled()))
                }
                _ => None,
            },
            Focus::Submit => match event {
                TuiEvent::InputChar(' ') => Some(FormEvent::Submit),
                _ => None,
            },
        }
    }

    fn edit_text(&mut self, field: Field, event: &TuiEvent, draft: &FormDraft) -> Option<FormEvent> {
        let mut value = draft.value(field).to_string();
        let mut cursor = self.cursor.min(value.len());
        if !value.is_char_boundary(cursor) {
            cursor = value.len();
        }

        let changed = match event {
            TuiEvent::InputChar(c) => {
                value.insert(cursor, *c);
                cursor += c.len_utf8();
                true
            }
            TuiEvent::Paste(text) => {
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                value.insert_str(cursor, &text);
                cursor += text.len();
                !text.is_empty()
            }
            TuiEvent::Backspace if cursor > 0 => {
                let prev = prev_char_boundary(&value, cursor);
                value.drain(prev..cursor);
                cursor = prev;
                true
            }
            TuiEvent::Delete if cursor < value.len() => {
                let next = next_char_boundary(&value, cursor);
                value.drain(cursor..next);
                true
            }
            TuiEvent::CursorLeft if cursor > 0 => {
                cursor = prev_char_boundary(&value, cursor);
                false
            }
            TuiEvent::CursorRight if cursor < value.len() => {
                cursor = next_char_boundary(&value, cursor);
                false
            }
            TuiEvent::CursorHome => {
                cursor = 0;
                false
            }
            TuiEvent::CursorEnd => {
                cursor = value.len();
                false
            }
            _ => false,
        };

        self.cursor = cursor;
        changed.then_some(FormEvent::Edit { field, value })
    }
}

fn end_of(focus: Focus, draft: &FormDraft) -> usize {
    match focus {
        Focus::Field(field) => draft.value(field).len(),
        _ => 0,
    }
}

/// Transient render wrapper for the form overlay.
pub struct CustomerForm<'a> {
    state: &'a mut CustomerFormState,
    draft: &'a FormDraft,
    editing: bool,
}

impl<'a> CustomerForm<'a> {
    pub fn new(state: &'a mut CustomerFormState, draft: &'a FormDraft, editing: bool) -> Self {
        Self {
            state,
            draft,
            editing,
        }
    }

    fn label(&self, text: &'static str, focus: Focus) -> Span<'static> {
        let style = if self.state.focus == focus {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!("{:<width$}", text, width = LABEL_WIDTH as usize), style)
    }

    fn render_field(&mut self, frame: &mut Frame, field: Field, area: Rect) {
        let [value_row, error_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let value_width = value_row.width.saturating_sub(LABEL_WIDTH) as usize;
        let focus = Focus::Field(field);
        let value = self.draft.value(field);

        let mut spans = vec![self.label(field.label(), focus)];
        if self.state.focus == focus {
            let cursor = self.state.cursor.min(value.len());
            let cursor = if value.is_char_boundary(cursor) { cursor } else { value.len() };
            let (visible, column) = visible_window(value, cursor, value_width);
            spans.push(Span::raw(visible.to_string()));
            frame.set_cursor_position((value_row.x + LABEL_WIDTH + column as u16, value_row.y));
        } else if value.is_empty() {
            spans.push(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(truncate_to_width(value, value_width)));
        }
        frame.render_widget(Line::from(spans), value_row);

        if let Some(message) = self.draft.error(field) {
            let error = Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH as usize)),
                Span::styled(message, Style::default().fg(Color::Red)),
            ]);
            frame.render_widget(error, error_row);
        }
        self.state.rows.push((focus, value_row));
    }

    fn render_gender(&mut self, frame: &mut Frame, area: Rect) {
        let gender = self.draft.gender();
        let radio = |option: Gender| {
            let mark = if gender == option { "(•)" } else { "( )" };
            format!("{} {}  ", mark, option.label())
        };
        let line = Line::from(vec![
            self.label("Gender", Focus::Gender),
            Span::raw(radio(Gender::Male)),
            Span::raw(radio(Gender::Female)),
        ]);
        frame.render_widget(line, area);
        self.state.rows.push((Focus::Gender, area));
    }

    fn render_submit(&mut self, frame: &mut Frame, area: Rect) {
        let mut style = if self.draft.is_submittable() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        if self.state.focus == Focus::Submit {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let label = if self.editing { "[ Update ]" } else { "[ Create ]" };
        let line = Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH as usize)),
            Span::styled(label, style),
        ]);
        frame.render_widget(line, area);
        self.state.rows.push((Focus::Submit, area));
    }
}

impl Component for CustomerForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.rows.clear();
        frame.render_widget(Clear, area);

        let title = if self.editing {
            " Update customer "
        } else {
            " Add customer "
        };
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_bottom(Line::from(" Tab next  Enter submit  Esc cancel ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints: Vec<Constraint> =
            Field::ALL.iter().map(|_| Constraint::Length(2)).collect();
        constraints.extend([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ]);
        let rows = Layout::vertical(constraints).split(inner);

        for (i, field) in Field::ALL.iter().enumerate() {
            self.render_field(frame, *field, rows[i]);
        }
        let n = Field::ALL.len();
        self.render_gender(frame, rows[n]);
        self.render_submit(frame, rows[n + 2]);

        if self.draft.has_errors() {
            frame.render_widget(
                Paragraph::new("Fix the highlighted fields").style(Style::default().fg(Color::Red)),
                rows[n + 3],
            );
        }
    }
}
