//! # ConfirmPopup Component
//!
//! Yes/No question shown before a customer is deleted.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const DELETE_QUESTION: &str = "Are you sure to delete customer?";
pub const POPUP_WIDTH: u16 = 44;
pub const POPUP_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfirmEvent {
    Confirm,
    Cancel,
}

/// Key handling for the popup. Holds no state between frames.
pub struct ConfirmPopupState;

impl EventHandler for ConfirmPopupState {
    type Event = ConfirmEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ConfirmEvent> {
        match event {
            TuiEvent::InputChar('y' | 'Y') | TuiEvent::Submit => Some(ConfirmEvent::Confirm),
            TuiEvent::InputChar('n' | 'N') | TuiEvent::Escape => Some(ConfirmEvent::Cancel),
            _ => None,
        }
    }
}

pub struct ConfirmPopup<'a> {
    pub question: &'a str,
    /// Customer being deleted, shown under the question.
    pub subject: Option<&'a str>,
}

impl<'a> ConfirmPopup<'a> {
    pub fn new(question: &'a str, subject: Option<&'a str>) -> Self {
        Self { question, subject }
    }
}

impl Component for ConfirmPopup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(self.question)];
        if let Some(subject) = self.subject {
            lines.push(Line::from(Span::styled(
                subject,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::Gray)),
        ]));

        let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::Red))
                .title(" Delete customer "),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_confirm_keys() {
        let mut state = ConfirmPopupState;
        assert_eq!(state.handle_event(&TuiEvent::InputChar('y')), Some(ConfirmEvent::Confirm));
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ConfirmEvent::Confirm));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('n')), Some(ConfirmEvent::Cancel));
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(ConfirmEvent::Cancel));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('q')), None);
    }

    #[test]
    fn test_render_question() {
        let backend = TestBackend::new(POPUP_WIDTH, POPUP_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ConfirmPopup::new(DELETE_QUESTION, Some("Ana")).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(DELETE_QUESTION));
        assert!(text.contains("Ana"));
        assert!(text.contains("[y] Yes"));
    }
}
