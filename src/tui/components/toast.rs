//! # Toast Component
//!
//! One-line notification shown at the bottom of the screen: green for a
//! successful operation, red for a failed one, prefixed with the time it was
//! raised. The TUI loop decides how long it stays up.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::notification::{Notification, Severity};
use crate::tui::component::Component;

pub struct Toast<'a> {
    pub notification: Option<&'a Notification>,
}

impl<'a> Toast<'a> {
    pub fn new(notification: Option<&'a Notification>) -> Self {
        Self { notification }
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(notification) = self.notification else {
            return;
        };
        let (icon, color) = match notification.severity {
            Severity::Success => ("✓", Color::Green),
            Severity::Fail => ("✗", Color::Red),
        };
        let line = Line::from(vec![
            Span::styled(
                notification.raised_at.format("%H:%M:%S ").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{} {}", icon, notification.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(line, area);
    }
}
