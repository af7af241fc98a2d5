//! # TitleBar Component
//!
//! Top status bar: which resource the screen is bound to, how many customers
//! are loaded, the current status message, and an offline marker when the
//! initial load failed.
//!
//! Purely presentational. It receives all data as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.gateway.resource(), &app.status_message, app.store.len(), false);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Offline**: `"Roster (http://…/customers) | 0 customers | Offline | ✗ Offline"`
//! 2. **Status message**: `"Roster (http://…/customers) | 3 customers | Loaded 3 customers"`
//! 3. **Default**: `"Roster (http://…/customers) | 3 customers"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub resource: &'a str,
    pub status_message: &'a str,
    pub customer_count: usize,
    pub offline: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(
        resource: &'a str,
        status_message: &'a str,
        customer_count: usize,
        offline: bool,
    ) -> Self {
        Self {
            resource,
            status_message,
            customer_count,
            offline,
        }
    }

    fn text(&self) -> String {
        let noun = if self.customer_count == 1 {
            "customer"
        } else {
            "customers"
        };
        let base = format!(
            "Roster ({}) | {} {}",
            self.resource, self.customer_count, noun
        );
        if self.status_message.is_empty() {
            base
        } else {
            format!("{} | {}", base, self.status_message)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(self.text())];
        if self.offline {
            spans.push(Span::styled(" | ✗ Offline", Style::default().fg(Color::Red)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
