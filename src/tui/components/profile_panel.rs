//! # ProfilePanel Component
//!
//! Detail view for the selected customer, shown to the right of the table
//! while the profile is visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::customer::Customer;
use crate::core::draft::Field;
use crate::tui::component::Component;

pub struct ProfilePanel<'a> {
    pub customer: Option<&'a Customer>,
}

impl<'a> ProfilePanel<'a> {
    pub fn new(customer: Option<&'a Customer>) -> Self {
        Self { customer }
    }

    fn lines<'c>(customer: &'c Customer) -> Vec<Line<'c>> {
        let label = Style::default().fg(Color::DarkGray);
        let fields = &customer.fields;
        let row = |field: Field, value: &'c str| -> Line<'c> {
            Line::from(vec![
                Span::styled(format!("{:<13}", field.label()), label),
                Span::raw(value),
            ])
        };

        vec![
            Line::from(Span::styled(
                fields.name.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!("#{}", customer.id), label)),
            Line::default(),
            row(Field::Description, &fields.description),
            row(Field::Email, &fields.email),
            row(Field::Phone, &fields.phone_number),
            row(Field::Address, &fields.address),
            Line::from(vec![
                Span::styled(format!("{:<13}", "Gender"), label),
                Span::raw(fields.gender.label()),
            ]),
            row(Field::Avatar, &fields.avatar),
        ]
    }
}

impl Component for ProfilePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Profile ");

        let paragraph = match self.customer {
            Some(customer) => Paragraph::new(Self::lines(customer)),
            None => Paragraph::new("Select a customer to see their profile")
                .style(Style::default().fg(Color::DarkGray)),
        };

        frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
    }
}
