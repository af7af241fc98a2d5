//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::customer::{Customer, CustomerFields, CustomerId, Gender};
use crate::core::draft::{Field, FormDraft};
use crate::core::state::App;
use crate::gateway::{CustomerGateway, GatewayError};

/// A gateway for tests that never reach the network.
pub struct NoopGateway;

#[async_trait]
impl CustomerGateway for NoopGateway {
    fn resource(&self) -> &str {
        "noop://customers"
    }

    async fn list(&self) -> Result<Vec<Customer>, GatewayError> {
        Ok(Vec::new())
    }

    async fn create(&self, fields: &CustomerFields) -> Result<Customer, GatewayError> {
        Ok(Customer::new(CustomerId::new("new"), fields.clone()))
    }

    async fn update(
        &self,
        id: &CustomerId,
        fields: &CustomerFields,
    ) -> Result<Customer, GatewayError> {
        Ok(Customer::new(id.clone(), fields.clone()))
    }

    async fn delete(&self, _id: &CustomerId) -> Result<Option<Customer>, GatewayError> {
        Ok(None)
    }
}

/// A complete, valid customer whose other fields derive from `name`.
pub fn customer(id: &str, name: &str) -> Customer {
    let handle = name.to_lowercase();
    Customer::new(
        CustomerId::new(id),
        CustomerFields {
            name: name.to_string(),
            avatar: format!("https://example.com/{handle}.png"),
            email: format!("{handle}@example.com"),
            phone_number: "0912345678".to_string(),
            description: "Engineer".to_string(),
            address: "Hanoi".to_string(),
            gender: Gender::Female,
        },
    )
}

/// A create-form draft with every field filled in.
pub fn filled_draft() -> FormDraft {
    let mut draft = FormDraft::empty();
    draft.set(Field::Name, "Cara".to_string());
    draft.set(Field::Avatar, "https://example.com/cara.png".to_string());
    draft.set(Field::Email, "cara@example.com".to_string());
    draft.set(Field::Phone, "0987654321".to_string());
    draft.set(Field::Description, "Accountant".to_string());
    draft.set(Field::Address, "Da Nang".to_string());
    draft
}

/// Creates a test App with a NoopGateway.
pub fn test_app() -> App {
    App::new(Arc::new(NoopGateway))
}

/// A test App whose list has loaded customers "1" (A) and "2" (B).
pub fn loaded_app() -> App {
    let mut app = test_app();
    update(&mut app, Action::Activate);
    update(
        &mut app,
        Action::ListLoaded(Ok(vec![customer("1", "A"), customer("2", "B")])),
    );
    app.status_message.clear();
    app
}

/// Flatten a rendered test buffer into one string of cell symbols.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
