use std::fmt;

use async_trait::async_trait;

use crate::core::customer::{Customer, CustomerFields, CustomerId};

/// Errors that can occur while talking to the customer resource.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The resource answered with a non-success status. `message` is the error body.
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "network error: {msg}"),
            GatewayError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GatewayError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// The four calls against the customer collection. Every call is fire-once.
#[async_trait]
pub trait CustomerGateway: Send + Sync {
    /// Human-readable location of the resource (shown in the title bar).
    fn resource(&self) -> &str;

    async fn list(&self) -> Result<Vec<Customer>, GatewayError>;

    async fn create(&self, fields: &CustomerFields) -> Result<Customer, GatewayError>;

    async fn update(
        &self,
        id: &CustomerId,
        fields: &CustomerFields,
    ) -> Result<Customer, GatewayError>;

    /// `Ok(None)` when the resource confirms without echoing the record.
    async fn delete(&self, id: &CustomerId) -> Result<Option<Customer>, GatewayError>;
}
