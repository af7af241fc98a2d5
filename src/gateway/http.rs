//! reqwest-backed gateway for a JSON REST collection.
//!
//! ```text
//! GET    {base}/{path}        → [Customer]
//! POST   {base}/{path}        → Customer      (body: fields)
//! PUT    {base}/{path}/{id}   → Customer      (body: fields)
//! DELETE {base}/{path}/{id}   → Customer | confirmation
//! ```

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Method;
use serde_json::Value;

use crate::core::customer::{Customer, CustomerFields, CustomerId};
use crate::gateway::{CustomerGateway, GatewayError};

pub struct HttpGateway {
    collection_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(base_url: &str, path: &str) -> Self {
        Self {
            collection_url: join_url(base_url, path),
            client: reqwest::Client::new(),
        }
    }

    fn item_url(&self, id: &CustomerId) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    /// One HTTP round trip. Success bodies are decoded as JSON (an empty body
    /// becomes `Value::Null`); failure bodies are kept verbatim in the error.
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&CustomerFields>,
    ) -> Result<Value, GatewayError> {
        info!("{} {}", method, url);

        let mut builder = self.client.request(method.clone(), url);
        if let Some(fields) = body {
            builder = builder.json(fields);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{} {} -> {}", method, url, status);

        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("{} {} failed: {} - {}", method, url, status, text);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, GatewayError> {
    serde_json::from_value(value).map_err(|e| GatewayError::Parse(e.to_string()))
}

#[async_trait]
impl CustomerGateway for HttpGateway {
    fn resource(&self) -> &str {
        &self.collection_url
    }

    async fn list(&self) -> Result<Vec<Customer>, GatewayError> {
        let value = self.request(Method::GET, &self.collection_url, None).await?;
        let customers: Vec<Customer> = decode(value)?;
        info!("Fetched {} customers", customers.len());
        Ok(customers)
    }

    async fn create(&self, fields: &CustomerFields) -> Result<Customer, GatewayError> {
        let value = self
            .request(Method::POST, &self.collection_url, Some(fields))
            .await?;
        decode(value)
    }

    async fn update(
        &self,
        id: &CustomerId,
        fields: &CustomerFields,
    ) -> Result<Customer, GatewayError> {
        let value = self
            .request(Method::PUT, &self.item_url(id), Some(fields))
            .await?;
        decode(value)
    }

    async fn delete(&self, id: &CustomerId) -> Result<Option<Customer>, GatewayError> {
        let value = self.request(Method::DELETE, &self.item_url(id), None).await?;
        if value.is_null() {
            return Ok(None);
        }
        match serde_json::from_value(value) {
            Ok(customer) => Ok(Some(customer)),
            Err(e) => {
                debug!("DELETE {} answered without a customer record: {}", id, e);
                Ok(None)
            }
        }
    }
}
