pub mod client;
pub mod http;

pub use client::{CustomerGateway, GatewayError};
pub use http::HttpGateway;
