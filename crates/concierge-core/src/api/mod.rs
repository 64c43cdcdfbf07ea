//! Typed chatbot API client with bounded retry.

pub mod client;
pub mod transport;

pub use client::{ApiClient, RetryPolicy};
pub use transport::ChatTransport;
