//! Infrastructure implementations for Concierge.
//!
//! Provides the reqwest-backed [`http::HttpTransport`] implementing the
//! core transport trait, the fire-and-forget [`http::ClickBeacon`], and the
//! TOML configuration loader.

pub mod config;
pub mod http;
