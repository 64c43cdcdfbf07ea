//! Shared domain types for Concierge.
//!
//! This crate contains the types used across the Concierge chat client:
//! chat messages, hotel recommendations, wire payloads for the chatbot API,
//! client configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod recommendation;
