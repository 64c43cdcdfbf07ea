//! Core logic for the Concierge chat client.
//!
//! This crate holds everything between raw input events and the HTTP wire:
//! the typed API client with bounded retry over an abstract transport
//! ([`api`]), the session controller state machine and render-sink boundary
//! ([`chat`]), the single-slot debounce guard ([`debounce`]), and input
//! sanitization ([`text`]).
//!
//! Infrastructure (reqwest, config files) lives in `concierge-infra`;
//! rendering lives behind the [`chat::RenderSink`] trait.

pub mod api;
pub mod chat;
pub mod debounce;
pub mod text;
