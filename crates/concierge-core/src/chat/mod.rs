//! Session controller and the render-sink boundary.

pub mod controller;
pub mod sink;

pub use controller::{Phase, SessionController};
pub use sink::RenderSink;
