//! HTTP plumbing: the chatbot API transport and the analytics beacon.

pub mod beacon;
pub mod transport;

pub use beacon::ClickBeacon;
pub use transport::HttpTransport;
