//! Fire-and-forget click tracking.
//!
//! A click on a booking link fires one beacon POST on a detached task. The
//! action that triggered it (opening the affiliate URL) never waits for the
//! beacon, and a beacon failure is logged locally and dropped -- it never
//! propagates and never touches send state.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use concierge_core::api::{ApiClient, ChatTransport};
use concierge_types::api::ClickEvent;
use concierge_types::recommendation::HotelId;

/// Detached-task analytics beacon.
pub struct ClickBeacon<T> {
    api: Arc<ApiClient<T>>,
}

impl<T: ChatTransport + 'static> ClickBeacon<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self { api }
    }

    /// Record a hotel card click. Returns immediately; the POST runs on a
    /// spawned task and its outcome is only logged.
    pub fn track_click(&self, hotel_id: Option<HotelId>, affiliate_url: Option<&str>) {
        let event = ClickEvent {
            hotel_id,
            affiliate_url: affiliate_url.map(str::to_string),
            ts: Utc::now().timestamp_millis(),
        };
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            match api.track_click(&event).await {
                Ok(()) => debug!(hotel_id = ?event.hotel_id, "click tracked"),
                Err(err) => warn!(error = %err, "click beacon failed"),
            }
        });
    }
}

impl<T> Clone for ClickBeacon<T> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}
