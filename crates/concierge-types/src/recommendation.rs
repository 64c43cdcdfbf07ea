//! Hotel recommendation cards.
//!
//! A recommendation batch arrives inside a single bot response and is
//! rendered as a read-only card set. The server ranks the batch; the client
//! preserves its order.

use serde::{Deserialize, Serialize};

/// How many amenities a card shows before truncating.
pub const MAX_DISPLAY_AMENITIES: usize = 3;

/// Hotel identifier as the upstream emits it.
///
/// The primary backend sends numeric ids; aggregated booking sources send
/// string document ids. Both forms pass through to the click beacon
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotelId {
    Number(i64),
    Text(String),
}

/// One hotel offer from the recommendation engine.
///
/// All fields except `name` and `price` are optional on the wire: the
/// upstream aggregates several booking sources and fills in what it has.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: Option<HotelId>,
    pub name: String,
    pub location: Option<String>,
    pub price: f64,
    pub rating: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub image_url: Option<String>,
    pub affiliate_url: Option<String>,
    /// Server-side ranking score. Informational only; the batch arrives
    /// already sorted.
    #[serde(default)]
    pub score: f64,
}

impl Recommendation {
    /// Amenities shown on the card, truncated to [`MAX_DISPLAY_AMENITIES`].
    pub fn display_amenities(&self) -> &[String] {
        let end = self.amenities.len().min(MAX_DISPLAY_AMENITIES);
        &self.amenities[..end]
    }

    /// Whether the amenity list was cut off for display.
    pub fn amenities_truncated(&self) -> bool {
        self.amenities.len() > MAX_DISPLAY_AMENITIES
    }
}
