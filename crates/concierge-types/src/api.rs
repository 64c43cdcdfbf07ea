//! Wire payloads for the chatbot HTTP API.
//!
//! Request bodies are serialized as-is; response bodies tolerate missing
//! optional fields so that upstream deployments without the recommendation
//! engine still parse.

use serde::{Deserialize, Serialize};

use crate::recommendation::{HotelId, Recommendation};

/// Endpoint path for session creation.
pub const START_SESSION_PATH: &str = "/chatbot/start_session/";
/// Endpoint path for message exchange.
pub const SEND_MESSAGE_PATH: &str = "/chatbot/send_message/";
/// Endpoint path for the click-tracking beacon.
pub const CLICK_PATH: &str = "/analytics/click/";

/// Body of `POST /chatbot/start_session/`.
#[derive(Debug, Clone, Serialize)]
pub struct StartSessionRequest {
    pub email: String,
}

/// Response of a successful session start.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionStart {
    pub session_id: String,
    /// Server-provided welcome message, displayed as the first bot bubble.
    pub message: String,
}

/// Body of `POST /chatbot/send_message/`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub session_id: String,
    pub message: String,
}

/// Response of a successful message exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct BotReply {
    pub bot_response: String,
    /// Intent label the server parsed from the message. Logged, not rendered.
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// Body of `POST /analytics/click/` (fire-and-forget, response ignored).
#[derive(Debug, Clone, Serialize)]
pub struct ClickEvent {
    pub hotel_id: Option<HotelId>,
    pub affiliate_url: Option<String>,
    /// Client-side timestamp in epoch milliseconds.
    pub ts: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_session_request_body() {
        let body = StartSessionRequest {
            email: String::new(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"email":""}"#);
    }

    #[test]
    fn test_session_start_parses() {
        let start: SessionStart =
            serde_json::from_str(r#"{"session_id":"abc","message":"Hi"}"#).unwrap();
        assert_eq!(start.session_id, "abc");
        assert_eq!(start.message, "Hi");
    }

    #[test]
    fn test_bot_reply_without_recommendations() {
        let reply: BotReply =
            serde_json::from_str(r#"{"bot_response":"Tell me more"}"#).unwrap();
        assert_eq!(reply.bot_response, "Tell me more");
        assert!(reply.intent.is_none());
        assert!(reply.recommendations.is_empty());
    }

    #[test]
    fn test_bot_reply_with_recommendations() {
        let json = r#"{
            "bot_response": "Here are 2 options",
            "intent": "search",
            "recommendations": [
                {"id": 1, "name": "Villa", "price": 500},
                {"id": "mk-2", "name": "Lodge", "price": 120}
            ]
        }"#;
        let reply: BotReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.intent.as_deref(), Some("search"));
        assert_eq!(reply.recommendations.len(), 2);
        assert_eq!(reply.recommendations[0].name, "Villa");
        // A string id from an aggregated source must not fail the reply.
        assert_eq!(
            reply.recommendations[1].id,
            Some(HotelId::Text("mk-2".to_string()))
        );
    }

    #[test]
    fn test_click_event_body() {
        let event = ClickEvent {
            hotel_id: Some(HotelId::Number(7)),
            affiliate_url: Some("https://booking.example.com/7".to_string()),
            ts: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"hotel_id\":7"));
        assert!(json.contains("\"ts\":1700000000000"));
    }
}
