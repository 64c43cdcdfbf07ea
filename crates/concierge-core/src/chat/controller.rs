//! Session controller state machine.
//!
//! Owns session identity, the append-only transcript, and the per-send
//! Idle/Sending substate. One controller instance per process lifetime;
//! all state lives in instance fields behind a mutex that is never held
//! across an await.

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use concierge_types::chat::{ChatMessage, Sender};
use concierge_types::error::ChatbotError;

use crate::api::{ApiClient, ChatTransport};
use crate::text::sanitize;

use super::sink::RenderSink;

/// Generic failure bubble shown when a send fails after retries. Network
/// detail goes to the log, never to the user.
const SEND_FAILED_MESSAGE: &str =
    "Sorry, something went wrong while contacting the assistant. Please try again.";

/// Failure bubble shown when the session could not be established.
const SESSION_FAILED_MESSAGE: &str =
    "Unable to reach the assistant right now. Please try again later.";

/// Session lifecycle phase.
///
/// `Failed` is terminal: session start is never retried automatically
/// (distinct from per-message retry inside the API client).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Starting,
    Ready,
    Failed,
}

struct ControllerState {
    phase: Phase,
    /// Exclusive send lock: exactly one user-initiated send in flight.
    sending: bool,
    session_id: Option<String>,
    transcript: Vec<ChatMessage>,
}

/// Coordinates session lifecycle, message dispatch, and UI feedback.
///
/// Generic over the HTTP transport and the render sink so tests can inject
/// scripted transports and recording sinks.
pub struct SessionController<T, R> {
    api: ApiClient<T>,
    sink: R,
    max_message_len: usize,
    state: Mutex<ControllerState>,
}

impl<T: ChatTransport, R: RenderSink> SessionController<T, R> {
    pub fn new(api: ApiClient<T>, sink: R, max_message_len: usize) -> Self {
        Self {
            api,
            sink,
            max_message_len,
            state: Mutex::new(ControllerState {
                phase: Phase::Uninitialized,
                sending: false,
                session_id: None,
                transcript: Vec::new(),
            }),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    pub fn session_id(&self) -> Option<String> {
        self.state.lock().session_id.clone()
    }

    /// Whether a user-initiated send is currently in flight.
    pub fn is_sending(&self) -> bool {
        self.state.lock().sending
    }

    /// Snapshot of the append-only transcript.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.state.lock().transcript.clone()
    }

    /// Establish the chat session. Callable once, at startup.
    ///
    /// On success stores the server-assigned session id, emits the welcome
    /// message, and reaches `Ready`. On failure the controller stays in the
    /// terminal `Failed` phase and emits a visible generic error; the
    /// underlying error is returned so the caller can decide to exit.
    pub async fn start(&self, email: &str) -> Result<(), ChatbotError> {
        {
            let mut state = self.state.lock();
            if state.phase != Phase::Uninitialized {
                warn!(phase = ?state.phase, "session start ignored: already started");
                return Ok(());
            }
            state.phase = Phase::Starting;
        }

        info!("starting chat session");
        match self.api.start_session(email).await {
            Ok(start) => {
                let welcome = ChatMessage::new(Sender::Bot, &start.message, false);
                {
                    let mut state = self.state.lock();
                    state.session_id = Some(start.session_id.clone());
                    state.phase = Phase::Ready;
                    state.transcript.push(welcome);
                }
                info!(session_id = %start.session_id, "session ready");
                self.sink.display_message(&start.message, Sender::Bot, false);
                Ok(())
            }
            Err(err) => {
                self.state.lock().phase = Phase::Failed;
                error!(error = %err, "session start failed");
                self.sink.display_message(SESSION_FAILED_MESSAGE, Sender::Bot, true);
                Err(err)
            }
        }
    }

    /// Dispatch one user message.
    ///
    /// Silent no-op when the sanitized text is empty, no session exists, or
    /// a send is already in flight (a second trigger is dropped, not
    /// queued). Over-length input on a ready, idle session is rejected with
    /// a visible error before any network call. On acceptance the user
    /// bubble is echoed immediately; the loading indicator and input lock
    /// are always cleared afterwards, whatever the outcome.
    pub async fn send_user_message(&self, raw: &str) {
        let text = sanitize(raw);
        if text.is_empty() {
            debug!("send ignored: empty message");
            return;
        }

        // Acceptance guards and the Idle -> Sending transition happen under
        // one lock so concurrent triggers cannot both pass. The silent
        // guards come first; only the length rejection is visible.
        let session_id = {
            let mut state = self.state.lock();
            if state.phase != Phase::Ready {
                debug!(phase = ?state.phase, "send ignored: session not ready");
                return;
            }
            if state.sending {
                debug!("send ignored: a message is already in flight");
                return;
            }
            let Some(id) = state.session_id.clone() else {
                debug!("send ignored: no session id");
                return;
            };
            let length = text.chars().count();
            if length > self.max_message_len {
                drop(state);
                warn!(length, max = self.max_message_len, "message exceeds length limit");
                self.sink.display_message(
                    &format!(
                        "Message is too long (max {} characters).",
                        self.max_message_len
                    ),
                    Sender::Bot,
                    true,
                );
                return;
            }
            state.sending = true;
            state
                .transcript
                .push(ChatMessage::new(Sender::User, &text, false));
            id
        };

        // Optimistic local echo, then loading feedback.
        self.sink.display_message(&text, Sender::User, false);
        self.sink.set_input_enabled(false);
        self.sink.show_loading();

        let result = self.api.send_message(&session_id, &text).await;

        // Cleanup always runs: no loading indicator may outlive the send.
        self.sink.remove_loading();
        self.sink.set_input_enabled(true);
        self.state.lock().sending = false;

        match result {
            Ok(reply) => {
                if let Some(intent) = &reply.intent {
                    debug!(%intent, "server classified intent");
                }
                self.state
                    .lock()
                    .transcript
                    .push(ChatMessage::new(Sender::Bot, &reply.bot_response, false));
                self.sink.display_message(&reply.bot_response, Sender::Bot, false);
                if !reply.recommendations.is_empty() {
                    info!(count = reply.recommendations.len(), "rendering recommendations");
                    self.sink.display_recommendations(&reply.recommendations);
                }
            }
            Err(err) => {
                error!(error = %err, "message send failed");
                self.state
                    .lock()
                    .transcript
                    .push(ChatMessage::new(Sender::Bot, SEND_FAILED_MESSAGE, true));
                self.sink.display_message(SEND_FAILED_MESSAGE, Sender::Bot, true);
            }
        }
    }
}
