//! RenderSink trait -- the controller's only output boundary.
//!
//! The sink consumes controller events and produces UI side effects:
//! message bubbles, recommendation card sets, the loading indicator, and
//! the input-enabled flag. No return values; the controller never depends
//! on rendering succeeding.

use concierge_types::chat::Sender;
use concierge_types::recommendation::Recommendation;

/// Rendering sink for controller events.
///
/// Implementations must tolerate being called from spawned tasks; methods
/// take `&self` and are expected to be cheap.
pub trait RenderSink: Send + Sync {
    /// Append one message bubble to the transcript view.
    fn display_message(&self, text: &str, sender: Sender, is_error: bool);

    /// Render one recommendation card set (already ranked by the server).
    fn display_recommendations(&self, recommendations: &[Recommendation]);

    /// Show the loading indicator for an in-flight send.
    fn show_loading(&self);

    /// Clear the loading indicator.
    fn remove_loading(&self);

    /// Enable or disable the input control.
    fn set_input_enabled(&self, enabled: bool);
}

impl<S: RenderSink + ?Sized> RenderSink for std::sync::Arc<S> {
    fn display_message(&self, text: &str, sender: Sender, is_error: bool) {
        (**self).display_message(text, sender, is_error);
    }

    fn display_recommendations(&self, recommendations: &[Recommendation]) {
        (**self).display_recommendations(recommendations);
    }

    fn show_loading(&self) {
        (**self).show_loading();
    }

    fn remove_loading(&self) {
        (**self).remove_loading();
    }

    fn set_input_enabled(&self, enabled: bool) {
        (**self).set_input_enabled(enabled);
    }
}
