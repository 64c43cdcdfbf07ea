//! Terminal implementation of the render sink.
//!
//! Message bubbles via `console` styling, the loading indicator as an
//! `indicatif` spinner (single slot, cleared on remove), and recommendation
//! card sets as a `comfy_table` table. The sink also keeps the most recent
//! recommendation batch so `/hotels` and `/book` can refer back to it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;

use concierge_core::chat::RenderSink;
use concierge_types::chat::Sender;
use concierge_types::recommendation::Recommendation;

pub struct TerminalSink {
    spinner: Mutex<Option<ProgressBar>>,
    input_enabled: AtomicBool,
    last_recommendations: Mutex<Vec<Recommendation>>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            input_enabled: AtomicBool::new(true),
            last_recommendations: Mutex::new(Vec::new()),
        }
    }

    /// Whether the controller currently allows input.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled.load(Ordering::SeqCst)
    }

    /// The most recent recommendation batch (empty if none yet).
    pub fn last_recommendations(&self) -> Vec<Recommendation> {
        self.last_recommendations.lock().clone()
    }

    fn render_cards(&self, recommendations: &[Recommendation]) {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Hotel", "Location", "Price/night", "Rating", "Amenities"]);

        for (index, rec) in recommendations.iter().enumerate() {
            let mut amenities = rec.display_amenities().join(", ");
            if rec.amenities_truncated() {
                amenities.push_str(", …");
            }
            table.add_row(vec![
                (index + 1).to_string(),
                rec.name.clone(),
                rec.location.clone().unwrap_or_else(|| "—".to_string()),
                format!("${:.0}", rec.price),
                rec.rating
                    .map(|r| format!("{r:.1} ★"))
                    .unwrap_or_else(|| "—".to_string()),
                amenities,
            ]);
        }

        println!("\n{table}");
        println!(
            "  {}",
            style("Use /book N to get the booking link for card N.").dim()
        );
        println!();
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TerminalSink {
    fn display_message(&self, text: &str, sender: Sender, is_error: bool) {
        if is_error {
            println!("\n  {} {}\n", style("!").red().bold(), style(text).red());
            return;
        }
        match sender {
            Sender::User => {
                println!("\n  {} {}", style("You >").green().bold(), text);
            }
            Sender::Bot => {
                println!("\n  {} {}\n", style("Concierge >").cyan().bold(), text);
            }
        }
    }

    fn display_recommendations(&self, recommendations: &[Recommendation]) {
        *self.last_recommendations.lock() = recommendations.to_vec();
        self.render_cards(recommendations);
    }

    fn show_loading(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("searching...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.lock() = Some(spinner);
    }

    fn remove_loading(&self) {
        if let Some(spinner) = self.spinner.lock().take() {
            spinner.finish_and_clear();
        }
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.input_enabled.store(enabled, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use concierge_types::recommendation::HotelId;

    fn rec(name: &str) -> Recommendation {
        Recommendation {
            id: Some(HotelId::Number(1)),
            name: name.to_string(),
            location: None,
            price: 100.0,
            rating: None,
            amenities: vec![],
            image_url: None,
            affiliate_url: None,
            score: 0.0,
        }
    }

    #[test]
    fn last_batch_is_replaced_not_appended() {
        let sink = TerminalSink::new();
        sink.display_recommendations(&[rec("A"), rec("B")]);
        sink.display_recommendations(&[rec("C")]);

        let last = sink.last_recommendations();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].name, "C");
    }

    #[test]
    fn input_enabled_flag_tracks_controller() {
        let sink = TerminalSink::new();
        assert!(sink.input_enabled());
        sink.set_input_enabled(false);
        assert!(!sink.input_enabled());
        sink.set_input_enabled(true);
        assert!(sink.input_enabled());
    }

    #[test]
    fn remove_loading_without_show_is_a_noop() {
        let sink = TerminalSink::new();
        sink.remove_loading();
    }
}
