//! Main chat loop orchestration.
//!
//! Wires everything together: builds the transport, controller, and click
//! beacon from the config, establishes the session, then translates input
//! events into debounced controller calls and slash-command handling.

use std::sync::Arc;
use std::time::Duration;

use console::style;

use concierge_core::api::{ApiClient, RetryPolicy};
use concierge_core::chat::{RenderSink, SessionController};
use concierge_core::debounce::Debouncer;
use concierge_infra::http::{ClickBeacon, HttpTransport};
use concierge_types::config::ChatConfig;

use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::sink::TerminalSink;

fn print_banner(base_url: &str) {
    println!();
    println!("  {}", style("Concierge — hotel recommendation chat").bold());
    println!("  {}", style(base_url).dim());
    println!(
        "  {}",
        style("Type a message to get started, or /help for commands.").dim()
    );
}

/// Run the interactive chat session until the user exits.
pub async fn run_chat_loop(config: &ChatConfig, email: &str) -> anyhow::Result<()> {
    let transport = HttpTransport::new(&config.api_base_url);
    let policy = RetryPolicy::from_config(config);

    let sink = Arc::new(TerminalSink::new());
    let controller = Arc::new(SessionController::new(
        ApiClient::new(transport.clone(), policy.clone()),
        Arc::clone(&sink),
        config.max_message_len,
    ));
    let beacon = ClickBeacon::new(Arc::new(ApiClient::new(transport, policy)));
    let debouncer = Debouncer::new(Duration::from_millis(config.debounce_ms));

    print_banner(&config.api_base_url);

    // Session establishment gets the same loading feedback as a send.
    sink.show_loading();
    let started = controller.start(email).await;
    sink.remove_loading();
    if started.is_err() {
        // The sink already showed the generic failure bubble; detail is in
        // the log.
        anyhow::bail!("could not establish a chat session");
    }

    let (mut chat_input, _writer) =
        ChatInput::new().map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Command(cmd) => match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Exit => {
                    println!("\n  {}", style("Session ended.").dim());
                    break;
                }
                ChatCommand::Hotels => {
                    let recs = sink.last_recommendations();
                    if recs.is_empty() {
                        println!(
                            "\n  {}\n",
                            style("No hotel cards yet — ask me for recommendations first.")
                                .dim()
                        );
                    } else {
                        sink.display_recommendations(&recs);
                    }
                }
                ChatCommand::Book(index) => handle_book(&sink, &beacon, index),
                ChatCommand::Unknown(name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    );
                }
            },
            InputEvent::Message(text) => {
                if !sink.input_enabled() {
                    // A send is in flight; the controller would drop this
                    // trigger anyway.
                    continue;
                }

                // Bursts of sends collapse in the debouncer; a send during
                // an in-flight exchange is dropped by the controller.
                let controller = Arc::clone(&controller);
                debouncer.trigger(async move {
                    controller.send_user_message(&text).await;
                });
            }
        }
    }

    debouncer.cancel();
    Ok(())
}

/// Print the booking link for card `index` and fire the click beacon.
///
/// The beacon is never awaited here: showing the link must not wait on
/// analytics.
fn handle_book(sink: &TerminalSink, beacon: &ClickBeacon<HttpTransport>, index: usize) {
    let recs = sink.last_recommendations();
    let Some(rec) = index.checked_sub(1).and_then(|i| recs.get(i)) else {
        println!(
            "\n  {} No hotel card #{index}. Use /hotels to see the latest cards.\n",
            style("?").yellow().bold()
        );
        return;
    };

    beacon.track_click(rec.id.clone(), rec.affiliate_url.as_deref());

    match &rec.affiliate_url {
        Some(url) => {
            println!(
                "\n  {} Booking link for {}: {}\n",
                style("→").green().bold(),
                style(&rec.name).bold(),
                style(url).underlined()
            );
        }
        None => {
            println!(
                "\n  {} {} has no booking link.\n",
                style("!").yellow().bold(),
                style(&rec.name).bold()
            );
        }
    }
}
