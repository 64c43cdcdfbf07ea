//! Async line input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` and classifies each submitted line
//! before the loop sees it: blank lines are swallowed, slash commands are
//! parsed, and everything else is chat text. Submitted lines go into the
//! prompt history.

use console::style;
use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

use super::commands::{self, ChatCommand};

/// Classified input from the prompt.
#[derive(Debug, PartialEq)]
pub enum InputEvent {
    /// Chat text to send to the bot.
    Message(String),
    /// A parsed slash command.
    Command(ChatCommand),
    /// End of input (Ctrl+D).
    Eof,
    /// Interrupt (Ctrl+C).
    Interrupted,
}

/// Classify one submitted line. `None` means nothing useful was typed.
fn classify(line: &str) -> Option<InputEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match commands::parse(line) {
        Some(cmd) => InputEvent::Command(cmd),
        None => InputEvent::Message(line.to_string()),
    })
}

/// The chat prompt.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the prompt. Also returns a `SharedWriter` for printing
    /// without clobbering the prompt line.
    pub fn new() -> Result<(Self, SharedWriter), ReadlineError> {
        let prompt = format!("  {} ", style("You >").green().bold());
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Read until something actionable arrives: a non-empty line
    /// (classified as chat text or a command), end of input, or an
    /// interrupt.
    pub async fn read_line(&mut self) -> InputEvent {
        loop {
            match self.rl.readline().await {
                Ok(ReadlineEvent::Line(line)) => {
                    if let Some(event) = classify(&line) {
                        self.rl.add_history_entry(line.trim().to_string());
                        return event;
                    }
                }
                Ok(ReadlineEvent::Eof) => return InputEvent::Eof,
                Ok(ReadlineEvent::Interrupted) => return InputEvent::Interrupted,
                Err(_) => return InputEvent::Eof,
            }
        }
    }
}
