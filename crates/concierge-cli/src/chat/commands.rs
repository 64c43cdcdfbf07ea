//! Slash command parsing for the chat loop.

use console::style;

/// Commands the user can issue instead of a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Help,
    Exit,
    /// Reshow the most recent recommendation cards.
    Hotels,
    /// Open the booking link for card N (1-based) and fire the click beacon.
    Book(usize),
    Unknown(String),
}

/// Parse a slash command. Returns `None` for ordinary chat messages.
pub fn parse(text: &str) -> Option<ChatCommand> {
    let trimmed = text.trim();
    let rest = trimmed.strip_prefix('/')?;

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or("");
    match name {
        "help" => Some(ChatCommand::Help),
        "exit" | "quit" => Some(ChatCommand::Exit),
        "hotels" => Some(ChatCommand::Hotels),
        "book" => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
            Some(index) if index >= 1 => Some(ChatCommand::Book(index)),
            _ => Some(ChatCommand::Unknown("book (usage: /book N)".to_string())),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text.
pub fn print_help() {
    println!();
    println!("  {}", style("Commands").bold());
    println!("  {}    show this help", style("/help").cyan());
    println!("  {}  reshow the latest hotel cards", style("/hotels").cyan());
    println!("  {}  open the booking link for card N", style("/book N").cyan());
    println!("  {}    leave the chat (Ctrl+D also works)", style("/exit").cyan());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_are_not_commands() {
        assert_eq!(parse("find me a hotel"), None);
        assert_eq!(parse("what about paris / nice?"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn known_commands_parse() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/hotels"), Some(ChatCommand::Hotels));
        assert_eq!(parse("  /help  "), Some(ChatCommand::Help));
    }

    #[test]
    fn book_takes_a_one_based_index() {
        assert_eq!(parse("/book 2"), Some(ChatCommand::Book(2)));
        assert!(matches!(parse("/book"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/book zero"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/book 0"), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(
            parse("/teleport"),
            Some(ChatCommand::Unknown("teleport".to_string()))
        );
    }
}
