//! `:` command parsing.
//!
//! Commands are typed after `:` in the command prompt. Parsing is pure; the
//! input layer dispatches the result to the App API.

use tuitter_app::Screen;
use tuitter_core::{Handle, OAuthProvider, SettingsUpdate};

/// A parsed `:` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:q`, `:quit`
    Quit,
    /// `:post <text>`
    Post {
        /// Post text.
        body: String,
    },
    /// `:search [query]`. An empty query shows every trending post.
    Search {
        /// Search query.
        query: String,
    },
    /// `:timeline`, `:discover`, `:notifications`, `:messages`, `:settings`
    Screen(Screen),
    /// `:profile [handle]`. No handle shows the signed-in user.
    Profile {
        /// Whose profile.
        handle: Option<Handle>,
    },
    /// `:set <field> <value>`
    Set(SettingsUpdate),
    /// `:connect <provider>`
    Connect(OAuthProvider),
    /// `:disconnect <provider>`
    Disconnect(OAuthProvider),
    /// `:unread`: toggle unread-only notifications.
    UnreadOnly,
    /// `:refresh`
    Refresh,
    /// Command name not recognised.
    Unknown {
        /// The full input.
        input: String,
    },
    /// Known command with bad arguments.
    InvalidArgs {
        /// Command name.
        command: String,
        /// What was wrong.
        error: String,
    },
}

/// Parse a command line. A leading `:` is optional.
pub fn parse(input: &str) -> Command {
    let input = input.trim();
    let line = input.strip_prefix(':').unwrap_or(input).trim_start();
    let (name, rest) = split_word(line);

    match name {
        "q" | "quit" => Command::Quit,
        "post" if rest.is_empty() => invalid(name, "usage: post <text>"),
        "post" => Command::Post { body: rest.to_string() },
        "search" => Command::Search { query: rest.to_string() },
        "profile" => {
            let handle = split_word(rest).0.trim_start_matches('@');
            Command::Profile { handle: (!handle.is_empty()).then(|| Handle::from(handle)) }
        },
        "set" => parse_set(rest),
        "connect" | "disconnect" => match rest.parse::<OAuthProvider>() {
            Ok(provider) if name == "connect" => Command::Connect(provider),
            Ok(provider) => Command::Disconnect(provider),
            Err(error) => invalid(name, &error),
        },
        "unread" => Command::UnreadOnly,
        "refresh" => Command::Refresh,
        _ => match name.parse::<Screen>() {
            Ok(screen) => Command::Screen(screen),
            Err(_) => Command::Unknown { input: input.to_string() },
        },
    }
}

/// `set <field> <value>`. Text fields take the rest of the line verbatim.
fn parse_set(args: &str) -> Command {
    let (field, value) = split_word(args);
    if field.is_empty() || value.is_empty() {
        return invalid("set", "usage: set <name|bio|avatar|email|online|private> <value>");
    }

    let mut update = SettingsUpdate::default();
    match field {
        "name" | "display_name" => update.display_name = Some(value.to_string()),
        "bio" => update.bio = Some(value.to_string()),
        "avatar" => update.avatar_art = Some(value.to_string()),
        "email" | "online" | "private" => {
            let Some(on) = parse_switch(value) else {
                return invalid("set", &format!("expected on or off, got '{value}'"));
            };
            match field {
                "email" => update.email_notifications = Some(on),
                "online" => update.show_online_status = Some(on),
                _ => update.private_account = Some(on),
            }
        },
        other => return invalid("set", &format!("unknown field '{other}'")),
    }
    Command::Set(update)
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// First word and the trimmed remainder.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

fn invalid(command: &str, error: &str) -> Command {
    Command::InvalidArgs { command: command.to_string(), error: error.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_aliases() {
        assert_eq!(parse("q"), Command::Quit);
        assert_eq!(parse(":quit"), Command::Quit);
    }

    #[test]
    fn post_keeps_spacing() {
        assert_eq!(parse("post hello   world #rust"), Command::Post {
            body: "hello   world #rust".into()
        });
        assert!(matches!(parse("post"), Command::InvalidArgs { .. }));
    }

    #[test]
    fn screens_by_name() {
        assert_eq!(parse("discover"), Command::Screen(Screen::Discover));
        assert_eq!(parse("Settings"), Command::Screen(Screen::Settings));
    }

    #[test]
    fn profile_strips_at() {
        assert_eq!(parse("profile @alice"), Command::Profile { handle: Some("alice".into()) });
        assert_eq!(parse("profile"), Command::Profile { handle: None });
    }

    #[test]
    fn set_text_and_switch_fields() {
        let Command::Set(update) = parse("set bio Rust and terminals") else {
            panic!("expected set");
        };
        assert_eq!(update.bio.as_deref(), Some("Rust and terminals"));

        let Command::Set(update) = parse("set private on") else {
            panic!("expected set");
        };
        assert_eq!(update.private_account, Some(true));
        assert_eq!(update.bio, None);

        assert!(matches!(parse("set private maybe"), Command::InvalidArgs { .. }));
        assert!(matches!(parse("set colour red"), Command::InvalidArgs { .. }));
        assert!(matches!(parse("set bio"), Command::InvalidArgs { .. }));
    }

    #[test]
    fn connect_snapshot() {
        insta::assert_debug_snapshot!(parse("connect github"), @r"
        Connect(
            GitHub,
        )
        ");
    }

    #[test]
    fn bad_provider() {
        assert_eq!(parse("disconnect myspace"), Command::InvalidArgs {
            command: "disconnect".into(),
            error: "unknown provider 'myspace'".into(),
        });
    }

    #[test]
    fn unknown_command() {
        assert_eq!(parse("frobnicate now"), Command::Unknown { input: "frobnicate now".into() });
    }
}
