use std::io;

use console::{style, Term};
use statbot_core::{AppViewModel, FetchStatus, Message, Sender};

use super::input::LOGIN_USAGE;

const HELP: &str = "Commands: open | login <username> <password> | <number> | back | email | quit";

/// Writes the transcript incrementally: each message is printed once.
pub(crate) struct Renderer {
    term: Term,
    shown: usize,
}

impl Renderer {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stdout(),
            shown: 0,
        }
    }

    pub(crate) fn render(&mut self, view: &AppViewModel) -> io::Result<()> {
        let (lines, shown) = frame_lines(view, self.shown);
        self.shown = shown;
        for line in lines {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    pub(crate) fn help(&self) -> io::Result<()> {
        self.term.write_line(HELP)
    }

    pub(crate) fn notice(&self, text: &str) -> io::Result<()> {
        self.term.write_line(&style(text).dim().to_string())
    }
}

/// Lines for the next frame, and the new count of transcript messages shown.
pub(crate) fn frame_lines(view: &AppViewModel, shown: usize) -> (Vec<String>, usize) {
    if !view.open {
        return (
            vec![style("Chat closed. Type `open` to show it.").dim().to_string()],
            shown,
        );
    }

    let mut lines: Vec<String> = view
        .messages
        .iter()
        .skip(shown)
        .map(format_message)
        .collect();

    if !view.logged_in {
        let prompt = if view.login_pending {
            "Logging in..."
        } else {
            "Please login to continue"
        };
        lines.push(style(prompt).yellow().to_string());
        if !view.login_pending {
            lines.push(style(LOGIN_USAGE).dim().to_string());
        }
        return (lines, view.messages.len());
    }

    if view.stats_status == FetchStatus::Loading {
        lines.push(style("(fetching data...)").dim().to_string());
    }
    if view.email_status == FetchStatus::Loading {
        lines.push(style("(drafting email...)").dim().to_string());
    }
    for (index, action) in view.actions.iter().enumerate() {
        lines.push(format!("  [{}] {}", index + 1, action.label));
    }
    (lines, view.messages.len())
}

fn format_message(message: &Message) -> String {
    match message.sender {
        Sender::Bot => format!("{} {}", style("bot >").yellow().bold(), message.text),
        Sender::User => format!("{} {}", style("you >").cyan(), message.text),
    }
}

#[cfg(test)]
mod tests {
    use statbot_core::{update, AppState, Category, Msg};

    use super::*;

    fn logged_in() -> AppState {
        let (state, _) = update(AppState::new(), Msg::WidgetToggled);
        let (state, _) = update(
            state,
            Msg::LoginSubmitted {
                username: "u".to_string(),
                password: "p".to_string(),
            },
        );
        let (state, _) = update(
            state,
            Msg::LoginSucceeded {
                token: "t".to_string(),
            },
        );
        state
    }

    #[test]
    fn closed_widget_shows_hint_only() {
        let (lines, shown) = frame_lines(&AppViewModel::default(), 0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Chat closed"));
        assert_eq!(shown, 0);
    }

    #[test]
    fn login_prompt_follows_greeting() {
        let (state, _) = update(AppState::new(), Msg::WidgetToggled);
        let (lines, shown) = frame_lines(&state.view(), 0);
        assert!(lines[0].contains("Hi there! How can I help you?"));
        assert!(lines[1].contains("Please login to continue"));
        assert_eq!(shown, 1);
    }

    #[test]
    fn messages_are_printed_once() {
        let state = logged_in();
        let (_, shown) = frame_lines(&state.view(), 0);

        let (state, _) = update(state, Msg::CategorySelected(Category::Returns));
        let (lines, shown) = frame_lines(&state.view(), shown);

        assert!(lines[0].contains("Show me info about returns"));
        assert!(lines[1].contains("Choose the time range"));
        assert!(lines.iter().any(|l| l.contains("fetching data")));
        assert!(lines.iter().any(|l| l.contains("[4] Go Back")));
        assert!(!lines.iter().any(|l| l.contains("Hi there!")));
        assert_eq!(shown, state.transcript().len());
    }
}
