use statbot_core::{AppViewModel, Msg};

pub(crate) const LOGIN_USAGE: &str = "Usage: login <username> <password>";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    /// Input that needs the widget open.
    Closed,
    Usage(&'static str),
    Nothing,
}

/// Maps one typed line to a command, resolving numbered choices against the current view.
pub(crate) fn parse_command(line: &str, view: &AppViewModel) -> Command {
    let trimmed = line.trim();
    let mut words = trimmed.split_whitespace();
    let Some(first) = words.next() else {
        return Command::Nothing;
    };

    match first.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Command::Quit,
        "help" | "?" => return Command::Help,
        "open" | "close" | "toggle" => return Command::Dispatch(Msg::WidgetToggled),
        _ => {}
    }
    if !view.open {
        return Command::Closed;
    }

    match first.to_ascii_lowercase().as_str() {
        "login" => match (words.next(), words.next()) {
            (Some(username), Some(password)) => Command::Dispatch(Msg::LoginSubmitted {
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => Command::Usage(LOGIN_USAGE),
        },
        "back" => Command::Dispatch(Msg::GoBack),
        "email" => Command::Dispatch(Msg::GenerateEmailClicked),
        _ => match trimmed.parse::<usize>() {
            Ok(choice) if choice >= 1 && choice <= view.actions.len() => {
                Command::Dispatch(view.actions[choice - 1].msg.clone())
            }
            _ => Command::Dispatch(Msg::ChatSubmitted(trimmed.to_string())),
        },
    }
}
