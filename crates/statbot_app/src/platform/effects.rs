use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use statbot_core::{Effect, Msg};
use statbot_engine::{EngineCommand, EngineEvent, EngineHandle};
use statbot_logging::{bot_info, bot_warn};

use super::Inbound;

pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(engine: EngineHandle, inbound_tx: mpsc::Sender<Inbound>) -> Self {
        let runner = Self { engine };
        runner.spawn_event_loop(inbound_tx);
        runner
    }

    pub(crate) fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.engine.submit(to_command(effect));
        }
    }

    fn spawn_event_loop(&self, inbound_tx: mpsc::Sender<Inbound>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
                if inbound_tx.send(Inbound::Msg(to_msg(event))).is_err() {
                    break;
                }
            }
        });
    }
}

fn to_command(effect: Effect) -> EngineCommand {
    match effect {
        Effect::RequestToken { username, password } => {
            bot_info!("RequestToken user_len={}", username.len());
            EngineCommand::Login { username, password }
        }
        Effect::FetchStats {
            request_id,
            token,
            category,
        } => {
            bot_info!("FetchStats request_id={} stats={}", request_id, category.key());
            EngineCommand::FetchStats {
                request_id,
                token,
                category,
            }
        }
        Effect::DraftEmail { request_id, prompt } => {
            bot_info!("DraftEmail request_id={} prompt_len={}", request_id, prompt.len());
            EngineCommand::DraftEmail { request_id, prompt }
        }
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LoginCompleted { result } => match result {
            Ok(token) => Msg::LoginSucceeded { token },
            Err(err) => Msg::LoginFailed {
                reason: err.to_string(),
            },
        },
        EngineEvent::StatsCompleted { request_id, result } => match result {
            Ok(items) => Msg::StatsLoaded { request_id, items },
            Err(err) => {
                bot_warn!("Stats request {} failed: {}", request_id, err);
                Msg::StatsFailed {
                    request_id,
                    reason: err.to_string(),
                }
            }
        },
        EngineEvent::EmailCompleted { request_id, result } => match result {
            Ok(text) => Msg::EmailDrafted { request_id, text },
            Err(err) => {
                bot_warn!("Email draft {} failed: {}", request_id, err);
                Msg::EmailFailed {
                    request_id,
                    reason: err.to_string(),
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use statbot_core::Category;
    use statbot_engine::{FailureKind, FetchError};

    use super::*;

    #[test]
    fn effects_become_engine_commands() {
        assert_eq!(
            to_command(Effect::FetchStats {
                request_id: 4,
                token: "tok".to_string(),
                category: Category::Returns,
            }),
            EngineCommand::FetchStats {
                request_id: 4,
                token: "tok".to_string(),
                category: Category::Returns,
            }
        );
    }

    #[test]
    fn failures_become_failure_messages() {
        let msg = to_msg(EngineEvent::EmailCompleted {
            request_id: 2,
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "Internal Server Error".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::EmailFailed {
                request_id: 2,
                reason: "http status 500: Internal Server Error".to_string(),
            }
        );
    }

    #[test]
    fn token_becomes_login_success() {
        let msg = to_msg(EngineEvent::LoginCompleted {
            result: Ok("tok".to_string()),
        });
        assert_eq!(
            msg,
            Msg::LoginSucceeded {
                token: "tok".to_string()
            }
        );
    }
}
