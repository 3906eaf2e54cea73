use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use statbot_logging::{bot_debug, bot_warn};

use crate::{
    BackendClient, EmailDrafter, EngineCommand, EngineConfig, EngineEvent, FetchError, StatsClient,
    StatsSource, TokenSource,
};

/// The outbound collaborators the engine drives.
#[derive(Clone)]
pub struct Services {
    pub tokens: Arc<dyn TokenSource>,
    pub stats: Arc<dyn StatsSource>,
    pub drafter: Arc<dyn EmailDrafter>,
}

impl Services {
    pub fn from_config(config: &EngineConfig) -> Result<Self, FetchError> {
        let backend = Arc::new(BackendClient::new(&config.backend_url, &config.fetch)?);
        let stats = Arc::new(StatsClient::new(
            &config.stats_url,
            config.network_id,
            &config.fetch,
        )?);
        Ok(Self {
            tokens: backend.clone(),
            stats,
            drafter: backend,
        })
    }
}

/// Runs commands on a background tokio runtime and reports completions.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(services: Services) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let services = services.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(&services, command).await;
                    if event_tx.send(event).is_err() {
                        bot_warn!("Engine event dropped; receiver gone");
                    }
                });
            }
            bot_debug!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn submit(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            bot_warn!("Engine worker stopped; command dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(services: &Services, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Login { username, password } => EngineEvent::LoginCompleted {
            result: services.tokens.login(&username, &password).await,
        },
        EngineCommand::FetchStats {
            request_id,
            token,
            category,
        } => EngineEvent::StatsCompleted {
            request_id,
            result: services.stats.fetch_stats(&token, category).await,
        },
        EngineCommand::DraftEmail { request_id, prompt } => EngineEvent::EmailCompleted {
            request_id,
            result: services.drafter.draft_email(&prompt).await,
        },
    }
}
