use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use statbot_core::{update, AppState, Msg};
use statbot_engine::{EngineConfig, EngineHandle, Services};
use statbot_logging::{bot_debug, bot_info, level_from_name, LogDestination};

use super::effects::EffectRunner;
use super::input::{parse_command, Command};
use super::render::Renderer;
use super::Inbound;

pub fn run_app() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    statbot_logging::initialize(
        LogDestination::default(),
        level_from_name(std::env::var("STATBOT_LOG").ok().as_deref()),
    );

    let config = EngineConfig::from_env()?;
    bot_info!(
        "Starting statbot with backend {} and stats endpoint {}",
        config.backend_url,
        config.stats_url
    );
    let engine = EngineHandle::new(Services::from_config(&config)?)?;

    let (inbound_tx, inbound_rx) = mpsc::channel::<Inbound>();
    let effects = EffectRunner::new(engine, inbound_tx.clone());
    spawn_stdin_reader(inbound_tx);

    let mut app = App::new(effects);
    app.run(inbound_rx)?;
    Ok(())
}

fn spawn_stdin_reader(inbound_tx: mpsc::Sender<Inbound>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if inbound_tx.send(Inbound::Line(line)).is_err() {
                return;
            }
        }
        let _ = inbound_tx.send(Inbound::Quit);
    });
}

struct App {
    state: AppState,
    effects: EffectRunner,
    renderer: Renderer,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
            renderer: Renderer::new(),
        }
    }

    fn run(&mut self, inbound_rx: mpsc::Receiver<Inbound>) -> io::Result<()> {
        self.renderer.help()?;
        self.renderer.render(&self.state.view())?;

        while let Ok(inbound) = inbound_rx.recv() {
            match inbound {
                Inbound::Line(line) => match parse_command(&line, &self.state.view()) {
                    Command::Dispatch(msg) => self.dispatch_msg(msg)?,
                    Command::Help => self.renderer.help()?,
                    Command::Closed => self.renderer.notice("Type `open` to show the chat.")?,
                    Command::Usage(text) => self.renderer.notice(text)?,
                    Command::Quit => break,
                    Command::Nothing => {}
                },
                Inbound::Msg(msg) => self.dispatch_msg(msg)?,
                Inbound::Quit => break,
            }
        }
        bot_info!("Input closed; shutting down");
        Ok(())
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        if !effects.is_empty() {
            bot_debug!("Dispatching {} effects", effects.len());
            self.effects.enqueue(effects);
        }
        if was_dirty {
            self.renderer.render(&view)?;
        }
        Ok(())
    }
}
