//! Terminal platform layer: input, effect execution and rendering.
mod app;
mod effects;
mod input;
mod render;

pub use app::run_app;

/// Everything the main loop reacts to.
#[derive(Debug)]
pub(crate) enum Inbound {
    /// A raw line typed by the user.
    Line(String),
    /// A message produced outside the input path (engine completions).
    Msg(statbot_core::Msg),
    /// Standard input closed.
    Quit,
}
