//! Statbot core: pure wizard state machine, response shaping and view-model helpers.
mod catalog;
mod effect;
mod email;
mod msg;
mod shaper;
mod state;
mod stats;
mod update;
mod view_model;

pub use catalog::{Category, TimeFrame};
pub use effect::Effect;
pub use email::build_email_prompt;
pub use msg::Msg;
pub use shaper::shape_data_lines;
pub use state::{
    AppState, FetchStatus, Message, RequestId, Sender, Session, WizardStep, GREETING,
    TIME_RANGE_PROMPT,
};
pub use stats::{RangeEntry, StatsItem, StatsResult, TimeFrameData};
pub use update::update;
pub use view_model::{ActionView, AppViewModel, GENERATE_EMAIL_LABEL, GO_BACK_LABEL};
