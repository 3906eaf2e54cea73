use crate::view_model::{actions_for, AppViewModel};
use crate::{Category, StatsResult, TimeFrame};

pub type RequestId = u64;

pub const GREETING: &str = "Hi there! How can I help you?";
pub const TIME_RANGE_PROMPT: &str = "Choose the time range";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    CategorySelect,
    TimeFrameSelect,
    EmailGenerate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Bearer token obtained through the credential proxy. Lives for the process only.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct WizardState {
    pub(crate) step: WizardStep,
    pub(crate) category: Option<Category>,
    pub(crate) time_frame: Option<TimeFrame>,
    pub(crate) email_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    open: bool,
    greeted: bool,
    login_pending: bool,
    session: Option<Session>,
    pub(crate) wizard: WizardState,
    transcript: Vec<Message>,
    last_request_id: RequestId,
    pub(crate) pending_stats: Option<RequestId>,
    pub(crate) pending_email: Option<RequestId>,
    pub(crate) stats: StatsResult,
    pub(crate) stats_status: FetchStatus,
    pub(crate) email_status: FetchStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let step = self.session.as_ref().map(|_| self.wizard.step);
        AppViewModel {
            open: self.open,
            logged_in: self.session.is_some(),
            login_pending: self.login_pending,
            step,
            messages: self.transcript.clone(),
            actions: step.map(actions_for).unwrap_or_default(),
            selected_category: self.wizard.category,
            selected_time_frame: self.wizard.time_frame,
            stats_status: self.stats_status,
            email_status: self.email_status,
            dirty: self.dirty,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn login_pending(&self) -> bool {
        self.login_pending
    }

    /// Current wizard step, or `None` while awaiting login.
    pub fn step(&self) -> Option<WizardStep> {
        self.session.as_ref().map(|_| self.wizard.step)
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.wizard.category
    }

    pub fn selected_time_frame(&self) -> Option<TimeFrame> {
        self.wizard.time_frame
    }

    /// Lines collected for the email body; empty outside the last step.
    pub fn email_lines(&self) -> &[String] {
        &self.wizard.email_lines
    }

    pub fn stats(&self) -> &StatsResult {
        &self.stats
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn push_message(&mut self, message: Message) {
        self.transcript.push(message);
        self.mark_dirty();
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    /// Flips the widget open/closed; greets exactly once per session.
    pub(crate) fn toggle_open(&mut self) {
        self.open = !self.open;
        if !self.greeted {
            self.greeted = true;
            self.transcript.push(Message::bot(GREETING));
        }
        self.mark_dirty();
    }

    pub(crate) fn begin_login(&mut self) {
        self.login_pending = true;
        self.mark_dirty();
    }

    pub(crate) fn complete_login(&mut self, token: String) {
        self.login_pending = false;
        self.session = Some(Session::new(token));
        self.wizard = WizardState::default();
        self.mark_dirty();
    }

    pub(crate) fn abort_login(&mut self) {
        self.login_pending = false;
        self.mark_dirty();
    }
}
