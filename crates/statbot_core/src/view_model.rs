use crate::{Category, FetchStatus, Message, Msg, TimeFrame, WizardStep};

pub const GO_BACK_LABEL: &str = "Go Back";
pub const GENERATE_EMAIL_LABEL: &str = "Generate Email";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub open: bool,
    pub logged_in: bool,
    pub login_pending: bool,
    /// `None` while awaiting login.
    pub step: Option<WizardStep>,
    pub messages: Vec<Message>,
    pub actions: Vec<ActionView>,
    pub selected_category: Option<Category>,
    pub selected_time_frame: Option<TimeFrame>,
    pub stats_status: FetchStatus,
    pub email_status: FetchStatus,
    pub dirty: bool,
}

/// A button offered in the current step and the message it dispatches.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionView {
    pub label: String,
    pub msg: Msg,
}

impl ActionView {
    fn new(label: impl Into<String>, msg: Msg) -> Self {
        Self {
            label: label.into(),
            msg,
        }
    }
}

pub(crate) fn actions_for(step: WizardStep) -> Vec<ActionView> {
    match step {
        WizardStep::CategorySelect => Category::ALL
            .into_iter()
            .map(|c| ActionView::new(c.prompt(), Msg::CategorySelected(c)))
            .collect(),
        WizardStep::TimeFrameSelect => TimeFrame::ALL
            .into_iter()
            .map(|t| ActionView::new(t.prompt(), Msg::TimeFrameSelected(t)))
            .chain(std::iter::once(ActionView::new(GO_BACK_LABEL, Msg::GoBack)))
            .collect(),
        WizardStep::EmailGenerate => vec![
            ActionView::new(GENERATE_EMAIL_LABEL, Msg::GenerateEmailClicked),
            ActionView::new(GO_BACK_LABEL, Msg::GoBack),
        ],
    }
}
