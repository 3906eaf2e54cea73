#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User clicked the widget launcher (open or close).
    WidgetToggled,
    /// User submitted the login form.
    LoginSubmitted { username: String, password: String },
    /// Token request returned a bearer token.
    LoginSucceeded { token: String },
    /// Token request failed; swallowed after logging.
    LoginFailed { reason: String },
    /// User picked a data category (step 1).
    CategorySelected(crate::Category),
    /// Stats request completed.
    StatsLoaded {
        request_id: crate::RequestId,
        items: crate::StatsResult,
    },
    /// Stats request failed.
    StatsFailed {
        request_id: crate::RequestId,
        reason: String,
    },
    /// User picked a time frame (step 2).
    TimeFrameSelected(crate::TimeFrame),
    /// User clicked Go Back.
    GoBack,
    /// User clicked Generate Email (step 3).
    GenerateEmailClicked,
    /// Email drafter returned generated text.
    EmailDrafted {
        request_id: crate::RequestId,
        text: String,
    },
    /// Email drafter failed.
    EmailFailed {
        request_id: crate::RequestId,
        reason: String,
    },
    /// User typed free text into the chat box.
    ChatSubmitted(String),
}
