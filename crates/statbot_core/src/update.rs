use statbot_logging::{bot_debug, bot_error, bot_info, bot_warn};

use crate::state::WizardState;
use crate::{
    build_email_prompt, shape_data_lines, AppState, Category, Effect, FetchStatus, Message, Msg,
    RequestId, StatsResult, TimeFrame, WizardStep, TIME_RANGE_PROMPT,
};

const HELLO_REPLY: &str = "Hi there!";
const FALLBACK_REPLY: &str = "I'm not sure how to respond to that.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::WidgetToggled => {
            state.toggle_open();
            Vec::new()
        }
        Msg::LoginSubmitted { username, password } => {
            if state.is_logged_in() || state.login_pending() {
                return (state, Vec::new());
            }
            state.begin_login();
            vec![Effect::RequestToken { username, password }]
        }
        Msg::LoginSucceeded { token } => {
            if state.login_pending() {
                bot_info!("Login succeeded; session started");
                state.complete_login(token);
            } else {
                bot_warn!("Ignoring token that arrived without a pending login");
            }
            Vec::new()
        }
        Msg::LoginFailed { reason } => {
            bot_error!("Login failed: {}", reason);
            if state.login_pending() {
                state.abort_login();
            }
            Vec::new()
        }
        Msg::CategorySelected(category) => select_category(&mut state, category),
        Msg::StatsLoaded { request_id, items } => {
            apply_stats(&mut state, request_id, Ok(items));
            Vec::new()
        }
        Msg::StatsFailed { request_id, reason } => {
            apply_stats(&mut state, request_id, Err(reason));
            Vec::new()
        }
        Msg::TimeFrameSelected(time_frame) => {
            select_time_frame(&mut state, time_frame);
            Vec::new()
        }
        Msg::GoBack => {
            go_back(&mut state);
            Vec::new()
        }
        Msg::GenerateEmailClicked => generate_email(&mut state),
        Msg::EmailDrafted { request_id, text } => {
            apply_email(&mut state, request_id, Ok(text));
            Vec::new()
        }
        Msg::EmailFailed { request_id, reason } => {
            apply_email(&mut state, request_id, Err(reason));
            Vec::new()
        }
        Msg::ChatSubmitted(text) => {
            reply_to_chat(&mut state, text);
            Vec::new()
        }
    };

    (state, effects)
}

fn select_category(state: &mut AppState, category: Category) -> Vec<Effect> {
    if state.step() != Some(WizardStep::CategorySelect) {
        bot_debug!("Category {} ignored outside category step", category.key());
        return Vec::new();
    }
    let Some(token) = state.session().map(|s| s.token().to_string()) else {
        return Vec::new();
    };

    state.wizard.category = Some(category);
    state.push_message(Message::user(category.prompt()));
    state.push_message(Message::bot(TIME_RANGE_PROMPT));

    // Stats from an earlier category must never be shaped for this one.
    state.stats.clear();
    state.stats_status = FetchStatus::Loading;
    let request_id = state.next_request_id();
    state.pending_stats = Some(request_id);
    state.wizard.step = WizardStep::TimeFrameSelect;

    vec![Effect::FetchStats {
        request_id,
        token,
        category,
    }]
}

fn apply_stats(state: &mut AppState, request_id: RequestId, result: Result<StatsResult, String>) {
    if state.pending_stats != Some(request_id) {
        bot_debug!("Discarding stale stats response for request {}", request_id);
        return;
    }
    state.pending_stats = None;
    match result {
        Ok(items) => {
            bot_info!("Stats request {} returned {} items", request_id, items.len());
            state.stats = items;
            state.stats_status = FetchStatus::Ready;
        }
        Err(reason) => {
            bot_error!("Stats request {} failed: {}", request_id, reason);
            state.stats_status = FetchStatus::Failed;
        }
    }
    state.mark_dirty();
}

fn select_time_frame(state: &mut AppState, time_frame: TimeFrame) {
    if state.step() != Some(WizardStep::TimeFrameSelect) {
        bot_debug!("Time frame {} ignored outside time frame step", time_frame.key());
        return;
    }
    let Some(category) = state.wizard.category else {
        return;
    };

    state.wizard.time_frame = Some(time_frame);
    state.push_message(Message::user(time_frame.prompt()));
    state.push_message(Message::bot(format!(
        "Here are the {} data for {}",
        category.label(),
        time_frame.label()
    )));

    let lines = shape_data_lines(&state.stats, time_frame);
    for line in &lines {
        state.push_message(Message::bot(line.clone()));
    }
    state.wizard.email_lines = lines;
    state.wizard.step = WizardStep::EmailGenerate;
}

fn go_back(state: &mut AppState) {
    match state.step() {
        Some(WizardStep::TimeFrameSelect) => {
            if state.pending_stats.take().is_some() {
                state.stats_status = FetchStatus::Idle;
            }
            state.wizard.time_frame = None;
            state.wizard.step = WizardStep::CategorySelect;
            state.mark_dirty();
        }
        Some(WizardStep::EmailGenerate) => {
            if let Some(request_id) = state.pending_email.take() {
                bot_debug!("Abandoning email draft for request {}", request_id);
            }
            state.email_status = FetchStatus::Idle;
            state.wizard.email_lines.clear();
            state.wizard.step = WizardStep::TimeFrameSelect;
            state.mark_dirty();
        }
        Some(WizardStep::CategorySelect) | None => {}
    }
}

fn generate_email(state: &mut AppState) -> Vec<Effect> {
    if state.step() != Some(WizardStep::EmailGenerate) {
        return Vec::new();
    }
    if state.pending_email.is_some() {
        bot_debug!("Email draft already in flight; ignoring click");
        return Vec::new();
    }
    let WizardState {
        category: Some(category),
        time_frame: Some(time_frame),
        email_lines,
        ..
    } = &state.wizard
    else {
        return Vec::new();
    };

    let prompt = build_email_prompt(*category, *time_frame, email_lines);
    bot_debug!("Email prompt:\n{}", prompt);
    let request_id = state.next_request_id();
    state.pending_email = Some(request_id);
    state.email_status = FetchStatus::Loading;
    state.mark_dirty();

    vec![Effect::DraftEmail { request_id, prompt }]
}

fn apply_email(state: &mut AppState, request_id: RequestId, result: Result<String, String>) {
    if state.pending_email != Some(request_id) {
        bot_debug!("Discarding stale email draft for request {}", request_id);
        return;
    }
    state.pending_email = None;
    match result {
        Ok(text) => {
            state.email_status = FetchStatus::Ready;
            state.push_message(Message::bot(text));
        }
        Err(reason) => {
            bot_error!("Email draft {} failed: {}", request_id, reason);
            state.email_status = FetchStatus::Failed;
            state.mark_dirty();
        }
    }
}

fn reply_to_chat(state: &mut AppState, text: String) {
    if !state.is_logged_in() || text.trim().is_empty() {
        return;
    }
    let reply = if text.to_lowercase().contains("hello") {
        HELLO_REPLY
    } else {
        FALLBACK_REPLY
    };
    state.push_message(Message::user(text));
    state.push_message(Message::bot(reply));
}
