use std::sync::Once;

use statbot_core::{
    build_email_prompt, update, AppState, Category, Effect, FetchStatus, Message, Msg, RangeEntry,
    RequestId, StatsItem, TimeFrame, TimeFrameData,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(statbot_logging::initialize_for_tests);
}

/// Drives a logged-in session to the email step for RECEIPTS / last 7 days.
fn at_email_step() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::LoginSubmitted {
            username: "user".to_string(),
            password: "pass".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::LoginSucceeded {
            token: "tok".to_string(),
        },
    );
    let (state, effects) = update(state, Msg::CategorySelected(Category::Receipts));
    let Some(Effect::FetchStats { request_id, .. }) = effects.into_iter().next() else {
        panic!("expected fetch stats effect");
    };
    let items = vec![StatsItem {
        label: "Received".to_string(),
        event: "RECEIVE".to_string(),
        range: vec![RangeEntry {
            last7days: Some(TimeFrameData {
                data: Some(9.0),
                ..TimeFrameData::default()
            }),
            ..RangeEntry::default()
        }],
    }];
    let (state, _) = update(state, Msg::StatsLoaded { request_id, items });
    let (state, _) = update(state, Msg::TimeFrameSelected(TimeFrame::Last7Days));
    state
}

fn click_generate(state: AppState) -> (AppState, RequestId, String) {
    let (state, effects) = update(state, Msg::GenerateEmailClicked);
    match effects.as_slice() {
        [Effect::DraftEmail { request_id, prompt }] => (state, *request_id, prompt.clone()),
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn prompt_wraps_data_lines_in_letter_template() {
    let prompt = build_email_prompt(
        Category::Shipments,
        TimeFrame::Today,
        &["A, Data: 1".to_string(), "B, Data: No data".to_string()],
    );

    assert_eq!(
        prompt,
        "Generate a professional email based on the following email. \n\n\
         Dear Sir/Madam, \n\n\
         I am writing to inform you that the data for the SHIPMENTS for the today is as follows: \n\n\
         A, Data: 1\nB, Data: No data\n\n\
         Thank you. \n\nSincerely, \n\nYour Name Here"
    );
}

#[test]
fn generate_email_requests_draft_with_collected_lines() {
    init_logging();
    let state = at_email_step();

    let (state, _request_id, prompt) = click_generate(state);

    assert!(prompt.contains("the data for the RECEIPTS for the last7days is as follows"));
    assert!(prompt.contains("Received, Data: 9"));
    assert_eq!(state.view().email_status, FetchStatus::Loading);
}

#[test]
fn drafted_email_is_appended_as_bot_message() {
    init_logging();
    let (state, request_id, _) = click_generate(at_email_step());

    let (state, effects) = update(
        state,
        Msg::EmailDrafted {
            request_id,
            text: "Dear team, receipts are up.".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.transcript().last(),
        Some(&Message::bot("Dear team, receipts are up."))
    );
    assert_eq!(state.view().email_status, FetchStatus::Ready);
}

#[test]
fn failed_draft_appends_nothing() {
    init_logging();
    let (state, request_id, _) = click_generate(at_email_step());
    let transcript_len = state.transcript().len();

    let (state, effects) = update(
        state,
        Msg::EmailFailed {
            request_id,
            reason: "http status 500".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.transcript().len(), transcript_len);
    assert_eq!(state.view().email_status, FetchStatus::Failed);
}

#[test]
fn second_click_while_drafting_is_ignored() {
    init_logging();
    let (state, request_id, _) = click_generate(at_email_step());
    let (state, effects) = update(state, Msg::GenerateEmailClicked);
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::EmailDrafted {
            request_id,
            text: "done".to_string(),
        },
    );
    let (_state, effects) = update(state, Msg::GenerateEmailClicked);
    assert_eq!(effects.len(), 1);
}

#[test]
fn unknown_draft_results_are_discarded() {
    init_logging();
    let state = at_email_step();
    let before = state.transcript().len();

    let (state, _) = update(
        state,
        Msg::EmailDrafted {
            request_id: 999,
            text: "stray".to_string(),
        },
    );

    assert_eq!(state.transcript().len(), before);
}

#[test]
fn generate_email_only_in_last_step() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::GenerateEmailClicked);
    assert!(effects.is_empty());
    assert!(state.transcript().is_empty());
}

#[test]
fn draft_abandoned_by_go_back_is_not_appended_to_new_selection() {
    init_logging();
    let (state, old_request, _) = click_generate(at_email_step());

    let (state, _) = update(state, Msg::GoBack);
    assert_eq!(state.view().email_status, FetchStatus::Idle);
    let (state, _) = update(state, Msg::GoBack);
    let (state, effects) = update(state, Msg::CategorySelected(Category::Returns));
    let Some(Effect::FetchStats { request_id, .. }) = effects.into_iter().next() else {
        panic!("expected fetch stats effect");
    };
    let (state, _) = update(
        state,
        Msg::StatsLoaded {
            request_id,
            items: Vec::new(),
        },
    );
    let (state, _) = update(state, Msg::TimeFrameSelected(TimeFrame::Last30Days));

    let (state, new_request, prompt) = click_generate(state);
    assert_ne!(new_request, old_request);
    assert!(prompt.contains("RETURNS"));

    let before = state.transcript().to_vec();
    let (state, _) = update(
        state,
        Msg::EmailDrafted {
            request_id: old_request,
            text: "RECEIPTS last7days email".to_string(),
        },
    );
    assert_eq!(state.transcript(), before.as_slice());
    assert_eq!(state.view().email_status, FetchStatus::Loading);

    let (state, _) = update(
        state,
        Msg::EmailDrafted {
            request_id: new_request,
            text: "RETURNS last30days email".to_string(),
        },
    );
    assert_eq!(
        state.transcript().last(),
        Some(&Message::bot("RETURNS last30days email"))
    );
}
