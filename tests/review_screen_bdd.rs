//! Behavioural tests for the application review screen.

use bubbletea_rs::Model;
use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use triage::review::test_support::pending_applicants;
use triage::review::{RecordId, Status, TargetStatus, default_records};
use triage::tui::ScreenSettings;
use triage::tui::app::ReviewApp;
use triage::tui::messages::AppMsg;
use triage::tui::state::ScreenVariant;

#[derive(ScenarioState, Default)]
struct ReviewScenarioState {
    app: Slot<ReviewApp>,
    rendered_view: Slot<String>,
}

#[fixture]
fn review_state() -> ReviewScenarioState {
    ReviewScenarioState::default()
}

type StepResult = Result<(), Box<dyn std::error::Error>>;

fn parse_target(raw: &str) -> Result<TargetStatus, Box<dyn std::error::Error>> {
    match raw.trim_matches('"') {
        "accepted" => Ok(TargetStatus::Accepted),
        "rejected" => Ok(TargetStatus::Rejected),
        "review" => Ok(TargetStatus::Review),
        other => Err(format!("unsupported target status: {other}").into()),
    }
}

fn parse_key(key: &str) -> Result<KeyCode, Box<dyn std::error::Error>> {
    let normalized = key.trim_matches('"');
    let lower = normalized.to_ascii_lowercase();

    let key_code = match lower.as_str() {
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        _ => {
            let mut chars = normalized.chars();
            let Some(character) = chars.next() else {
                return Err("key token must not be empty".into());
            };
            if chars.next().is_some() {
                return Err(format!("unsupported key token: {normalized}").into());
            }
            KeyCode::Char(character)
        }
    };

    Ok(key_code)
}

fn send_key(state: &ReviewScenarioState, key_code: KeyCode) -> StepResult {
    let key_message = KeyMsg {
        key: key_code,
        modifiers: KeyModifiers::empty(),
    };

    state
        .app
        .with_mut(|app| {
            app.update(Box::new(key_message));
        })
        .ok_or("app should be initialised before sending input")?;

    Ok(())
}

fn send_message(state: &ReviewScenarioState, msg: &AppMsg) -> StepResult {
    state
        .app
        .with_mut(|app| {
            app.handle_message(msg);
        })
        .ok_or("app should be initialised before sending messages")?;
    Ok(())
}

fn group_ids(
    state: &ReviewScenarioState,
    group: fn(&ReviewApp) -> Vec<RecordId>,
) -> Result<Vec<RecordId>, Box<dyn std::error::Error>> {
    state
        .app
        .with_ref(group)
        .ok_or_else(|| "app should be initialised before inspecting groups".into())
}

fn record_field(
    state: &ReviewScenarioState,
    id: RecordId,
    field: fn(&triage::Record) -> String,
) -> Result<String, Box<dyn std::error::Error>> {
    state
        .app
        .with_ref(|app| app.screen().record(id).map(field))
        .ok_or("app should be initialised before inspecting records")?
        .ok_or_else(|| format!("no record with id {id}").into())
}

fn view_from_state(state: &ReviewScenarioState) -> Result<String, Box<dyn std::error::Error>> {
    state
        .rendered_view
        .with_ref(Clone::clone)
        .ok_or_else(|| "view should be rendered before assertions".into())
}

#[given("a review screen with {count:usize} pending applications")]
fn given_pending_screen(review_state: &ReviewScenarioState, count: usize) {
    review_state.app.set(ReviewApp::new(pending_applicants(count)));
}

#[given("a {variant} review screen with the seeded applications")]
fn given_variant_screen(review_state: &ReviewScenarioState, variant: String) -> StepResult {
    let parsed: ScreenVariant = variant.trim_matches('"').parse()?;
    let settings = ScreenSettings::default().with_variant(parsed);
    review_state
        .app
        .set(ReviewApp::with_settings(default_records(), settings).with_size(100, 30));
    Ok(())
}

#[when("application {id:u64} is reclassified as {status}")]
fn when_reclassified(review_state: &ReviewScenarioState, id: u64, status: String) -> StepResult {
    let target = parse_target(&status)?;
    send_message(review_state, &AppMsg::ReclassifyRecord { id, target })
}

#[when("editing starts on application {id:u64}")]
fn when_edit_starts(review_state: &ReviewScenarioState, id: u64) -> StepResult {
    send_message(review_state, &AppMsg::BeginEditRecord(id))
}

#[when("the edit buffers are set to {name} and {email}")]
fn when_buffers_set(review_state: &ReviewScenarioState, name: String, email: String) -> StepResult {
    let (name_len, email_len) = review_state
        .app
        .with_ref(|app| {
            app.screen()
                .editing()
                .map(|session| (session.name().chars().count(), session.email().chars().count()))
        })
        .ok_or("app should be initialised before editing")?
        .ok_or("an edit session should be open")?;

    for (length, text) in [(name_len, name), (email_len, email)] {
        for _ in 0..length {
            send_message(review_state, &AppMsg::EditBackspace)?;
        }
        for character in text.trim_matches('"').chars() {
            send_message(review_state, &AppMsg::EditInput(character))?;
        }
        send_message(review_state, &AppMsg::EditToggleField)?;
    }
    Ok(())
}

#[when("the edit is committed")]
fn when_edit_committed(review_state: &ReviewScenarioState) -> StepResult {
    send_message(review_state, &AppMsg::CommitEdit)
}

#[when("the user presses {key}")]
fn when_user_presses_key(review_state: &ReviewScenarioState, key: String) -> StepResult {
    let key_code = parse_key(&key)?;
    send_key(review_state, key_code)
}

#[when("the user types {text}")]
fn when_user_types(review_state: &ReviewScenarioState, text: String) -> StepResult {
    for character in text.trim_matches('"').chars() {
        send_key(review_state, KeyCode::Char(character))?;
    }
    Ok(())
}

#[when("the view is rendered")]
fn when_view_is_rendered(review_state: &ReviewScenarioState) -> StepResult {
    let view = review_state
        .app
        .with_ref(ReviewApp::view)
        .ok_or("app should be initialised before rendering view")?;
    review_state.rendered_view.set(view);
    Ok(())
}

#[then("the review group contains only application {id:u64}")]
fn then_review_group_is(review_state: &ReviewScenarioState, id: u64) -> StepResult {
    let ids = group_ids(review_state, |app| {
        app.screen().review_group().iter().map(|r| r.id).collect()
    })?;
    if ids != vec![id] {
        return Err(format!("expected review group [{id}], got {ids:?}").into());
    }
    Ok(())
}

#[then("the main table does not contain application {id:u64}")]
fn then_main_table_lacks(review_state: &ReviewScenarioState, id: u64) -> StepResult {
    let ids = group_ids(review_state, |app| {
        app.screen()
            .pending_for_display()
            .iter()
            .map(|r| r.id)
            .collect()
    })?;
    if ids.contains(&id) {
        return Err(format!("main table should not contain {id}: {ids:?}").into());
    }
    Ok(())
}

#[then("the filtered set contains application {id:u64}")]
fn then_filtered_contains(review_state: &ReviewScenarioState, id: u64) -> StepResult {
    let ids = group_ids(review_state, |app| {
        app.screen().filtered().iter().map(|r| r.id).collect()
    })?;
    if !ids.contains(&id) {
        return Err(format!("filtered set should contain {id}: {ids:?}").into());
    }
    Ok(())
}

#[then("the accepted group does not contain application {id:u64}")]
fn then_accepted_lacks(review_state: &ReviewScenarioState, id: u64) -> StepResult {
    let ids = group_ids(review_state, |app| {
        app.screen().accepted_group().iter().map(|r| r.id).collect()
    })?;
    if ids.contains(&id) {
        return Err(format!("accepted group should not contain {id}: {ids:?}").into());
    }
    Ok(())
}

#[then("application {id:u64} has status {status}")]
fn then_status_is(review_state: &ReviewScenarioState, id: u64, status: String) -> StepResult {
    let expected = Status::from(parse_target(&status)?);
    let actual = review_state
        .app
        .with_ref(|app| app.screen().record(id).map(|record| record.status))
        .ok_or("app should be initialised before inspecting records")?;
    if actual != Some(expected) {
        return Err(format!("expected {expected:?} for {id}, got {actual:?}").into());
    }
    Ok(())
}

#[then("application {id:u64} is named {name}")]
fn then_named(review_state: &ReviewScenarioState, id: u64, name: String) -> StepResult {
    let expected = name.trim_matches('"');
    let actual = record_field(review_state, id, |record| record.name.clone())?;
    if actual != expected {
        return Err(format!("expected name '{expected}', got '{actual}'").into());
    }
    Ok(())
}

#[then("the edit session belongs to application {id:u64}")]
fn then_session_for(review_state: &ReviewScenarioState, id: u64) -> StepResult {
    let editing = review_state
        .app
        .with_ref(|app| app.screen().editing().map(|session| session.record_id()))
        .ok_or("app should be initialised before inspecting the edit session")?;
    if editing != Some(id) {
        return Err(format!("expected session for {id}, got {editing:?}").into());
    }
    Ok(())
}

#[then("no edit session is open")]
fn then_no_session(review_state: &ReviewScenarioState) -> StepResult {
    let open = review_state
        .app
        .with_ref(|app| app.screen().editing().is_some())
        .ok_or("app should be initialised before inspecting the edit session")?;
    if open {
        return Err("expected no edit session".into());
    }
    Ok(())
}

#[then("the notification title is {title}")]
fn then_notification_title(review_state: &ReviewScenarioState, title: String) -> StepResult {
    let expected = title.trim_matches('"');
    let actual = review_state
        .app
        .with_ref(|app| {
            app.current_notification()
                .map(|notification| notification.title().to_owned())
        })
        .ok_or("app should be initialised before inspecting notifications")?
        .ok_or("expected a notification to be visible")?;
    if actual != expected {
        return Err(format!("expected title '{expected}', got '{actual}'").into());
    }
    Ok(())
}

#[then("the notification body is {body}")]
fn then_notification_body(review_state: &ReviewScenarioState, body: String) -> StepResult {
    let expected = body.trim_matches('"');
    let actual = review_state
        .app
        .with_ref(|app| {
            app.current_notification()
                .map(|notification| notification.body().to_owned())
        })
        .ok_or("app should be initialised before inspecting notifications")?
        .ok_or("expected a notification to be visible")?;
    if actual != expected {
        return Err(format!("expected body '{expected}', got '{actual}'").into());
    }
    Ok(())
}

#[then("the view contains {text}")]
fn then_view_contains(review_state: &ReviewScenarioState, text: String) -> StepResult {
    let expected = text.trim_matches('"');
    let view = view_from_state(review_state)?;
    if !view.contains(expected) {
        return Err(format!("expected view to contain '{expected}', got:\n{view}").into());
    }
    Ok(())
}

#[then("the view does not contain {text}")]
fn then_view_lacks(review_state: &ReviewScenarioState, text: String) -> StepResult {
    let unexpected = text.trim_matches('"');
    let view = view_from_state(review_state)?;
    if view.contains(unexpected) {
        return Err(format!("expected view to omit '{unexpected}', got:\n{view}").into());
    }
    Ok(())
}

#[scenario(path = "tests/features/review_screen.feature", index = 0)]
fn flagging_for_review_moves_record(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_screen.feature", index = 1)]
fn reclassifying_twice_keeps_latest_status(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_screen.feature", index = 2)]
fn second_edit_discards_first(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_screen.feature", index = 3)]
fn committing_edit_updates_record(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_screen.feature", index = 4)]
fn cancelling_edit_leaves_record(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_screen.feature", index = 5)]
fn search_narrows_main_table(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_screen.feature", index = 6)]
fn classic_rejection_is_junk(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_screen.feature", index = 7)]
fn unmatched_search_shows_empty_message(review_state: ReviewScenarioState) {
    let _ = review_state;
}
