use super::*;

use crate::net::types::ActivityList as ActivityListData;
use crate::state::session::SessionState;

const BOARD: &str = r#"{
    "Chess Club": {
        "description": "Play chess",
        "schedule": "Fri 3pm",
        "max_participants": 10,
        "participants": ["a@x.com"]
    },
    "Art": {
        "description": "Painting",
        "schedule": "Mon 4pm",
        "max_participants": 5,
        "participants": []
    },
    "Drama": {
        "description": "Stage",
        "schedule": "Wed 5pm",
        "max_participants": 3,
        "participants": ["b@x.com", "c@x.com"]
    }
}"#;

fn loaded(json: &str) -> ActivitiesState {
    let mut state = ActivitiesState::default();
    state.items = serde_json::from_str::<ActivityListData>(json).unwrap();
    state.status = LoadStatus::Loaded;
    state
}

fn teacher() -> SessionState {
    let mut session = SessionState::default();
    session.login_succeeded("teacher".to_owned(), "Basic dGVhY2hlcjpzZWNyZXQ=".to_owned());
    session
}

fn render(state: ActivitiesState, session: SessionState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(state));
        provide_context(RwSignal::new(session));
        let on_unregister = Callback::new(|_: (String, String)| {});
        view! { <ActivityList on_unregister=on_unregister/> }.to_html()
    })
}

#[test]
fn renders_one_card_per_activity() {
    let html = render(loaded(BOARD), SessionState::default());
    assert_eq!(html.matches(r#"class="activity-card""#).count(), 3);
    assert_eq!(render(loaded("{}"), SessionState::default()).matches(r#"class="activity-card""#).count(), 0);
}

#[test]
fn cards_keep_backend_order() {
    let html = render(loaded(BOARD), SessionState::default());
    let chess = html.find("Chess Club").unwrap();
    let art = html.find("Art").unwrap();
    let drama = html.find("Drama").unwrap();
    assert!(chess < art && art < drama);
}

#[test]
fn chess_club_shows_spots_left_and_one_participant() {
    let json = r#"{"Chess Club": {"description": "Play chess", "schedule": "Fri 3pm",
        "max_participants": 10, "participants": ["a@x.com"]}}"#;
    let html = render(loaded(json), SessionState::default());
    assert!(html.contains("9 spots left"));
    assert!(html.contains("Fri 3pm"));
    assert_eq!(html.matches(r#"class="participant-email""#).count(), 1);
    assert!(html.contains("a@x.com"));
}

#[test]
fn empty_roster_shows_placeholder() {
    let json = r#"{"Art": {"description": "Painting", "schedule": "Mon 4pm",
        "max_participants": 5, "participants": []}}"#;
    let html = render(loaded(json), SessionState::default());
    assert!(html.contains("No participants yet"));
    assert!(!html.contains(r#"class="participant-email""#));
}

#[test]
fn delete_buttons_hidden_without_session() {
    let html = render(loaded(BOARD), SessionState::default());
    assert!(!html.contains(r#"class="delete-btn""#));
}

#[test]
fn delete_button_per_participant_in_teacher_mode() {
    let html = render(loaded(BOARD), teacher());
    assert_eq!(html.matches(r#"class="delete-btn""#).count(), 3);
    assert!(html.contains(r#"data-email="a@x.com""#));
}

#[test]
fn loading_notice_before_first_response() {
    let html = render(ActivitiesState::default(), SessionState::default());
    assert!(html.contains("Loading activities..."));
    assert!(!html.contains(r#"class="activity-card""#));
}

#[test]
fn failure_notice_replaces_cards() {
    let mut state = loaded(BOARD);
    state.status = LoadStatus::Failed;
    let html = render(state, SessionState::default());
    assert!(html.contains("Failed to load activities. Please try again later."));
    assert!(!html.contains(r#"class="activity-card""#));
}
