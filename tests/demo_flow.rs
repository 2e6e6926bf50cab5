//! End-to-end tests of the demo flow through the public library API.
//!
//! Exercises the session state machine and the fixture catalog together,
//! the way the TUI drives them.

use std::time::{Duration, Instant};

use permitpro::{ProjectCatalog, Screen, Session, SessionState};

fn catalog() -> &'static ProjectCatalog {
    ProjectCatalog::builtin()
}

// ============================================================================
// Fixture Catalog
// ============================================================================

#[test]
fn every_known_id_resolves_to_its_own_fixture() {
    for id in catalog().ids().collect::<Vec<_>>() {
        let fixture = catalog().get(id).expect("known id should resolve");
        assert_eq!(fixture.id, id);
        assert!(!fixture.permits.is_empty());
        assert!(!fixture.total_cost.is_empty());
        assert!(!fixture.inspections.is_empty());
    }
}

#[test]
fn unknown_ids_miss_without_error() {
    assert!(catalog().get("unknown").is_none());
    assert!(catalog().get("Deck").is_none());
    assert!(catalog().related_codes("unknown").is_empty());
}

#[test]
fn fence_has_exactly_four_related_codes() {
    let codes = catalog().related_codes("fence");
    assert_eq!(codes.len(), 4);
    for code in codes {
        assert!(!code.title.is_empty());
        assert!(!code.code_citation.is_empty());
        assert!(!code.description.is_empty());
    }
}

// ============================================================================
// Session State Machine
// ============================================================================

#[test]
fn walkthrough_selects_processes_and_lands_on_results() {
    let mut session = Session::new(Duration::ZERO);

    assert!(session.select_project("deck", catalog()));
    let state = session.state();
    assert_eq!(state.screen, Screen::Processing);
    assert_eq!(state.selected_project.as_deref(), Some("deck"));

    // The only further event is the timer firing.
    assert!(session.tick(Instant::now()));
    let state = session.state();
    assert_eq!(state.screen, Screen::Results);
    assert_eq!(state.selected_project.as_deref(), Some("deck"));
}

#[test]
fn invalid_selection_leaves_intro_untouched() {
    let mut session = Session::new(Duration::ZERO);
    assert!(!session.select_project("treehouse", catalog()));
    assert_eq!(session.state(), SessionState::initial());
}

#[test]
fn processing_waits_for_the_full_delay() {
    let mut session = Session::new(Duration::from_secs(3600));
    session.select_project("solar", catalog());
    assert!(!session.tick(Instant::now()));
    assert_eq!(session.screen(), Screen::Processing);
}

#[test]
fn preview_form_sets_then_replaces_the_selection() {
    let mut session = Session::new(Duration::ZERO);
    session.select_project("deck", catalog());
    session.tick(Instant::now());

    session.preview_form("Application Form A-101");
    assert_eq!(session.selected_form(), Some("Application Form A-101"));
    assert_eq!(session.screen(), Screen::Results);

    session.preview_form("Zoning Checklist Z-200");
    assert_eq!(session.selected_form(), Some("Zoning Checklist Z-200"));
    assert_eq!(session.screen(), Screen::Results);
}

#[test]
fn reset_from_every_screen_restores_the_initial_state() {
    // From Intro
    let mut session = Session::new(Duration::ZERO);
    session.reset();
    assert_eq!(session.state(), SessionState::initial());

    // From Processing
    session.select_project("fence", catalog());
    session.reset();
    assert_eq!(session.state(), SessionState::initial());

    // From Results with a previewed form
    session.select_project("fence", catalog());
    session.tick(Instant::now());
    session.preview_form("Fence Permit Application F-500");
    session.reset();
    assert_eq!(session.state(), SessionState::initial());
}

#[test]
fn reset_cancels_the_pending_auto_advance() {
    let mut session = Session::new(Duration::ZERO);
    session.select_project("bathroom", catalog());
    session.reset();

    // Well past the original deadline; a reset session must not move.
    assert!(!session.tick(Instant::now() + Duration::from_secs(300)));
    assert_eq!(session.state(), SessionState::initial());

    // And a fresh selection still works afterwards.
    assert!(session.select_project("deck", catalog()));
    assert!(session.tick(Instant::now()));
    assert_eq!(session.screen(), Screen::Results);
}

#[test]
fn stale_form_names_are_accepted_only_on_results() {
    let mut session = Session::new(Duration::from_secs(3600));
    assert!(!session.preview_form("Application Form A-101"));
    session.select_project("deck", catalog());
    assert!(!session.preview_form("Application Form A-101"));
    assert_eq!(session.selected_form(), None);
}
