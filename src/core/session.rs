//! Demo session state machine.
//!
//! One `Session` covers the lifetime of a single walkthrough: intro screen,
//! a fixed-delay processing animation, then the results screen, and back to
//! intro on reset. The machine owns all mutable demo state; the rendering
//! layer only reads snapshots and feeds events in.
//!
//! The processing auto-advance is modeled as a one-shot deadline owned by the
//! session and polled from the event-loop tick. Resetting (or dropping) the
//! session clears the deadline, so a stale timer can never fire into a fresh
//! or disposed session.

use std::time::{Duration, Instant};

use tracing::debug;

use super::ProjectCatalog;

/// Delay between project selection and the results screen, matching the
/// reference demo's 2 second "analysis".
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Which demo screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Project selection cards
    #[default]
    Intro,

    /// Scripted analysis animation
    Processing,

    /// Permit results for the selected project
    Results,
}

/// Read-only snapshot of session state, handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Active screen
    pub screen: Screen,
    /// Selected project-type identifier; set iff the screen is past Intro
    pub selected_project: Option<String>,
    /// Form chosen for the locked preview panel; only meaningful on Results
    pub selected_form: Option<String>,
}

impl SessionState {
    /// The state a fresh or reset session is in.
    pub fn initial() -> Self {
        Self { screen: Screen::Intro, selected_project: None, selected_form: None }
    }
}

/// The demo's transition controller.
///
/// Exactly four transitions are legal:
/// - `Intro --select_project(valid id)--> Processing` (arms the deadline)
/// - `Processing --tick past deadline--> Results`
/// - `Results --preview_form--> Results` (replaces the previewed form)
/// - `any --reset--> Intro` (clears selections and the deadline)
///
/// Everything else is a silent no-op: unknown project ids, `preview_form`
/// outside Results, user input during Processing.
#[derive(Debug)]
pub struct Session {
    screen: Screen,
    selected_project: Option<String>,
    selected_form: Option<String>,
    deadline: Option<Instant>,
    delay: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESSING_DELAY)
    }
}

impl Session {
    /// Create a session on the intro screen with the given processing delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            screen: Screen::Intro,
            selected_project: None,
            selected_form: None,
            deadline: None,
            delay,
        }
    }

    /// Select a demo project and begin processing.
    ///
    /// Only valid on the intro screen and only for ids the catalog knows;
    /// anything else leaves the session untouched. Returns whether the
    /// transition happened.
    pub fn select_project(&mut self, id: &str, catalog: &ProjectCatalog) -> bool {
        if self.screen != Screen::Intro {
            debug!(id, screen = ?self.screen, "ignoring project selection outside intro");
            return false;
        }
        if !catalog.contains(id) {
            debug!(id, "ignoring unknown project type");
            return false;
        }

        self.selected_project = Some(id.to_string());
        self.screen = Screen::Processing;
        self.deadline = Some(Instant::now() + self.delay);
        debug!(id, delay_ms = self.delay.as_millis() as u64, "processing started");
        true
    }

    /// Fire the processing deadline if it has elapsed.
    ///
    /// Called from the event-loop tick. Returns whether the session advanced
    /// to the results screen.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if self.screen == Screen::Processing && now >= deadline => {
                self.deadline = None;
                self.screen = Screen::Results;
                debug!(project = self.selected_project.as_deref(), "processing complete");
                true
            }
            _ => false,
        }
    }

    /// Choose a form for the locked preview panel.
    ///
    /// Only valid on the results screen; choosing another form replaces the
    /// previous selection. Returns whether the selection was applied.
    pub fn preview_form(&mut self, name: &str) -> bool {
        if self.screen != Screen::Results {
            debug!(name, screen = ?self.screen, "ignoring form preview outside results");
            return false;
        }
        self.selected_form = Some(name.to_string());
        true
    }

    /// Return to the intro screen, clearing all selections.
    ///
    /// Also cancels a pending processing deadline, so a reset taken during
    /// Processing can never be advanced by the old timer.
    pub fn reset(&mut self) {
        self.screen = Screen::Intro;
        self.selected_project = None;
        self.selected_form = None;
        self.deadline = None;
        debug!("session reset");
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> SessionState {
        SessionState {
            screen: self.screen,
            selected_project: self.selected_project.clone(),
            selected_form: self.selected_form.clone(),
        }
    }

    /// The active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The selected project-type identifier, if past the intro screen.
    pub fn selected_project(&self) -> Option<&str> {
        self.selected_project.as_deref()
    }

    /// The form chosen for preview, if any.
    pub fn selected_form(&self) -> Option<&str> {
        self.selected_form.as_deref()
    }

    /// Fraction of the processing delay elapsed, in `0.0..=1.0`.
    ///
    /// Used by the processing screen's progress gauge. Returns `None`
    /// outside Processing.
    pub fn processing_progress(&self, now: Instant) -> Option<f64> {
        let deadline = self.deadline?;
        if self.screen != Screen::Processing {
            return None;
        }
        if self.delay.is_zero() || now >= deadline {
            return Some(1.0);
        }
        let remaining = deadline.duration_since(now);
        Some(1.0 - remaining.as_secs_f64() / self.delay.as_secs_f64())
    }
}
