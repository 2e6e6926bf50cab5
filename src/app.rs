//! Application state and lifecycle management.
//!
//! This module contains the `App` struct that holds all application state
//! and coordinates between the TUI, the session state machine, and the
//! fixture catalog.

use std::time::Instant;

use crate::core::{Config, ProjectCatalog, ProjectFixture, Screen, Session};
use crate::tui::Theme;

/// Main application state.
///
/// The `App` struct is the central state container for the demo. It owns the
/// session state machine and the per-screen cursor state the rendering layer
/// needs; the fixture catalog is shared and immutable.
#[derive(Debug)]
pub struct App {
    /// The demo session state machine
    pub session: Session,

    /// The compiled-in fixture catalog
    pub catalog: &'static ProjectCatalog,

    /// Application configuration
    pub config: Config,

    /// Current UI theme
    pub theme: Theme,

    /// Highlighted project card on the intro screen
    pub intro_selected: usize,

    /// Highlighted form chip on the results screen
    pub form_cursor: usize,

    /// Scroll offset for the results screen
    pub results_scroll: u16,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Status message to display (if any)
    pub status_message: Option<String>,

    /// Monotonic tick counter driving the spinner animation
    pub tick_count: usize,
}

impl App {
    /// Create a new application instance from the on-disk configuration.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Create an application instance from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        let theme = Self::resolve_theme(&config);
        let session = Session::new(config.processing_delay());

        Self {
            session,
            catalog: ProjectCatalog::builtin(),
            config,
            theme,
            intro_selected: 0,
            form_cursor: 0,
            results_scroll: 0,
            should_quit: false,
            status_message: None,
            tick_count: 0,
        }
    }

    /// Resolve theme from configuration.
    fn resolve_theme(config: &Config) -> Theme {
        use crate::tui::parse_hex_color;

        // Get base theme by name
        let mut theme = Theme::by_name(&config.ui.theme).unwrap_or_default();

        // Apply custom color overrides if present
        if let Some(ref custom) = config.ui.custom_colors {
            for (hex, slot) in [
                (&custom.primary, &mut theme.primary),
                (&custom.accent, &mut theme.accent),
                (&custom.text, &mut theme.text),
                (&custom.background, &mut theme.background),
                (&custom.border, &mut theme.border),
                (&custom.warning, &mut theme.warning),
            ] {
                if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
                    *slot = color;
                }
            }
        }

        theme
    }

    /// Periodic tick from the event loop.
    ///
    /// Advances the spinner and fires the processing deadline when it
    /// elapses.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.session.tick(Instant::now()) {
            // Fresh results screen: cursors from a previous run must not leak.
            self.form_cursor = 0;
            self.results_scroll = 0;
        }
    }

    /// Move the intro card highlight by `delta`, wrapping around.
    pub fn move_intro_selection(&mut self, delta: isize) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        self.intro_selected =
            ((self.intro_selected as isize + delta).rem_euclid(len)) as usize;
    }

    /// Select the highlighted intro card and start processing.
    pub fn select_highlighted_project(&mut self) {
        if let Some(project) = self.catalog.projects().get(self.intro_selected) {
            let id = project.id.clone();
            if self.session.select_project(&id, self.catalog) {
                self.status_message = None;
            }
        }
    }

    /// The fixture for the session's selected project, if any.
    pub fn current_fixture(&self) -> Option<&ProjectFixture> {
        self.session.selected_project().and_then(|id| self.catalog.get(id))
    }

    /// Form names available on the results screen, in display order.
    pub fn form_names(&self) -> Vec<&str> {
        self.current_fixture().map(ProjectFixture::form_names).unwrap_or_default()
    }

    /// Move the results form highlight by `delta`, wrapping around.
    pub fn move_form_cursor(&mut self, delta: isize) {
        let len = self.form_names().len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        self.form_cursor = ((self.form_cursor as isize + delta).rem_euclid(len)) as usize;
    }

    /// Preview the highlighted form in the locked panel.
    pub fn preview_highlighted_form(&mut self) {
        let name = self.form_names().get(self.form_cursor).map(|n| (*n).to_string());
        if let Some(name) = name {
            self.session.preview_form(&name);
        }
    }

    /// Reset the session back to the intro screen.
    pub fn reset_session(&mut self) {
        self.session.reset();
        self.form_cursor = 0;
        self.results_scroll = 0;
        self.status_message = None;
    }

    /// Toggle between the dark and light themes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.status_message = Some(format!("Theme: {}", self.theme.name));
    }

    /// Request application shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Shorthand for the active screen.
    pub fn screen(&self) -> Screen {
        self.session.screen()
    }
}
