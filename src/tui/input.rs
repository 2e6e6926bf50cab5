//! Input handling for the TUI.
//!
//! Processes keyboard events and updates application state. Which keys do
//! what depends on the active demo screen; anything the state machine would
//! reject never reaches it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Screen;
use crate::App;

/// Handle keyboard events.
pub fn handle_events(key: KeyEvent, app: &mut App) {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.screen() {
        Screen::Intro => handle_intro(key, app),
        Screen::Processing => handle_processing(key, app),
        Screen::Results => handle_results(key, app),
    }
}

/// Intro screen: move between project cards and select one.
fn handle_intro(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k' | 'h') | KeyCode::BackTab => {
            app.move_intro_selection(-1);
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j' | 'l') | KeyCode::Tab => {
            app.move_intro_selection(1);
        }

        // Direct card selection by number
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < app.catalog.len() {
                app.intro_selected = index;
                app.select_highlighted_project();
            }
        }

        KeyCode::Enter => app.select_highlighted_project(),

        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Processing screen: selection controls are suppressed while the scripted
/// analysis runs; only quitting and the theme toggle work.
fn handle_processing(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Results screen: browse forms, scroll, preview, or start over.
fn handle_results(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.move_form_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.move_form_cursor(1),

        KeyCode::Enter => app.preview_highlighted_form(),

        KeyCode::Up | KeyCode::Char('k') => {
            app.results_scroll = app.results_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.results_scroll = app.results_scroll.saturating_add(1);
        }
        KeyCode::PageUp => {
            app.results_scroll = app.results_scroll.saturating_sub(10);
        }
        KeyCode::PageDown => {
            app.results_scroll = app.results_scroll.saturating_add(10);
        }

        // "Try another demo project"
        KeyCode::Char('r') | KeyCode::Esc => app.reset_session(),

        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn instant_app() -> App {
        let mut config = Config::default();
        config.demo.processing_delay_ms = 0;
        App::with_config(config)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_events(KeyEvent::from(code), app);
    }

    #[test]
    fn test_enter_selects_highlighted_project() {
        let mut app = instant_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Processing);
        assert_eq!(app.session.selected_project(), Some("bathroom"));
    }

    #[test]
    fn test_number_key_selects_card_directly() {
        let mut app = instant_app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.session.selected_project(), Some("solar"));
    }

    #[test]
    fn test_out_of_range_number_is_ignored() {
        let mut app = instant_app();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.screen(), Screen::Intro);
    }

    #[test]
    fn test_processing_suppresses_selection_keys() {
        let mut app = instant_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Processing);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen(), Screen::Processing);
        assert_eq!(app.session.selected_project(), Some("deck"));
    }

    #[test]
    fn test_results_keys_preview_and_reset() {
        let mut app = instant_app();
        press(&mut app, KeyCode::Enter);
        app.tick();
        assert_eq!(app.screen(), Screen::Results);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.selected_form(), Some("Site Plan Worksheet"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Intro);
        assert_eq!(app.session.selected_form(), None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = instant_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = instant_app();
        handle_events(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_theme_toggle_available_on_every_screen() {
        let mut app = instant_app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.name, "light");

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.name, "dark");
    }
}
