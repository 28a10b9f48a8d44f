// App state and main event loop.
// Routes keyboard input to the listings view and applies request outcomes.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::runtime::{Dispatcher, ListingsApi};
use crate::state::{ListingsView, Outcome, Request};
use crate::ui;

/// Main application state.
pub struct App {
    /// Heading shown above the list.
    pub title: String,
    /// The listings screen.
    pub view: ListingsView,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(title: String) -> Self {
        Self {
            title,
            view: ListingsView::new(),
            should_quit: false,
        }
    }

    /// Main event loop.
    pub fn run<A: ListingsApi>(
        &mut self,
        terminal: &mut Terminal<impl Backend>,
        dispatcher: &Dispatcher<A>,
        outcomes: &mut UnboundedReceiver<Outcome>,
    ) -> io::Result<()> {
        dispatcher.dispatch(self.view.mount());

        while !self.should_quit {
            self.drain_outcomes(dispatcher, outcomes);
            terminal.draw(|frame| ui::draw(frame, self))?;
            if let Some(request) = self.handle_events()? {
                dispatcher.dispatch(request);
            }
        }

        self.view.teardown();
        Ok(())
    }

    /// Apply every completion that has arrived since the last frame.
    fn drain_outcomes<A: ListingsApi>(
        &mut self,
        dispatcher: &Dispatcher<A>,
        outcomes: &mut UnboundedReceiver<Outcome>,
    ) {
        while let Ok(outcome) = outcomes.try_recv() {
            if let Some(request) = self.view.apply(outcome) {
                dispatcher.dispatch(request);
            }
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<Option<Request>> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(self.handle_key(key));
                }
            }
        }
        Ok(None)
    }

    /// Handle one key press. Returns a request to dispatch, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        if self.view.form.is_visible() {
            self.handle_form_key(key);
            return None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('r') => Some(self.view.remount()),
            KeyCode::Down | KeyCode::Char('j') => {
                self.view.select_next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.view.select_prev();
                None
            }
            KeyCode::Char('d') => self.view.delete_selected(),
            KeyCode::Char('a') => {
                self.view.add_selected();
                None
            }
            KeyCode::Char('x') => {
                self.view.open_form();
                None
            }
            _ => None,
        }
    }

    /// Keys while the create form is open.
    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.view.form;
        match key.code {
            KeyCode::Esc => form.cancel(),
            KeyCode::Enter => {
                form.submit();
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Left | KeyCode::Right => form.toggle_modifier(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::tests::listing;
    use crate::state::{FormField, ViewPhase};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> Option<Request> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ready_app() -> App {
        let mut app = App::new("Listings".to_string());
        let initial = app.view.mount();
        let Request::FetchListings { ticket } = initial else {
            panic!("mount must fetch");
        };
        app.view.apply(Outcome::Listings {
            ticket,
            result: Ok(vec![listing("1", "Loft"), listing("2", "Cabin")]),
        });
        app
    }

    #[test]
    fn test_delete_key_targets_selection() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Down);

        match press(&mut app, KeyCode::Char('d')) {
            Some(Request::DeleteListing { id, .. }) => assert_eq!(id, "2"),
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_add_key_is_inert() {
        let mut app = ready_app();
        assert!(press(&mut app, KeyCode::Char('a')).is_none());
        assert!(!app.view.is_busy());
    }

    #[test]
    fn test_form_keys_do_not_reach_list() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('x'));
        assert!(app.view.form.is_visible());

        // 'd' and 'q' are typed into the title, not acted on.
        assert!(press(&mut app, KeyCode::Char('d')).is_none());
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.view.form.title, "dq");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.form.focus, FormField::Description);

        press(&mut app, KeyCode::Enter);
        assert!(!app.view.form.is_visible());
        assert!(!app.view.is_busy());
    }

    #[test]
    fn test_escape_closes_form_before_quitting() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.view.form.is_visible());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_reload_key_remounts() {
        let mut app = ready_app();
        let request = press(&mut app, KeyCode::Char('r'));
        assert!(matches!(request, Some(Request::FetchListings { .. })));
        assert_eq!(app.view.phase(), ViewPhase::Loading);
    }
}
