use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::browser::Discovery;
use crate::profiles::ProfileStore;
use crate::screens;
use crate::theme::ThemeTokens;
use crate::view::View;

/// Presentation-layer state: current view, status line, theme. Domain state
/// lives in the store and is only touched through its methods.
pub struct App {
    pub view: View,
    pub store: ProfileStore,
    pub browser: Discovery,
    pub status: Option<String>,
    pub status_is_error: bool,
    pub needs_clear: bool,
    pub theme: ThemeTokens,
}

impl App {
    pub fn new(store: ProfileStore, browser: Discovery, theme: ThemeTokens) -> Self {
        let warning = browser.warning.clone();
        let mut app = Self {
            view: View::main(),
            store,
            browser,
            status: None,
            status_is_error: false,
            needs_clear: true,
            theme,
        };
        if let Some(w) = warning {
            app.set_error(w);
        }
        app
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
        self.status_is_error = true;
    }

    /// Process one key event synchronously. Returns `Ok(true)` to quit.
    ///
    /// Ctrl+C / Ctrl+Q quit from anywhere; Esc returns to the main menu from
    /// any other view, clearing the status line and discarding any
    /// in-progress edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => return Ok(true),
            (KeyCode::Esc, _) => {
                if !matches!(self.view, View::Main { .. }) {
                    self.view = View::main();
                    self.status = None;
                    self.status_is_error = false;
                    self.needs_clear = true;
                }
                return Ok(false);
            }
            _ => {}
        }

        match self.view {
            View::Main { .. } | View::Manage { .. } => screens::menu::handle_event(self, key),
            View::Picker { .. } => screens::picker::handle_event(self, key),
            View::ConfirmDelete { .. } => screens::confirm::handle_event(self, key),
            View::Editor { .. } => screens::editor::handle_event(self, key),
        }
    }
}
