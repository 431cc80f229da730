use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::App;
use crate::frame::{centered_rect, render_modal};
use crate::view::View;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let View::ConfirmDelete { name } = &app.view else {
        return;
    };
    let msg = format!("Are you sure you want to delete profile '{name}'? (y/n)");
    let width = (msg.len() as u16 + 4).min(area.width);
    let modal_area = centered_rect(width, 3, area);
    render_modal("Confirm Delete", &msg, modal_area, f);
}

pub fn handle_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let View::ConfirmDelete { name } = &app.view else {
        return Ok(false);
    };
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let name = name.clone();
            match app.store.remove(&name) {
                Ok(true) => app.set_status(format!("Profile '{name}' deleted")),
                Ok(false) => app.set_error(format!("Profile '{name}' not found")),
                Err(e) => app.set_error(format!("Save failed: {e}")),
            }
            app.view = View::main();
            app.needs_clear = true;
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.view = View::main();
            app.needs_clear = true;
        }
        _ => {}
    }
    Ok(false)
}
