use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;

use crate::app::App;
use crate::components::Select;
use crate::error::Error;
use crate::launch;
use crate::profiles::clean_work_dir;
use crate::view::{EditBuffer, PickerPurpose, View};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let View::Picker {
        purpose,
        names,
        selected,
    } = &app.view
    else {
        return;
    };
    let options = if names.is_empty() {
        vec!["(no profiles)".to_string()]
    } else {
        names.clone()
    };
    let mut select = Select {
        label: Some(purpose.title().to_string()),
        options,
        selected: *selected,
        highlight: Style::default()
            .fg(app.theme.selection_fg)
            .bg(app.theme.selection_bg),
        help: Some("Enter select · Esc back".to_string()),
    };
    select.render(f, area);
}

pub fn handle_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let View::Picker {
        purpose,
        names,
        selected,
    } = &mut app.view
    else {
        return Ok(false);
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            if *selected > 0 {
                *selected -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if *selected + 1 < names.len() {
                *selected += 1;
            }
        }
        KeyCode::Enter => {
            let Some(name) = names.get(*selected).cloned() else {
                return Ok(false);
            };
            let purpose = *purpose;
            act_on(app, purpose, name);
            app.needs_clear = true;
        }
        _ => {}
    }
    Ok(false)
}

fn act_on(app: &mut App, purpose: PickerPurpose, name: String) {
    match purpose {
        PickerPurpose::Launch => {
            match launch::launch_profile(&app.store, &app.browser.path, &name) {
                Ok(msg) => app.set_status(msg),
                Err(e) => app.set_error(e.to_string()),
            }
            app.view = View::main();
        }
        PickerPurpose::Edit => {
            if let Some(profile) = app.store.get(&name) {
                app.view = View::Editor {
                    buffer: EditBuffer::for_edit(profile),
                    field: None,
                };
            }
        }
        PickerPurpose::Delete => {
            app.view = View::ConfirmDelete { name };
        }
        PickerPurpose::Clean => {
            match clean_work_dir(&app.store.work_dir(&name)) {
                Ok(_) => {
                    app.set_status(format!("Profile '{name}' completely cleared and reset"))
                }
                Err(Error::WorkDirMissing) => {
                    app.set_error("Profile directory does not exist");
                }
                Err(e) => app.set_error(format!("Error cleaning profile: {e}")),
            }
            app.view = View::main();
        }
    }
}
