use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::components::Input;
use crate::error::Error;
use crate::frame::render_border_block;
use crate::profiles::Profile;
use crate::view::{EditBuffer, Field, View};

const ALL_FIELDS: [Field; 4] = [Field::Name, Field::Proxy, Field::ProxyType, Field::Flags];

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let View::Editor { buffer, field } = &app.view else {
        return;
    };
    match field {
        None => render_overview(f, area, buffer, theme),
        Some(field) => {
            let input = Input {
                label: Some(field.label().to_string()),
                value: buffer.field(*field).to_string(),
                placeholder: None,
                focused: true,
                help: Some(format!("{} · Enter done · Esc cancel", field.help())),
            };
            let inner = render_border_block(editor_title(buffer), area, f);
            input.render(f, inner);
        }
    }
}

fn render_overview(f: &mut Frame, area: Rect, buffer: &EditBuffer, theme: crate::theme::ThemeTokens) {
    let inner = render_border_block(editor_title(buffer), area, f);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(ALL_FIELDS.len() as u16 * 2), Constraint::Length(2)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, field) in ALL_FIELDS.iter().enumerate() {
        let value = buffer.field(*field);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. {}: ", idx + 1, field.label()),
                Style::default().fg(theme.menu_title),
            ),
            Span::styled(value.to_string(), Style::default().fg(theme.text_primary)),
        ]));
        lines.push(Line::raw(""));
    }
    f.render_widget(Paragraph::new(Text::from(lines)), chunks[0]);

    let hints = Paragraph::new(Line::from(Span::styled(
        "1-4 edit field · Enter save · Esc cancel",
        Style::default().fg(theme.text_muted).add_modifier(Modifier::DIM),
    )));
    f.render_widget(hints, chunks[1]);
}

fn editor_title(buffer: &EditBuffer) -> &'static str {
    if buffer.original_name.is_some() {
        "Edit Profile"
    } else {
        "Add Profile"
    }
}

enum Action {
    None,
    Commit {
        original: Option<String>,
        profile: Profile,
    },
}

pub fn handle_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let mut action = Action::None;
    if let View::Editor { buffer, field } = &mut app.view {
        match field {
            Some(active) => match key.code {
                KeyCode::Enter => *field = None,
                KeyCode::Backspace => {
                    let _ = buffer.field_mut(*active).pop();
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    buffer.field_mut(*active).push(ch);
                }
                _ => {}
            },
            None => match key.code {
                KeyCode::Char(ch) => {
                    if let Some(picked) = Field::from_digit(ch) {
                        *field = Some(picked);
                    }
                }
                KeyCode::Enter => {
                    action = Action::Commit {
                        original: buffer.original_name.clone(),
                        profile: buffer.to_profile(),
                    };
                }
                _ => {}
            },
        }
    }

    if let Action::Commit { original, profile } = action {
        let name = profile.name.clone();
        let is_edit = original.is_some();
        match app.store.apply_edit(original.as_deref(), profile) {
            Ok(()) => {
                if is_edit {
                    app.set_status(format!("Profile '{name}' updated"));
                } else {
                    app.set_status(format!("Profile '{name}' created"));
                }
                app.view = View::main();
                app.needs_clear = true;
            }
            Err(e @ (Error::EmptyName | Error::DuplicateName(_))) => {
                // Validation failures keep the editor open so the buffer
                // can be corrected.
                app.set_error(e.to_string());
            }
            Err(e) => {
                app.set_error(format!("Save failed: {e}"));
                app.view = View::main();
                app.needs_clear = true;
            }
        }
    }
    Ok(false)
}
