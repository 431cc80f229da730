use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding};
use ratatui::Frame;

use crate::app::App;
use crate::frame::{PAD_X, PAD_Y};
use crate::theme::ThemeTokens;
use crate::view::{EditBuffer, PickerPurpose, View};

pub const MAIN_ITEMS: &[(&str, &str)] = &[
    ("Launch Browser", "Start the browser with a profile"),
    ("Manage Profiles", "Add, edit or remove profiles"),
    ("Clean Profile", "Clear a profile's browsing data"),
    ("Quit", "Exit the application"),
];

pub const MANAGE_ITEMS: &[(&str, &str)] = &[
    ("Add New Profile", "Create a profile"),
    ("Edit Profile", "Change an existing profile"),
    ("Delete Profile", "Remove a profile permanently"),
];

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let (title, items, selected) = match &mut app.view {
        View::Main { selected } => ("Browser Profiles", MAIN_ITEMS, selected),
        View::Manage { selected } => ("Manage Profiles", MANAGE_ITEMS, selected),
        _ => return,
    };
    if *selected >= items.len() {
        *selected = items.len().saturating_sub(1);
    }
    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(idx, &(name, desc))| make_menu_list_item(name, desc, theme, idx == *selected))
        .collect();
    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::new(PAD_X, PAD_X, PAD_Y, PAD_Y)),
        )
        .highlight_style(Style::default().bg(theme.selection_bg));
    f.render_stateful_widget(
        list,
        area,
        &mut ratatui::widgets::ListState::default().with_selected(Some(*selected)),
    );
}

fn make_menu_list_item(
    name: &'static str,
    desc: &'static str,
    theme: ThemeTokens,
    is_selected: bool,
) -> ListItem<'static> {
    // Left vertical bar: dim when not selected, vivid when selected
    let bar_style = if is_selected {
        Style::default().fg(theme.selection_fg)
    } else {
        Style::default().fg(theme.border).add_modifier(Modifier::DIM)
    };
    let bar_span = Span::styled("│ ", bar_style);
    let name_span = Span::styled(name, Style::default().fg(theme.menu_title));
    let desc_span = Span::styled(
        desc,
        Style::default().fg(theme.menu_desc).add_modifier(Modifier::DIM),
    );
    let lines: Vec<Line> = vec![
        Line::from(vec![bar_span.clone(), name_span]),
        Line::from(vec![bar_span, desc_span]),
        Line::raw(""),
    ];
    ListItem::new(Text::from(lines))
}

pub fn handle_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let item_count = match app.view {
        View::Main { .. } => MAIN_ITEMS.len(),
        View::Manage { .. } => MANAGE_ITEMS.len(),
        _ => return Ok(false),
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            if let View::Main { selected } | View::Manage { selected } = &mut app.view {
                if *selected > 0 {
                    *selected -= 1;
                }
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let View::Main { selected } | View::Manage { selected } = &mut app.view {
                if *selected + 1 < item_count {
                    *selected += 1;
                }
            }
        }
        KeyCode::Enter => {
            let next = match app.view {
                View::Main { selected } => match selected {
                    0 => Some(picker(app, PickerPurpose::Launch)),
                    1 => Some(View::Manage { selected: 0 }),
                    2 => Some(picker(app, PickerPurpose::Clean)),
                    _ => return Ok(true),
                },
                View::Manage { selected } => match selected {
                    0 => Some(View::Editor {
                        buffer: EditBuffer::for_add(),
                        field: None,
                    }),
                    1 => Some(picker(app, PickerPurpose::Edit)),
                    2 => Some(picker(app, PickerPurpose::Delete)),
                    _ => None,
                },
                _ => None,
            };
            if let Some(view) = next {
                app.view = view;
                app.needs_clear = true;
            }
        }
        _ => {}
    }
    Ok(false)
}

fn picker(app: &App, purpose: PickerPurpose) -> View {
    View::Picker {
        purpose,
        names: app.store.names(),
        selected: 0,
    }
}
