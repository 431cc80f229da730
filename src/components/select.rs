use ratatui::layout::Rect;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

/// Bordered single-selection list with an optional help line underneath.
#[derive(Debug, Clone)]
pub struct Select {
    pub label: Option<String>,
    pub options: Vec<String>,
    pub selected: usize,
    pub highlight: Style,
    pub help: Option<String>,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: None,
            options: Vec::new(),
            selected: 0,
            highlight: Style::default(),
            help: None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.selected >= self.options.len() {
            self.selected = self.options.len().saturating_sub(1);
        }
        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|o| ListItem::new(o.clone()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.label.clone().unwrap_or_default()),
            )
            .highlight_style(self.highlight)
            .highlight_symbol("> ");
        let mut state =
            ratatui::widgets::ListState::default().with_selected(Some(self.selected));
        if self.help.is_some() && area.height >= 4 {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(3), Constraint::Length(1)])
                .split(area);
            f.render_stateful_widget(list, chunks[0], &mut state);
            let help_text = self.help.clone().unwrap_or_default();
            f.render_widget(Paragraph::new(Line::from(help_text)), chunks[1]);
        } else {
            f.render_stateful_widget(list, area, &mut state);
        }
    }
}
