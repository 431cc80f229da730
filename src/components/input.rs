use ratatui::layout::Rect;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Single-line text input with an optional help line underneath. When
/// focused, a block cursor marker is appended after the value.
#[derive(Debug, Clone)]
pub struct Input {
    pub label: Option<String>,
    pub value: String,
    pub placeholder: Option<String>,
    pub focused: bool,
    pub help: Option<String>,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: None,
            value: String::new(),
            placeholder: None,
            focused: false,
            help: None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let title = self.label.clone().unwrap_or_default();
        let mut spans: Vec<Span> = Vec::new();
        if self.value.is_empty() && !self.focused {
            let placeholder = self.placeholder.clone().unwrap_or_default();
            spans.push(Span::styled(
                placeholder,
                Style::default().add_modifier(Modifier::DIM),
            ));
        } else {
            spans.push(Span::raw(self.value.clone()));
        }
        if self.focused {
            spans.push(Span::styled("\u{2588}", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        let para = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(title));
        if self.help.is_some() && area.height >= 4 {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Length(3), Constraint::Length(1)])
                .split(area);
            f.render_widget(para, chunks[0]);
            let help_text = self.help.clone().unwrap_or_default();
            let help_para = Paragraph::new(Line::from(Span::styled(
                help_text,
                Style::default().add_modifier(Modifier::DIM),
            )));
            f.render_widget(help_para, chunks[1]);
        } else {
            f.render_widget(para, area);
        }
    }
}
