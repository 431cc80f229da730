use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub const PAD_X: u16 = 2;
pub const PAD_Y: u16 = 1;

/// Draw a padded bordered block and return the inner content area.
pub fn render_border_block<'a>(title: impl Into<Line<'a>>, area: Rect, f: &mut Frame) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::new(PAD_X, PAD_X, PAD_Y, PAD_Y));
    f.render_widget(block, area);
    Rect {
        x: area.x.saturating_add(1 + PAD_X),
        y: area.y.saturating_add(1 + PAD_Y),
        width: area.width.saturating_sub(2 + PAD_X * 2),
        height: area.height.saturating_sub(2 + PAD_Y * 2),
    }
}

pub fn render_modal<'a>(title: impl Into<Line<'a>>, msg: &str, area: Rect, f: &mut Frame) {
    let inverted = Style::default().add_modifier(Modifier::REVERSED);
    let modal = Paragraph::new(Text::from(msg.to_string()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .style(inverted),
        )
        .style(inverted);
    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

/// Centered sub-rectangle used for confirmation modals.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// One-line status bar: view name, key hints, and the last status message
/// (green for success, red for errors).
pub fn render_status_bar(app: &App, area: Rect, f: &mut Frame) {
    let hint_style = Style::default()
        .fg(app.theme.text_muted)
        .add_modifier(Modifier::DIM);
    let mut spans: Vec<Span> = vec![
        Span::styled(format!(" View: {} ", app.view.name()), hint_style),
        Span::styled("· Esc back · Ctrl+C quit ", hint_style),
    ];
    if let Some(msg) = &app.status {
        let color = if app.status_is_error {
            app.theme.accent_danger
        } else {
            app.theme.accent_success
        };
        spans.push(Span::styled(msg.clone(), Style::default().fg(color)));
    }
    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg));
    f.render_widget(Clear, area);
    f.render_widget(bar, area);
}
