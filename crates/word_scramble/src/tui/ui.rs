//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use scramble_rules::{SpellCheckOracle, letter_count};

use super::app::{Alert, App};

/// Renders the whole screen.
pub fn draw<O: SpellCheckOracle>(frame: &mut Frame, app: &App<O>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Used words
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new(app.session().root_word().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Word Scramble"));
    frame.render_widget(title, chunks[0]);

    draw_input(frame, chunks[1], app.input(), app.alert().is_none());
    draw_used_words(frame, chunks[2], app.session().used_words());

    let help = Paragraph::new("Enter: Submit | Ctrl+N: Scramble | Esc: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(alert) = app.alert() {
        draw_alert(frame, area, alert);
    }
}

fn draw_input(frame: &mut Frame, area: Rect, input: &str, active: bool) {
    let style = if active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(input)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Enter your word"));
    frame.render_widget(input, area);
}

fn draw_used_words(frame: &mut Frame, area: Rect, used_words: &[String]) {
    let items: Vec<ListItem> = used_words
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("({}) ", letter_count(word)),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Words found: {}", used_words.len())),
    );
    frame.render_widget(list, area);
}

fn draw_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let popup = center_rect(area, 44, 7);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(alert.message().as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[ Ok ]",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(alert.title().as_str()),
        );
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
