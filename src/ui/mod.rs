use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::{Outcome, Session};
use crate::{APP_TITLE, CONTROLS_H, INPUT_H, MIN_PANE_WIDTH, PROMPT};

pub fn draw_session(frame: &mut Frame, session: &Session) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(APP_TITLE));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title(APP_TITLE)
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(INPUT_H),
            Constraint::Length(CONTROLS_H),
        ])
        .split(cabinet_inner);

    draw_output(frame, session, stack[0]);
    draw_input(frame, session, stack[1]);
    draw_controls(frame, stack[2]);
}

fn draw_output(frame: &mut Frame, session: &Session, area: Rect) {
    let (title, body, style) = match &session.outcome {
        Outcome::Idle => (
            "SPIRAL".to_string(),
            String::from("Enter a non-negative integer below."),
            Style::default().add_modifier(Modifier::DIM),
        ),
        Outcome::Rendered { bound, text } => (
            format!("SPIRAL 0..={}", bound),
            text.clone(),
            Style::default(),
        ),
        Outcome::Invalid(msg) => (
            "ERROR".to_string(),
            msg.clone(),
            Style::default().fg(Color::Red),
        ),
    };

    let lines: Vec<Line> = body.lines().map(Line::raw).collect();
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Left)
        .scroll(session.scroll)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_input(frame: &mut Frame, session: &Session, area: Rect) {
    let block = Block::default().title("INPUT").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(session.input.as_str()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if let Some(x) = cursor_column(inner, PROMPT.len() + session.input.chars().count()) {
        frame.set_cursor(x, inner.y);
    }
}

/// Column for the input cursor, or `None` once the text runs past the pane.
fn cursor_column(area: Rect, offset: usize) -> Option<u16> {
    let offset = u16::try_from(offset).ok()?;
    let x = area.x.checked_add(offset)?;
    (x < area.x.saturating_add(area.width)).then_some(x)
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw("enter submit"),
        Line::raw("q+enter/esc quit"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::raw("arrows/pgup/pgdn scroll"),
        Line::raw("home reset"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}
