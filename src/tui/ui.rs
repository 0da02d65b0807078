//! Stateless UI rendering for a match.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Mark, Position, Square};
use crate::view::{CellView, MatchView};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(13),   // Board + side panel
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Rounds - Claim three in a row")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(32)])
        .split(chunks[2]);

    draw_board(frame, body[0], app.view(), app.cursor());
    draw_side_panel(frame, body[1], app.view());

    let help = Paragraph::new(
        "Arrows + Enter or 1-9: place | N: next round | R: reset match | X/O: starter | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        app.view().status().clone(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(notice) = app.notice() {
        spans.push(Span::styled(
            format!("  ({notice})"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &MatchView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, cells) in view.cells().chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], cells, cursor);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView], cursor: Position) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[col * 2], cell, cursor);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: Position) {
    let (symbol, base_style) = match cell.square() {
        Square::Empty if *cell.interactive() => (" · ", Style::default().fg(Color::DarkGray)),
        Square::Empty => ("   ", Style::default()),
        Square::Occupied(mark) => (
            mark_symbol(*mark),
            Style::default().fg(mark_color(*mark)).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if *cell.highlighted() {
        base_style.bg(Color::LightBlue).fg(Color::Black)
    } else if *cell.position() == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_side_panel(frame: &mut Frame, area: Rect, view: &MatchView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let scores = view.scoreboard();
    let score_lines = vec![
        score_line("X wins", *scores.x_wins(), mark_color(Mark::X)),
        score_line("O wins", *scores.o_wins(), mark_color(Mark::O)),
        score_line("Draws", *scores.draws(), Color::White),
    ];
    let scoreboard = Paragraph::new(score_lines)
        .block(Block::default().borders(Borders::ALL).title("Scoreboard"));
    frame.render_widget(scoreboard, chunks[0]);

    let controls = view.controls();
    let starter_span = |mark: Mark| {
        let style = if *controls.starter() == mark {
            Style::default()
                .fg(Color::Black)
                .bg(mark_color(mark))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!(" {mark} "), style)
    };
    let next_round_style = if *controls.next_round_enabled() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let control_lines = vec![
        Line::from(vec![
            Span::raw("Starter: "),
            starter_span(Mark::X),
            Span::raw(" "),
            starter_span(Mark::O),
        ]),
        Line::from(Span::styled("[N] Next round", next_round_style)),
        Line::from(Span::raw("[R] Reset match")),
    ];
    let panel = Paragraph::new(control_lines)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(panel, chunks[1]);

    let rules = Paragraph::new(vec![
        Line::from("Marks alternate on the 3x3 grid."),
        Line::from("Three in a row takes the round."),
        Line::from("A full grid with no line draws."),
        Line::from("Changing starter restarts the round."),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL).title("Rules"));
    frame.render_widget(rules, chunks[2]);
}

fn score_line(label: &str, value: u32, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<8}"), Style::default().fg(color)),
        Span::styled(value.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn mark_symbol(mark: Mark) -> &'static str {
    match mark {
        Mark::X => " X ",
        Mark::O => " O ",
    }
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::LightCyan,
        Mark::O => Color::LightGreen,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
