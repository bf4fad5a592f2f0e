//! Stateless UI rendering for the Othello grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use desdemona::{CellView, DiskColor, GRID_SIZE, GridView, Position};

const CELL_WIDTH: u16 = 4;

/// Renders the grid with cursor highlight, score and status.
pub fn draw(frame: &mut Frame, grid: &GridView, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Title
            Constraint::Min(GRID_SIZE as u16 + 2), // Board
            Constraint::Length(3),                 // Status
        ])
        .split(area);

    let (dark, light) = app.score();
    let title = Paragraph::new(format!("Desdemona - you (dark) {}  bot (light) {}", dark, light))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], grid, app.cursor());

    let status_text = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, grid: &GridView, cursor: Position) {
    let width = CELL_WIDTH * GRID_SIZE as u16 + 2;
    let height = GRID_SIZE as u16 + 2;
    let board_area = center_rect(area, width, height);

    let lines: Vec<Line> = (0..GRID_SIZE)
        .map(|row| {
            Line::from(
                (0..GRID_SIZE)
                    .filter_map(|col| Position::new(row, col).ok())
                    .map(|position| cell_span(grid.cell(position), position == cursor))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Green)),
    );
    frame.render_widget(board, board_area);
}

fn cell_span(cell: &CellView, under_cursor: bool) -> Span<'static> {
    let (symbol, base_style) = match (cell.disk(), cell.preview()) {
        (Some(disk), _) if *disk.flipping() => ("◐", Style::default().fg(Color::Gray)),
        (Some(disk), _) => ("●", disk_style(*disk.color())),
        (None, Some(color)) => ("●", disk_style(*color).add_modifier(Modifier::DIM)),
        (None, None) if *cell.eligible() => ("·", Style::default().fg(Color::LightYellow)),
        (None, None) => (" ", Style::default()),
    };

    let style = if under_cursor {
        base_style.add_modifier(Modifier::REVERSED)
    } else {
        base_style
    };
    Span::styled(format!("{:^width$}", symbol, width = CELL_WIDTH as usize), style)
}

fn disk_style(color: DiskColor) -> Style {
    match color {
        DiskColor::Dark => Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
        DiskColor::Light => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
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
