/*
[INPUT]:  LogBufferHandle snapshots for UI
[OUTPUT]: Log panel rendered into Ratatui frame
[POS]:    TUI UI logs panel rendering
[UPDATE]: 2026-10-13 Color lines by level
*/

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::LogBufferHandle;
use crate::tui::runtime::{border_style, log_snapshot};

fn level_style(line: &str) -> Style {
    if line.contains("ERROR") {
        Style::default().fg(Color::LightRed)
    } else if line.contains("WARN") {
        Style::default().fg(Color::Yellow)
    } else if line.contains("DEBUG") || line.contains("TRACE") {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    }
}

pub(in crate::tui) fn draw_logs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    buffer: &LogBufferHandle,
) {
    let lines = log_snapshot(buffer);
    let available = area.height.saturating_sub(2) as usize;
    let start = lines.len().saturating_sub(available);

    let text = lines[start..]
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), level_style(line))))
        .collect::<Vec<_>>();
    let log_widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Logs [Esc] close"),
    );
    frame.render_widget(log_widget, area);
}
