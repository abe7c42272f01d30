/*
[INPUT]:  Customer id being loaded, or an unmatched path
[OUTPUT]: Loading and not-found placeholders
[POS]:    TUI UI transient screens
[UPDATE]: When placeholder texts change
*/

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::runtime::{border_style, disabled_style};

pub(in crate::tui) fn draw_loading(frame: &mut ratatui::Frame, area: Rect, id: u64) {
    let widget = Paragraph::new(format!("Loading customer #{id} for editing..."))
        .style(disabled_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Edit customer"),
        );
    frame.render_widget(widget, area);
}

pub(in crate::tui) fn draw_not_found(frame: &mut ratatui::Frame, area: Rect, path: &str) {
    let widget = Paragraph::new(vec![
        Line::from(Span::styled(
            "404 - Page not found",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Nothing lives at {path}")),
        Line::from("Press [Enter] to go home."),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    frame.render_widget(widget, area);
}
