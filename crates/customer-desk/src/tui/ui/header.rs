/*
[INPUT]:  AppState current route and screen
[OUTPUT]: Title bar with section breadcrumb
[POS]:    TUI UI header rendering
[UPDATE]: 2026-10-13 Breadcrumb per route instead of task tabs
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use customer_desk::route::Route;

use crate::tui::app::{AppState, Screen};
use crate::tui::runtime::border_style;

fn breadcrumb(app: &AppState) -> String {
    match app.navigator.current() {
        Route::Home => "Home".to_string(),
        Route::CustomerList => "Customers".to_string(),
        Route::CreateCustomer => "Customers / New".to_string(),
        Route::CustomerDetail { id } => format!("Customers / #{id}"),
        Route::EditCustomer { id } => match &app.screen {
            Screen::Wizard(_) => format!("Customers / #{id} / Edit"),
            _ => format!("Customers / #{id} / Edit (loading)"),
        },
        Route::NotFound { .. } => "Not found".to_string(),
    }
}

pub(in crate::tui) fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let line = Line::from(vec![
        Span::styled(
            " Customer Desk ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(breadcrumb(app), Style::default().fg(Color::Cyan)),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    frame.render_widget(widget, area);
}
