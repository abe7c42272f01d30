/*
[INPUT]:  CustomerList screen state
[OUTPUT]: Customer table with pagination bar
[POS]:    TUI UI customer list rendering
[UPDATE]: 2026-10-14 Pagination window with ellipses
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use customer_desk::list::{CustomerList, ListStatus, PageItem, row_country, row_name};

use crate::tui::runtime::{border_style, disabled_style, header_style};

pub(in crate::tui) fn draw_customer_list(frame: &mut ratatui::Frame, area: Rect, list: &CustomerList) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(format!("Customers ({} total)", list.total_elements()));

    match list.status() {
        ListStatus::Loading => {
            let widget = Paragraph::new("Loading customers...")
                .style(disabled_style())
                .block(block);
            frame.render_widget(widget, layout[0]);
        }
        ListStatus::Failed { message, retryable } => {
            let hint = if *retryable {
                "Press [r] to retry."
            } else {
                "Check api.base_url in the configuration, then press [r]."
            };
            let widget = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Failed to load customers.",
                    Style::default().fg(Color::LightRed),
                )),
                Line::from(Span::styled(message.clone(), disabled_style())),
                Line::from(hint),
            ])
            .block(block);
            frame.render_widget(widget, layout[0]);
        }
        ListStatus::Loaded(_) if list.rows().is_empty() => {
            let widget = Paragraph::new("No customers found. Press [n] to create one.").block(block);
            frame.render_widget(widget, layout[0]);
        }
        ListStatus::Loaded(_) => draw_table(frame, layout[0], list, block),
    }

    draw_pagination(frame, layout[1], list);
}

fn draw_table(frame: &mut ratatui::Frame, area: Rect, list: &CustomerList, block: Block) {
    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Name"),
        Cell::from("Date of birth"),
        Cell::from("Country"),
    ])
    .style(header_style());

    let rows = list.rows().iter().map(|customer| {
        Row::new(vec![
            Cell::from(customer.id.to_string()),
            Cell::from(row_name(customer)),
            Cell::from(customer_desk::detail::format_date(&customer.details.date_of_birth)),
            Cell::from(row_country(customer).to_string()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(list.selected()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_pagination(frame: &mut ratatui::Frame, area: Rect, list: &CustomerList) {
    let current = list.page();
    let mut spans = vec![Span::styled("< ", page_arrow(current > 0))];
    for item in list.window() {
        match item {
            PageItem::Page(page) if page == current => spans.push(Span::styled(
                format!(" {} ", page + 1),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            PageItem::Page(page) => spans.push(Span::raw(format!(" {} ", page + 1))),
            PageItem::Ellipsis => spans.push(Span::styled(" ... ", disabled_style())),
        }
    }
    let has_next = current + 1 < list.total_pages();
    spans.push(Span::styled(" >", page_arrow(has_next)));
    spans.push(Span::raw(format!(
        "   page {} of {}",
        current + 1,
        list.total_pages().max(1)
    )));

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    frame.render_widget(widget, area);
}

fn page_arrow(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Cyan)
    } else {
        disabled_style()
    }
}
