/*
[INPUT]:  DetailScreen state for one customer
[OUTPUT]: Read-only record view rendered into Ratatui frame
[POS]:    TUI UI customer detail rendering
[UPDATE]: When detail sections change
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use customer_desk::Customer;
use customer_desk::detail::{
    DetailStatus, address_lines, contact_lines, format_date, full_name, gender, identity_lines,
    language,
};

use crate::tui::app::DetailScreen;
use crate::tui::runtime::{border_style, disabled_style};

pub(in crate::tui) fn draw_customer_detail(
    frame: &mut ratatui::Frame,
    area: Rect,
    detail: &DetailScreen,
) {
    let customer = match &detail.status {
        DetailStatus::Loading => {
            let widget = Paragraph::new(format!("Loading customer #{}...", detail.id))
                .style(disabled_style())
                .block(section_block("Customer"));
            frame.render_widget(widget, area);
            return;
        }
        DetailStatus::NotFound => {
            let widget = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Customer not found",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("No customer with id {} could be loaded.", detail.id)),
                Line::from("Press [Esc] to return to the list."),
            ])
            .block(section_block("Customer"));
            frame.render_widget(widget, area);
            return;
        }
        DetailStatus::Loaded(customer) => customer,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    frame.render_widget(personal_section(customer), top[0]);
    frame.render_widget(list_section("Address", address_lines(customer)), top[1]);
    frame.render_widget(list_section("Contact details", contact_lines(customer)), bottom[0]);

    let proofs = identity_lines(customer);
    let proofs = if proofs.is_empty() {
        vec!["No identity documents provided".to_string()]
    } else {
        proofs
    };
    frame.render_widget(list_section("Identity proofs", proofs), bottom[1]);
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(title)
}

fn labelled(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<15}"), disabled_style()),
        Span::raw(value),
    ])
}

fn personal_section(customer: &Customer) -> Paragraph<'static> {
    let title = format!("Customer #{}", customer.id);
    Paragraph::new(vec![
        Line::from(Span::styled(
            full_name(customer),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        labelled("Date of birth", format_date(&customer.details.date_of_birth)),
        labelled("Gender", gender(customer).to_string()),
        labelled("Language", language(customer).to_string()),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(title),
    )
}

fn list_section(title: &'static str, lines: Vec<String>) -> Paragraph<'static> {
    Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .wrap(Wrap { trim: true })
        .block(section_block(title))
}
