/*
[INPUT]:  DeleteFlow state for the detail screen
[OUTPUT]: Delete confirmation modal
[POS]:    TUI UI modal rendering
[UPDATE]: 2026-10-14 Disable both actions while the delete is in flight
*/

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use customer_desk::delete::{DeleteFlow, DeleteState};

use crate::tui::runtime::hotkey;

pub(in crate::tui) fn draw_delete_modal(frame: &mut ratatui::Frame, area: Rect, flow: &DeleteFlow) {
    let customer_id = match flow.state() {
        DeleteState::Confirming { customer_id } | DeleteState::Deleting { customer_id } => {
            customer_id
        }
        _ => return,
    };
    let enabled = !flow.is_deleting();

    let mut actions = hotkey("Enter", flow.confirm_label(), enabled);
    actions.extend(hotkey("Esc", "Cancel", enabled));

    let text = vec![
        Line::from(Span::styled(
            "Confirm Delete",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Are you sure you want to delete customer #{customer_id}? This action cannot be undone."
        )),
        Line::from(""),
        Line::from(actions),
    ];

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightRed))
                .title("Delete customer"),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
