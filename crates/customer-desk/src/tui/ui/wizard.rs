/*
[INPUT]:  WizardScreen (controller, focus, scroll) and reference data
[OUTPUT]: Step progress bar, step form, and review summary
[POS]:    TUI UI customer wizard rendering
[UPDATE]: 2026-10-14 Required markers follow the step form's missing fields
[UPDATE]: 2026-10-15 Review summary reuses detail formatting
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use customer_desk::detail::{
    address_lines, contact_lines, format_date, full_name, gender, identity_lines, language,
};
use customer_desk::wizard::{FieldKey, FieldKind, Step, StepStatus, WizardMode, progress};
use customer_desk::{Customer, DeskConfig};

use crate::tui::app::{WizardScreen, choice_options};
use crate::tui::runtime::{border_style, disabled_style, focused_style, required_style};

pub(in crate::tui) fn draw_wizard(
    frame: &mut ratatui::Frame,
    area: Rect,
    wizard: &WizardScreen,
    config: &DeskConfig,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    draw_progress(frame, layout[0], wizard);
    if wizard.controller.current_step() == Step::Review {
        draw_review(frame, layout[1], wizard);
    } else {
        draw_form(frame, layout[1], wizard, config);
    }
    draw_status(frame, layout[2], wizard);
}

fn wizard_title(wizard: &WizardScreen) -> String {
    match wizard.controller.mode() {
        WizardMode::Create => "New customer".to_string(),
        WizardMode::Edit { customer_id } => format!("Edit customer #{customer_id}"),
    }
}

fn draw_progress(frame: &mut ratatui::Frame, area: Rect, wizard: &WizardScreen) {
    let mut spans = Vec::new();
    for (index, entry) in progress(wizard.controller.current_step()).iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" -- ", disabled_style()));
        }
        let (marker, style) = match entry.status {
            StepStatus::Complete => ("x", Style::default().fg(Color::Green)),
            StepStatus::Current => (
                ">",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            StepStatus::Upcoming => (" ", disabled_style()),
        };
        spans.push(Span::styled(
            format!("[{marker}] {} {}", entry.step.number(), entry.step.name()),
            style,
        ));
    }
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(wizard_title(wizard)),
    );
    frame.render_widget(widget, area);
}

fn entry_index(field: FieldKey) -> Option<usize> {
    match field {
        FieldKey::ContactType(i)
        | FieldKey::ContactValue(i)
        | FieldKey::ContactDialCode(i)
        | FieldKey::ProofType(i)
        | FieldKey::ProofNumber(i)
        | FieldKey::ProofIssuedDate(i)
        | FieldKey::ProofExpiryDate(i) => Some(i),
        _ => None,
    }
}

fn draw_form(frame: &mut ratatui::Frame, area: Rect, wizard: &WizardScreen, config: &DeskConfig) {
    let controller = &wizard.controller;
    let draft = controller.draft();
    let missing = controller.missing();
    let fields = wizard.fields();

    let mut lines = Vec::new();
    let mut focus_line = 0usize;
    let mut last_entry = None;
    for (index, field) in fields.iter().copied().enumerate() {
        let entry = entry_index(field);
        if entry.is_some() && entry != last_entry && last_entry.is_some() {
            lines.push(Line::from(""));
        }
        last_entry = entry;

        let focused = index == wizard.focus;
        if focused {
            focus_line = lines.len();
        }
        let value = field.read(draft);
        let shown = match field.kind() {
            FieldKind::Choice(set) => {
                let options = choice_options(config, set);
                let position = options
                    .iter()
                    .position(|option| option == &value)
                    .map(|i| format!(" ({}/{})", i + 1, options.len()))
                    .unwrap_or_default();
                format!("< {value} >{position}")
            }
            FieldKind::Date if value.is_empty() => "YYYY-MM-DD".to_string(),
            _ if focused => format!("{value}_"),
            _ => value,
        };

        let mut spans = vec![Span::raw(format!("{:<24}", field.label()))];
        let value_style = if focused {
            focused_style()
        } else if matches!(field.kind(), FieldKind::Date) && field.read(draft).is_empty() {
            disabled_style()
        } else {
            Style::default()
        };
        spans.push(Span::styled(shown, value_style));
        if missing.contains(&field) {
            spans.push(Span::styled("  * required", required_style()));
        }
        lines.push(Line::from(spans));
    }

    let visible = area.height.saturating_sub(2) as usize;
    let offset = (focus_line + 1).saturating_sub(visible) as u16;
    let widget = Paragraph::new(lines).scroll((offset, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(controller.current_step().title()),
    );
    frame.render_widget(widget, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn review_lines(customer: &Customer) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Personal Information"),
        Line::from(format!("  Name: {}", full_name(customer))),
        Line::from(format!(
            "  Date of birth: {}",
            format_date(&customer.details.date_of_birth)
        )),
        Line::from(format!("  Gender: {}", gender(customer))),
        Line::from(format!("  Language: {}", language(customer))),
        Line::from(""),
        heading("Address"),
    ];
    lines.extend(address_lines(customer).into_iter().map(|line| Line::from(format!("  {line}"))));
    lines.push(Line::from(""));
    lines.push(heading("Contact Details"));
    lines.extend(contact_lines(customer).into_iter().map(|line| Line::from(format!("  {line}"))));
    lines.push(Line::from(""));
    lines.push(heading("Identity Proofs"));
    lines.extend(identity_lines(customer).into_iter().map(|line| Line::from(format!("  {line}"))));
    lines
}

fn draw_review(frame: &mut ratatui::Frame, area: Rect, wizard: &WizardScreen) {
    let controller = &wizard.controller;
    let id = match controller.mode() {
        WizardMode::Create => 0,
        WizardMode::Edit { customer_id } => customer_id,
    };
    let customer = Customer {
        id,
        details: controller.draft().to_payload(),
    };
    let widget = Paragraph::new(review_lines(&customer))
        .wrap(Wrap { trim: false })
        .scroll((wizard.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Step::Review.title()),
        );
    frame.render_widget(widget, area);
}

fn draw_status(frame: &mut ratatui::Frame, area: Rect, wizard: &WizardScreen) {
    let controller = &wizard.controller;
    let (text, style) = if controller.is_submitting() {
        ("Submitting...".to_string(), disabled_style())
    } else if controller.current_step() == Step::Review {
        (
            "Review the record, then press [Ctrl+S] to submit.".to_string(),
            Style::default(),
        )
    } else if controller.can_advance() {
        (
            format!(
                "Step {} of {} complete. Press [Ctrl+N] to continue.",
                controller.current_step().number(),
                Step::LAST.number()
            ),
            Style::default().fg(Color::Green),
        )
    } else {
        let labels = controller
            .missing()
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>();
        (format!("Required: {}", labels.join(", ")), required_style())
    };
    let widget = Paragraph::new(Span::styled(text, style))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style()),
        );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use customer_desk::wizard::{WizardController, WizardSettings};

    #[test]
    fn test_review_lines_cover_every_section() {
        let controller = WizardController::create(&WizardSettings::default());
        let customer = Customer {
            id: 0,
            details: controller.draft().to_payload(),
        };
        let text = review_lines(&customer)
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>();
        assert!(text.contains(&"Personal Information".to_string()));
        assert!(text.contains(&"  Name: Unknown".to_string()));
        assert!(text.contains(&"Identity Proofs".to_string()));
    }

    #[test]
    fn test_entry_index_only_for_collection_fields() {
        assert_eq!(entry_index(FieldKey::ContactValue(2)), Some(2));
        assert_eq!(entry_index(FieldKey::City), None);
    }
}
