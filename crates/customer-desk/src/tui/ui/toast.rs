/*
[INPUT]:  Active toast from the notifier
[OUTPUT]: Toast overlay in the top-right corner
[POS]:    TUI UI notification rendering
[UPDATE]: When toast placement or styling changes
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use customer_desk::notify::{Toast, ToastKind};

const TOAST_MAX_WIDTH: u16 = 48;

/// Top-right placement, sized to the message.
fn toast_area(area: Rect, message: &str) -> Rect {
    let inner_max = TOAST_MAX_WIDTH.saturating_sub(2).max(1);
    let text_width = (message.width() as u16).clamp(1, inner_max);
    let width = (text_width + 2).min(area.width);
    let lines = (message.width() as u16).div_ceil(inner_max).max(1);
    let height = (lines + 2).min(area.height);
    Rect::new(
        area.right().saturating_sub(width + 1),
        area.y + 1,
        width,
        height,
    )
}

pub(in crate::tui) fn draw_toast(frame: &mut ratatui::Frame, area: Rect, toast: &Toast) {
    let (color, title) = match toast.kind {
        ToastKind::Success => (Color::Green, "Success"),
        ToastKind::Error => (Color::LightRed, "Error"),
    };
    let rect = toast_area(area, &toast.message);
    let widget = Paragraph::new(toast.message.as_str())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(format!("{title} [Ctrl+X]")),
        );
    frame.render_widget(Clear, rect);
    frame.render_widget(widget, rect);
}
