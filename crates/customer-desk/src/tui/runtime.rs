/*
[INPUT]:  Customer API handle, desk configuration, log buffer, terminal input
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
[UPDATE]: 2026-10-13 Route API results through the event channel with screen generations
[UPDATE]: 2026-10-15 Drive redirects and toast expiry from the tick
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;

use customer_desk::route::Route;
use customer_desk::{CustomerApi, DeskConfig};

use super::app::{ApiMessage, AppState, Screen};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::*;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Lines from the buffer, or nothing if a writer panicked while holding the lock.
pub(crate) fn log_snapshot(buffer: &LogBufferHandle) -> Vec<String> {
    buffer
        .lock()
        .map(|guard| guard.snapshot())
        .unwrap_or_default()
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl LogWriter {
    fn push(&self, line: String) {
        if let Ok(mut guard) = self.buffer.lock() {
            guard.push_line(line);
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            self.push(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

pub(super) enum UiEvent {
    Input(CrosstermEvent),
    Api(ApiMessage),
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn key_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn disabled_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub(crate) fn focused_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub(crate) fn required_style() -> Style {
    Style::default().fg(Color::LightRed)
}

/// Hotkey hint; greyed out when the action is unavailable.
pub(crate) fn hotkey(key: &str, label: &str, enabled: bool) -> Vec<Span<'static>> {
    let (key_style, label_style) = if enabled {
        (key_style(), Style::default())
    } else {
        (disabled_style(), disabled_style())
    };
    vec![
        Span::styled(format!("[{key}]"), key_style),
        Span::styled(format!(" {label}  "), label_style),
    ]
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let mut screen_keys: Vec<Span> = screen_hotkeys(app);
    screen_keys.extend(hotkey("Ctrl+L", "Logs", true));
    screen_keys.extend(hotkey("Ctrl+C", "Quit", true));
    let line2 = Line::from(vec![
        Span::raw("Route: "),
        Span::styled(
            app.navigator.current().path(),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![Line::from(screen_keys), line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn screen_hotkeys(app: &AppState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    match &app.screen {
        Screen::Home { .. } => {
            spans.extend(hotkey("Up/Down", "Select", true));
            spans.extend(hotkey("Enter", "Open", true));
            spans.extend(hotkey("q", "Quit", true));
        }
        Screen::List(list) => {
            spans.extend(hotkey("Up/Down", "Select", !list.rows().is_empty()));
            spans.extend(hotkey("Enter", "Details", list.selected_customer().is_some()));
            spans.extend(hotkey("Left/Right", "Page", list.total_pages() > 1));
            spans.extend(hotkey("n", "New", true));
            spans.extend(hotkey("r", "Reload", !list.is_loading()));
            spans.extend(hotkey("Esc", "Home", true));
        }
        Screen::Detail(detail) => {
            if detail.delete.is_modal_open() {
                spans.extend(hotkey("Enter", detail.delete.confirm_label(), !detail.delete.is_deleting()));
                spans.extend(hotkey("Esc", "Cancel", !detail.delete.is_deleting()));
            } else {
                let loaded = detail.customer().is_some();
                spans.extend(hotkey("e", "Edit", loaded));
                spans.extend(hotkey("d", "Delete", loaded));
                spans.extend(hotkey("Esc", "Back", true));
            }
        }
        Screen::Wizard(wizard) => {
            let controller = &wizard.controller;
            let on_review = controller.current_step() == customer_desk::wizard::Step::LAST;
            spans.extend(hotkey("Tab", "Field", !on_review));
            spans.extend(hotkey("Left/Right", "Choose", !on_review));
            spans.extend(hotkey("Ctrl+P", "Back", controller.current_step().previous().is_some()));
            if on_review {
                let label = if controller.is_submitting() {
                    "Submitting..."
                } else {
                    "Submit"
                };
                spans.extend(hotkey("Ctrl+S", label, !controller.is_submitting()));
            } else {
                spans.extend(hotkey("Ctrl+N", "Next", controller.can_advance()));
            }
            if controller.form().step().has_entries() {
                spans.extend(hotkey("Ctrl+A", "Add", true));
                spans.extend(hotkey("Ctrl+R", "Remove", wizard.can_remove()));
            }
            spans.extend(hotkey("Esc", "Cancel", true));
        }
        Screen::LoadingEdit { .. } => {
            spans.extend(hotkey("Esc", "Cancel", true));
        }
        Screen::NotFound { .. } => {
            spans.extend(hotkey("Enter", "Home", true));
        }
    }
    spans
}

pub async fn run_tui(
    api: Arc<dyn CustomerApi>,
    config: DeskConfig,
    start: Route,
    log_buffer: LogBufferHandle,
    shutdown: CancellationToken,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = shutdown.child_token();
    let input_shutdown_clone = input_shutdown.clone();
    let input_tx = event_tx.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false)
                && let Ok(event) = crossterm::event::read()
                && input_tx.send(UiEvent::Input(event)).is_err()
            {
                break;
            }
        }
    });

    let mut app = AppState::new(api, config, log_buffer, event_tx);
    app.navigate(start);

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {
                app.on_tick(Instant::now());
            }
            _ = shutdown.cancelled() => {
                info!("shutdown requested");
                should_quit = true;
            }
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        if handle_key_event(&mut app, key) {
                            should_quit = true;
                        }
                    }
                    Some(UiEvent::Api(message)) => app.handle_api(message),
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(area);

    draw_header(frame, layout[0], app);

    if app.show_logs {
        draw_logs(frame, layout[1], &app.log_buffer);
    } else {
        match &app.screen {
            Screen::Home { selected } => draw_home(frame, layout[1], *selected),
            Screen::List(list) => draw_customer_list(frame, layout[1], list),
            Screen::Detail(detail) => draw_customer_detail(frame, layout[1], detail),
            Screen::Wizard(wizard) => draw_wizard(frame, layout[1], wizard, &app.config),
            Screen::LoadingEdit { id } => draw_loading(frame, layout[1], *id),
            Screen::NotFound { path } => draw_not_found(frame, layout[1], path),
        }
    }

    draw_footer(frame, layout[2], app);

    if let Screen::Detail(detail) = &app.screen
        && detail.delete.is_modal_open()
    {
        draw_delete_modal(frame, centered_rect(area, 50, 30), &detail.delete);
    }

    if let Some(toast) = app.notifier.current() {
        draw_toast(frame, area, toast);
    }
}

pub(crate) fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
