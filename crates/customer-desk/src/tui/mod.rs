/*
[INPUT]:  Customer API handle, desk configuration, and log buffer
[OUTPUT]: Ratatui-based TUI for browsing and editing customer records
[POS]:    TUI module for the customer-desk binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
