/*
[INPUT]:  TUI app state for each customer screen
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: 2026-10-13 Replace trading panels with customer screens
*/

mod detail;
mod header;
mod home;
mod list;
mod logs;
mod modal;
mod status;
mod toast;
mod wizard;

pub(in crate::tui) use detail::draw_customer_detail;
pub(in crate::tui) use header::draw_header;
pub(in crate::tui) use home::draw_home;
pub(in crate::tui) use list::draw_customer_list;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use modal::draw_delete_modal;
pub(in crate::tui) use status::{draw_loading, draw_not_found};
pub(in crate::tui) use toast::draw_toast;
pub(in crate::tui) use wizard::draw_wizard;
