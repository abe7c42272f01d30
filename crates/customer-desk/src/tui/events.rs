/*
[INPUT]:  Crossterm key events
[OUTPUT]: Screen-specific key routing into AppState
[POS]:    TUI event handling
[UPDATE]: 2026-10-13 Route keys per customer screen instead of per tab
[UPDATE]: 2026-10-15 Wizard editing keys and delete modal keys
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use customer_desk::route::Route;
use customer_desk::wizard::{FieldKind, WizardMode};

use super::app::{AppState, HOME_ITEMS, Screen, cycle_choice, is_text_field};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('l') if ctrl => {
            app.show_logs = !app.show_logs;
            return false;
        }
        KeyCode::Char('x') if ctrl => {
            app.notifier.dismiss();
            return false;
        }
        _ => {}
    }

    if app.show_logs {
        if key.code == KeyCode::Esc {
            app.show_logs = false;
        }
        return false;
    }

    match &app.screen {
        Screen::Home { .. } => handle_home_key(app, key.code),
        Screen::List(_) => handle_list_key(app, key.code),
        Screen::Detail(_) => {
            handle_detail_key(app, key.code);
            false
        }
        Screen::Wizard(_) => {
            handle_wizard_key(app, key.code, ctrl);
            false
        }
        Screen::LoadingEdit { id } => {
            if key.code == KeyCode::Esc {
                let id = *id;
                app.navigate(Route::CustomerDetail { id });
            }
            false
        }
        Screen::NotFound { .. } => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.navigate(Route::Home);
            }
            false
        }
    }
}

fn handle_home_key(app: &mut AppState, key: KeyCode) -> bool {
    let Screen::Home { selected } = &mut app.screen else {
        return false;
    };
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Up => *selected = selected.saturating_sub(1),
        KeyCode::Down => *selected = (*selected + 1).min(HOME_ITEMS.len() - 1),
        KeyCode::Enter => {
            let route = if *selected == 0 {
                Route::CustomerList
            } else {
                Route::CreateCustomer
            };
            app.navigate(route);
        }
        KeyCode::Char('l') => app.navigate(Route::CustomerList),
        KeyCode::Char('n') => app.navigate(Route::CreateCustomer),
        _ => {}
    }
    false
}

fn handle_list_key(app: &mut AppState, key: KeyCode) -> bool {
    let Screen::List(list) = &mut app.screen else {
        return false;
    };
    let reload = match key {
        KeyCode::Char('q') => return true,
        KeyCode::Up => {
            list.move_selection(-1);
            false
        }
        KeyCode::Down => {
            list.move_selection(1);
            false
        }
        KeyCode::Left => list.previous_page(),
        KeyCode::Right => list.next_page(),
        KeyCode::Home => list.first_page(),
        KeyCode::End => list.last_page(),
        KeyCode::Char('r') => true,
        KeyCode::Enter => {
            if let Some(id) = list.selected_customer().map(|customer| customer.id) {
                app.navigate(Route::CustomerDetail { id });
            }
            return false;
        }
        KeyCode::Char('n') => {
            app.navigate(Route::CreateCustomer);
            return false;
        }
        KeyCode::Esc => {
            app.navigate(Route::Home);
            return false;
        }
        _ => false,
    };
    if reload {
        app.reload_list();
    }
    false
}

fn handle_detail_key(app: &mut AppState, key: KeyCode) {
    let Screen::Detail(detail) = &mut app.screen else {
        return;
    };

    if detail.delete.is_modal_open() {
        match key {
            KeyCode::Enter | KeyCode::Char('y') => app.confirm_delete(),
            KeyCode::Esc | KeyCode::Char('n') => {
                if let Err(err) = detail.delete.cancel() {
                    debug!(error = %err, "cancel ignored");
                }
            }
            _ => {}
        }
        return;
    }

    let id = detail.id;
    let loaded = detail.customer().is_some();
    match key {
        KeyCode::Char('e') if loaded => app.navigate(Route::EditCustomer { id }),
        KeyCode::Char('d') if loaded => {
            if let Err(err) = detail.delete.request(id) {
                debug!(error = %err, "delete request ignored");
            }
        }
        KeyCode::Esc => app.navigate(Route::CustomerList),
        _ => {}
    }
}

fn handle_wizard_key(app: &mut AppState, key: KeyCode, ctrl: bool) {
    if key == KeyCode::Esc {
        let back = match &app.screen {
            Screen::Wizard(wizard) => match wizard.controller.mode() {
                WizardMode::Create => Route::CustomerList,
                WizardMode::Edit { customer_id } => Route::CustomerDetail { id: customer_id },
            },
            _ => Route::CustomerList,
        };
        app.navigate(back);
        return;
    }

    if ctrl && key == KeyCode::Char('s') {
        app.submit_wizard();
        return;
    }

    let options = match &app.screen {
        Screen::Wizard(wizard) => wizard.focused_field().and_then(|field| match field.kind() {
            FieldKind::Choice(set) => Some(app.choices(set)),
            _ => None,
        }),
        _ => None,
    };

    let Screen::Wizard(wizard) = &mut app.screen else {
        return;
    };
    let focused = wizard.focused_field();

    match key {
        KeyCode::Char('n') if ctrl => {
            match wizard.controller.advance() {
                Ok(step) => {
                    debug!(%step, "advanced");
                    wizard.reset_view();
                }
                Err(err) => debug!(error = %err, "advance blocked"),
            }
        }
        KeyCode::Char('p') if ctrl => {
            if wizard.controller.retreat().is_ok() {
                wizard.reset_view();
            }
        }
        KeyCode::Char('a') if ctrl => {
            wizard.controller.add_entry();
        }
        KeyCode::Char('r') if ctrl => {
            if let Some(index) = wizard.focused_entry() {
                wizard.controller.remove_entry(index);
                wizard.clamp_focus();
            }
        }
        KeyCode::Tab | KeyCode::Down => wizard.move_focus(1),
        KeyCode::BackTab | KeyCode::Up => wizard.move_focus(-1),
        KeyCode::Left | KeyCode::Right => {
            let delta = if key == KeyCode::Left { -1 } else { 1 };
            if let (Some(field), Some(options)) = (focused, options.as_deref()) {
                let current = field.read(wizard.controller.draft());
                if let Some(value) = cycle_choice(options, &current, delta) {
                    wizard.controller.edit_field(field, &value);
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = focused.filter(|field| is_text_field(*field)) {
                let mut value = field.read(wizard.controller.draft());
                value.pop();
                wizard.controller.edit_field(field, &value);
            }
        }
        KeyCode::Char(ch) if !ctrl => {
            if let Some(field) = focused.filter(|field| is_text_field(*field)) {
                let mut value = field.read(wizard.controller.draft());
                value.push(ch);
                wizard.controller.edit_field(field, &value);
            }
        }
        KeyCode::Enter => {
            if wizard.controller.current_step() == customer_desk::wizard::Step::LAST {
                app.submit_wizard();
            } else if wizard.controller.advance().is_ok() {
                wizard.reset_view();
            }
        }
        _ => {}
    }
}
