/*
[INPUT]:  Selected home menu index
[OUTPUT]: Home menu rendered into Ratatui frame
[POS]:    TUI UI home screen
[UPDATE]: When home menu entries change
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::tui::app::HOME_ITEMS;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_home(frame: &mut ratatui::Frame, area: Rect, selected: usize) {
    let items = HOME_ITEMS
        .iter()
        .map(|item| ListItem::new(*item))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Customer records"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(selected.min(HOME_ITEMS.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}
