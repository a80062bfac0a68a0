//! Sidebar section selector.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::data;
use crate::state::{Section, ViewState};

pub const WIDTH: u16 = 34;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, ascii: bool) {
    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let analysis = section.analysis();
            let active = index == state.active_index();
            let marker = match (active, ascii) {
                (true, true) => "> ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            let text = if ascii {
                format!("{}{}", marker, analysis.title)
            } else {
                format!("{}{} {}", marker, analysis.icon, analysis.title)
            };
            let style = if active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(data::PAGE_TITLE),
    );
    frame.render_widget(list, area);
}
