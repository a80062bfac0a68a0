//! Chi-square results table with alternating row shading and a footnote.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::data::ChiSquareTable;

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Length(29),
    Constraint::Length(10),
    Constraint::Length(4),
    Constraint::Length(27),
];

pub fn render(frame: &mut Frame, area: Rect, table: &ChiSquareTable) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Pruebas de chi-cuadrado");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(2)])
        .split(inner);

    let header = Row::new(["Prueba", "Valor", "gl", "Sig. asintótica (bilateral)"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = table.rows.iter().enumerate().map(|(index, row)| {
        Row::new([row.test, row.value, row.df, row.significance]).style(row_style(index))
    });
    let widget = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(1);
    frame.render_widget(widget, rows_area[0]);

    let note = Paragraph::new(table.note)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(note, rows_area[1]);
}

/// Alternating shading, un-shaded first: rows 0, 2, ... use the default
/// style, rows 1, 3, ... are shaded.
pub fn row_style(index: usize) -> Style {
    if index % 2 == 1 {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    }
}
