//! Render tree: sidebar plus the active analysis view.
//!
//! Layout mirrors the dashboard page: a fixed-width sidebar on the left
//! and the selected analysis stacked vertically on the right (heading,
//! grouped bar chart, interpretation panel, chi-square table). Rendering
//! is a pure function of [`ViewState`]; nothing here mutates anything.

pub mod chart;
pub mod interpretation;
pub mod sidebar;
pub mod table;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::data::{self, Analysis};
use crate::state::ViewState;

const HEADER_HEIGHT: u16 = 2;
const INTERPRETATION_HEIGHT: u16 = 9;
const TABLE_HEIGHT: u16 = 9;

pub fn draw(frame: &mut Frame, state: &ViewState, ascii: bool) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar::WIDTH), Constraint::Min(40)])
        .split(frame.size());

    sidebar::render(frame, columns[0], state, ascii);

    let view = state.active_view();
    let analysis = view.section.analysis();
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(chart::MIN_HEIGHT),
            Constraint::Length(INTERPRETATION_HEIGHT),
            Constraint::Length(TABLE_HEIGHT),
        ])
        .split(columns[1]);

    render_header(frame, panels[0], analysis);
    chart::render(frame, panels[1], analysis, ascii);
    interpretation::render(frame, panels[2], analysis, view.aspect);
    table::render(frame, panels[3], &analysis.chi_square);
}

fn render_header(frame: &mut Frame, area: Rect, analysis: &Analysis) {
    let lines = vec![
        Line::from(Span::styled(
            data::PAGE_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(analysis.heading),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
