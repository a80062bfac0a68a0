//! Interactive interpretation panel: aspect tabs plus the active paragraph.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::data::{Analysis, Aspect, InterpretationSet};

pub fn render(frame: &mut Frame, area: Rect, analysis: &Analysis, aspect: Aspect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Interpretación Interactiva del Análisis");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let set = &analysis.interpretations;
    let titles: Vec<Line> = set.aspects().map(|a| Line::from(title_case(a.key()))).collect();
    let tabs = Tabs::new(titles)
        .select(tab_index(set, aspect))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, rows[0]);

    let paragraph = Paragraph::new(set.get(aspect)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, rows[2]);
}

/// Position of the active aspect among the set's keys. An aspect that is
/// not a key selects the first tab, matching the paragraph fallback.
pub fn tab_index(set: &InterpretationSet, aspect: Aspect) -> usize {
    set.aspects().position(|a| a == aspect).unwrap_or(0)
}

/// Label-case an aspect key: "overall" becomes "Overall".
pub fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CERTIFICATE_COMPLETION;

    #[test]
    fn tab_titles_are_label_cased() {
        assert_eq!(title_case("overall"), "Overall");
        assert_eq!(title_case("neutral"), "Neutral");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn exactly_one_tab_is_selected_per_aspect() {
        let set = &CERTIFICATE_COMPLETION.interpretations;
        let indices: Vec<usize> = Aspect::ALL.iter().map(|a| tab_index(set, *a)).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unknown_aspect_selects_the_first_tab() {
        let partial = InterpretationSet::new(&[(Aspect::Regional, "r"), (Aspect::Neutral, "n")]);
        assert_eq!(tab_index(&partial, Aspect::Disagreement), 0);
    }
}
