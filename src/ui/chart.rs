//! Grouped bar chart of Likert responses per region.
//!
//! Rendered as horizontal bars, one group per Likert category in the fixed
//! order of the data, with one bar per region inside each group. Bar
//! lengths are the literal percentages mapped to cells; the printed value
//! is the percentage verbatim, one decimal, untransformed.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::data::{self, Analysis};

/// Five groups of one label line plus one bar line per region, framed.
pub const MIN_HEIGHT: u16 = 17;

/// Original dashboard palette, one color per entry of [`data::REGIONS`].
const REGION_COLORS: [Color; 2] = [Color::Rgb(0x88, 0x84, 0xd8), Color::Rgb(0x82, 0xca, 0x9d)];

pub fn render(frame: &mut Frame, area: Rect, analysis: &Analysis, ascii: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(analysis.question);
    let paragraph = Paragraph::new(bar_lines(analysis, ascii)).block(block);
    frame.render_widget(paragraph, area);
}

/// Build the chart body. One cell per percentage point, so a 41.6% bar is
/// 42 cells long while its printed value stays exactly "41.6".
pub fn bar_lines(analysis: &Analysis, ascii: bool) -> Vec<Line<'static>> {
    let glyph = if ascii { "#" } else { "█" };
    let mut lines = Vec::with_capacity(analysis.responses.len() * (1 + data::REGIONS.len()));
    for row in analysis.responses {
        lines.push(Line::from(Span::styled(
            row.label,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (index, region) in data::REGIONS.iter().enumerate() {
            let value = row.values[index];
            let bar = glyph.repeat(value.round().max(0.0) as usize);
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<13} ", region)),
                Span::styled(bar, Style::default().fg(REGION_COLORS[index])),
                Span::raw(format!(" {:.1}", value)),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CERTIFICATE_COMPLETION;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn five_groups_with_two_bars_each() {
        let lines = bar_lines(&CERTIFICATE_COMPLETION, true);
        assert_eq!(lines.len(), 15);
        for group in 0..5 {
            let label = line_text(&lines[group * 3]);
            assert_eq!(label, CERTIFICATE_COMPLETION.responses[group].label);
            assert!(line_text(&lines[group * 3 + 1]).contains("North America"));
            assert!(line_text(&lines[group * 3 + 2]).contains("Latin America"));
        }
    }

    #[test]
    fn values_are_printed_verbatim() {
        let lines = bar_lines(&CERTIFICATE_COMPLETION, true);
        assert!(line_text(&lines[1]).ends_with(" 2.5"));
        assert!(line_text(&lines[2]).ends_with(" 5.9"));
        assert!(line_text(&lines[13]).ends_with(" 30.8"));
        assert!(line_text(&lines[14]).ends_with(" 42.4"));
    }

    #[test]
    fn bar_length_tracks_the_percentage() {
        let lines = bar_lines(&CERTIFICATE_COMPLETION, true);
        // Strongly agree / Latin America: 42.4% rounds to 42 cells.
        let bar: String = line_text(&lines[14]);
        assert_eq!(bar.matches('#').count(), 42);
        // Strongly disagree / North America: 2.5% rounds to 3 cells.
        let bar: String = line_text(&lines[1]);
        assert_eq!(bar.matches('#').count(), 3);
    }
}
