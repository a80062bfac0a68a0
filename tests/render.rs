//! Render tests over a test backend.
//!
//! Draws the full dashboard into an in-memory terminal (ASCII mode, so
//! assertions are glyph-stable) and checks the visible text: sidebar
//! highlight, Likert group order, literal percentages, interpretation
//! paragraphs, and the chi-square table with its footnote.

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use surveydash::data::Aspect;
use surveydash::events::InputEvent;
use surveydash::state::{Section, ViewState};
use surveydash::ui;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 50;

/// Draw the state and return the screen as one string per row.
fn draw(state: &ViewState) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::draw(frame, state, true)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut lines = Vec::new();
    let mut line = String::new();
    for (i, cell) in buffer.content.iter().enumerate() {
        line.push_str(cell.symbol());
        if (i + 1) % width == 0 {
            lines.push(std::mem::take(&mut line));
        }
    }
    lines
}

fn screen(lines: &[String]) -> String {
    lines.join("\n")
}

fn find_line(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("{:?} not on screen", needle))
}

// ---------------------------------------------------------------------------
// Initial load
// ---------------------------------------------------------------------------

#[test]
fn initial_load_shows_certificate_overall() {
    let lines = draw(&ViewState::new());
    let text = screen(&lines);

    assert!(text.contains("Thesis Research"));
    assert!(text.contains("Análisis de Certificado de Conclusión"));
    // The verbatim overall paragraph for the certificate analysis.
    assert!(text.contains("positiva"));
    assert!(text.contains("proporcionada"));
    // Exactly one analysis view is shown.
    assert!(text.contains("34.997ᵃ"));
    assert!(!text.contains("28.255"));
}

#[test]
fn sidebar_highlights_exactly_the_active_entry() {
    let lines = draw(&ViewState::new());
    let text = screen(&lines);
    assert!(text.contains("> Certificado de conclusión"));
    assert!(text.contains("  Insatisfacción x Abandono"));
    assert!(!text.contains("> Insatisfacción"));

    let mut state = ViewState::new();
    state.apply(InputEvent::SectionSelect(1));
    let text = screen(&draw(&state));
    assert!(text.contains("> Insatisfacción x Abandono"));
    assert!(!text.contains("> Certificado"));
}

// ---------------------------------------------------------------------------
// Chart panel
// ---------------------------------------------------------------------------

#[test]
fn chart_renders_five_likert_groups_in_order_with_two_bars_each() {
    let lines = draw(&ViewState::new());

    let y1 = find_line(&lines, "Strongly disagree");
    let y2 = find_line(&lines, "Disagree");
    let y3 = find_line(&lines, "Neither agree nor disagree");
    let y4 = find_line(&lines, "Agree");
    let y5 = find_line(&lines, "Strongly agree");
    assert!(y1 < y2 && y2 < y3 && y3 < y4 && y4 < y5);

    for y in [y1, y2, y3, y4, y5] {
        assert!(lines[y + 1].contains("North America"));
        assert!(lines[y + 2].contains("Latin America"));
    }
}

#[test]
fn strongly_agree_bars_carry_the_literal_percentages() {
    let lines = draw(&ViewState::new());
    let y = find_line(&lines, "Strongly agree");
    assert!(lines[y + 1].contains("North America"));
    assert!(lines[y + 1].contains("30.8"));
    assert!(lines[y + 2].contains("Latin America"));
    assert!(lines[y + 2].contains("42.4"));
}

// ---------------------------------------------------------------------------
// Interpretation panel
// ---------------------------------------------------------------------------

#[test]
fn selecting_an_aspect_swaps_the_paragraph() {
    let mut state = ViewState::new();
    state.apply(InputEvent::AspectSelect(Aspect::Regional));
    let text = screen(&draw(&state));
    // Unique to the certificate regional paragraph.
    assert!(text.contains("particularmente"));
    assert!(!text.contains("proporcionada"));
}

#[test]
fn aspect_tabs_are_label_cased() {
    let text = screen(&draw(&ViewState::new()));
    for tab in ["Overall", "Regional", "Disagreement", "Neutral"] {
        assert!(text.contains(tab), "missing tab {}", tab);
    }
}

#[test]
fn hidden_sections_keep_their_aspect_across_switches() {
    let mut state = ViewState::new();
    state.apply(InputEvent::AspectSelect(Aspect::Neutral));
    state.apply(InputEvent::SectionSelect(1));

    // The other section still opens on its own overall paragraph.
    let text = screen(&draw(&state));
    assert!(text.contains("mixta"));

    state.apply(InputEvent::SectionSelect(0));
    let text = screen(&draw(&state));
    // Certificate neutral paragraph, not overall.
    assert!(text.contains("18.1%"));
    assert!(!text.contains("proporcionada"));
    assert_eq!(
        state.view(Section::DissatisfactionAbandonment).aspect,
        Aspect::Overall
    );
}

// ---------------------------------------------------------------------------
// Chi-square table
// ---------------------------------------------------------------------------

#[test]
fn table_rows_render_in_input_order_with_the_footnote() {
    let lines = draw(&ViewState::new());
    let header = find_line(&lines, "Sig. asintótica (bilateral)");
    let pearson = find_line(&lines, "Chi-cuadrado de Pearson");
    let likelihood = find_line(&lines, "Razón de verosimilitud");
    let linear = find_line(&lines, "Asociación lineal por lineal");
    let valid_n = find_line(&lines, "N de casos válidos");
    assert!(header < pearson && pearson < likelihood);
    assert!(likelihood < linear && linear < valid_n);

    let text = screen(&lines);
    assert!(text.contains("34.997ᵃ"));
    assert!(text.contains("22.69"));
}

#[test]
fn switching_sections_swaps_the_whole_analysis() {
    let mut state = ViewState::new();
    state.apply(InputEvent::SectionSelect(1));
    let text = screen(&draw(&state));

    assert!(text.contains("Análisis de Insatisfacción y Abandono"));
    assert!(text.contains("28.255ᵃ"));
    assert!(text.contains("39.95"));
    assert!(!text.contains("34.997"));
    assert!(!text.contains("22.69"));
}
