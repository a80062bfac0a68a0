//! Event loop: poll input, apply the reducer, redraw.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::events::{self, InputEvent};
use crate::logging::{json_log, obj, v_num, v_str};
use crate::state::{Config, Outcome, Section, ViewState};
use crate::ui;

pub struct App {
    pub state: ViewState,
    should_quit: bool,
}

impl App {
    pub fn new(cfg: &Config) -> Self {
        Self {
            state: ViewState::with_start(cfg.start_section),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one input event and log what it changed.
    pub fn handle(&mut self, event: InputEvent) {
        match self.state.apply(event) {
            Outcome::Quit => {
                self.should_quit = true;
            }
            Outcome::SectionChanged => {
                let view = self.state.active_view();
                json_log(
                    "section_select",
                    obj(&[
                        ("section", v_str(view.section.analysis().title)),
                        ("index", v_num(self.state.active_index() as f64)),
                    ]),
                );
            }
            Outcome::AspectChanged => {
                let view = self.state.active_view();
                json_log(
                    "aspect_select",
                    obj(&[
                        ("section", v_str(view.section.analysis().title)),
                        ("aspect", v_str(view.aspect.key())),
                    ]),
                );
            }
            Outcome::Idle => {}
        }
    }
}

/// Run the dashboard until the user quits. Generic over the backend so
/// tests can drive it against a test terminal.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, cfg: &Config) -> Result<()> {
    let mut app = App::new(cfg);
    json_log(
        "session_start",
        obj(&[("sections", v_num(Section::ALL.len() as f64))]),
    );

    loop {
        terminal.draw(|frame| ui::draw(frame, &app.state, cfg.ascii))?;
        if event::poll(Duration::from_millis(cfg.tick_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(input) = events::map_key(key) {
                        app.handle(input);
                    }
                }
                _ => {}
            }
        }
        if app.should_quit() {
            break;
        }
    }

    json_log("session_end", obj(&[]));
    Ok(())
}
