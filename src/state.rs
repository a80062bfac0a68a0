//! View state and its pure reducer.
//!
//! The whole interactive surface is two closed selections: which sidebar
//! section is active, and which interpretation aspect each section shows.
//! Every analysis view owns its own aspect, so switching sections never
//! disturbs the hidden view's selection. All transitions are total
//! functions applied synchronously from the event loop.

use crate::data::{self, Analysis, Aspect};
use crate::events::InputEvent;

/// Runtime configuration, all optional, all from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSONL session log destination. Logging is off when unset.
    pub log_path: Option<String>,
    /// Event poll timeout in milliseconds.
    pub tick_ms: u64,
    /// Drop emoji and block glyphs for plain-ASCII terminals.
    pub ascii: bool,
    /// Section shown on startup (index into [`Section::ALL`]).
    pub start_section: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_path: std::env::var("LOG_PATH").ok(),
            tick_ms: std::env::var("TICK_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(250),
            ascii: std::env::var("ASCII")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            start_section: std::env::var("START_SECTION")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|i| *i < Section::ALL.len())
                .unwrap_or(0),
        }
    }
}

/// The two fixed sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    CertificateCompletion,
    DissatisfactionAbandonment,
}

impl Section {
    pub const ALL: [Section; 2] = [
        Section::CertificateCompletion,
        Section::DissatisfactionAbandonment,
    ];

    pub fn index(&self) -> usize {
        match self {
            Section::CertificateCompletion => 0,
            Section::DissatisfactionAbandonment => 1,
        }
    }

    pub fn analysis(&self) -> &'static Analysis {
        &data::ANALYSES[self.index()]
    }
}

/// One sidebar section's view with its own aspect selection.
#[derive(Debug, Clone, Copy)]
pub struct SectionView {
    pub section: Section,
    pub aspect: Aspect,
}

impl SectionView {
    fn new(section: Section) -> Self {
        Self {
            section,
            aspect: Aspect::Overall,
        }
    }
}

/// What a state transition did, so the caller can log or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Idle,
    SectionChanged,
    AspectChanged,
    Quit,
}

/// Current user selections. Owned by the event loop, never shared.
#[derive(Debug, Clone)]
pub struct ViewState {
    views: [SectionView; 2],
    active: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::with_start(0)
    }

    pub fn with_start(start: usize) -> Self {
        Self {
            views: [
                SectionView::new(Section::CertificateCompletion),
                SectionView::new(Section::DissatisfactionAbandonment),
            ],
            active: start.min(Section::ALL.len() - 1),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_view(&self) -> &SectionView {
        &self.views[self.active]
    }

    pub fn view(&self, section: Section) -> &SectionView {
        &self.views[section.index()]
    }

    /// Apply one input event. Pure over the closed enumerations: unknown
    /// section indices and repeated selections are no-ops.
    pub fn apply(&mut self, event: InputEvent) -> Outcome {
        let len = Section::ALL.len();
        match event {
            InputEvent::Quit => Outcome::Quit,
            InputEvent::SectionNext => self.set_section((self.active + 1) % len),
            InputEvent::SectionPrev => self.set_section((self.active + len - 1) % len),
            InputEvent::SectionSelect(i) if i < len => self.set_section(i),
            InputEvent::SectionSelect(_) => Outcome::Idle,
            InputEvent::AspectNext => {
                let next = self.views[self.active].aspect.next();
                self.set_aspect(next)
            }
            InputEvent::AspectPrev => {
                let prev = self.views[self.active].aspect.prev();
                self.set_aspect(prev)
            }
            InputEvent::AspectSelect(aspect) => self.set_aspect(aspect),
        }
    }

    fn set_section(&mut self, index: usize) -> Outcome {
        if index == self.active {
            return Outcome::Idle;
        }
        self.active = index;
        Outcome::SectionChanged
    }

    fn set_aspect(&mut self, aspect: Aspect) -> Outcome {
        let view = &mut self.views[self.active];
        // Keep the invariant that the active aspect is a key of the
        // displayed interpretation set; fall back to its first key.
        let set = view.section.analysis().interpretations;
        let aspect = if set.contains(aspect) {
            aspect
        } else {
            set.aspects().next().unwrap_or(Aspect::Overall)
        };
        if aspect == view.aspect {
            return Outcome::Idle;
        }
        view.aspect = aspect;
        Outcome::AspectChanged
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
