//! Static survey-results dashboard rendered as a terminal UI.
//!
//! Two fixed thesis analyses (certificate-completion motivation and
//! dissatisfaction-driven abandonment) are presented as grouped Likert
//! bar charts with interpretation paragraphs and chi-square tables. All
//! figures are compile-time literals; the only mutable state is which
//! section and which interpretation aspect the user has selected.

pub mod app;
pub mod data;
pub mod events;
pub mod logging;
pub mod state;
pub mod ui;
