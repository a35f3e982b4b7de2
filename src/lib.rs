//! The Midnight Manuscript
//!
//! A noir detective mystery for the terminal. Professor Richard Ashford lies
//! dead in his library at Ashford Manor, and a priceless manuscript sits at
//! the center of it. You work the case: comb the crime scene, interrogate
//! five suspects, run forensic lab tests, pull background records, and file
//! one accusation with the D.A.
//!
//! # Game Mechanics
//!
//! - **Crime Scene**: Examine the library and log physical evidence
//! - **Interviews**: Confront suspects; some questions open up only once you
//!   hold the right evidence, and some answers unlock new evidence
//! - **Lab**: Timed forensic tests, each gated on a collected exhibit
//! - **Background**: Records searches that may surface debts, priors, or alibis
//! - **Accusation**: One theory - suspect, method, motive, time, exhibits -
//!   checked against the facts of the case
//!
//! # Architecture
//!
//! - `game` - Case state, transition rules, content catalog, timer scheduler
//! - `data` - Entity definitions for evidence, suspects, dialogue, lab tests
//! - `persistence` - Autosaved case file on disk
//! - `tui` - Terminal user interface with ratatui

pub mod data;
pub mod game;
pub mod persistence;
pub mod tui;

pub use game::GameState;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Save file corrupted: {0}")]
    CorruptedSave(String),

    #[error("Could not access save file at {path}: {source}")]
    SaveIo {
        path: String,
        source: std::io::Error,
    },
}
