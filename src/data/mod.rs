//! Data structures for the case
//!
//! Defines evidence, suspects, dialogue, lab tests and the id enums that key
//! them. Every id space in the game is closed and known at compile time, so
//! ids are plain enums rather than strings or generated identifiers - a
//! lookup can miss a precondition, but it can never name a thing that does
//! not exist.

pub mod dialogue;
pub mod evidence;
pub mod lab;
pub mod suspects;

pub use dialogue::*;
pub use evidence::*;
pub use lab::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};

/// The views of the case file. The current tab is part of persisted state so
/// a reloaded game resumes where the detective left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Home,
    CrimeScene,
    Interviews,
    EvidenceBoard,
    Lab,
    Background,
    Accusation,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Home,
        Tab::CrimeScene,
        Tab::Interviews,
        Tab::EvidenceBoard,
        Tab::Lab,
        Tab::Background,
        Tab::Accusation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Case File",
            Tab::CrimeScene => "Crime Scene",
            Tab::Interviews => "Interviews",
            Tab::EvidenceBoard => "Evidence Board",
            Tab::Lab => "Forensic Lab",
            Tab::Background => "Archives & Records",
            Tab::Accusation => "Accusation",
        }
    }

    pub fn next(&self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| t == self).unwrap_or(0);
        Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Method of killing, as listed on the indictment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodId {
    PoisonedPort,
    BluntForce,
    Strangulation,
    PoisonedTea,
}

impl MethodId {
    pub const ALL: [MethodId; 4] = [
        MethodId::PoisonedPort,
        MethodId::BluntForce,
        MethodId::Strangulation,
        MethodId::PoisonedTea,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MethodId::PoisonedPort => "Poisoned Port Wine",
            MethodId::BluntForce => "Blunt Force Trauma",
            MethodId::Strangulation => "Strangulation",
            MethodId::PoisonedTea => "Poisoned Tea",
        }
    }
}

/// Motive, as listed on the indictment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotiveId {
    Inheritance,
    RevengeAffair,
    AcademicTheft,
    SilenceFraud,
}

impl MotiveId {
    pub const ALL: [MotiveId; 4] = [
        MotiveId::Inheritance,
        MotiveId::RevengeAffair,
        MotiveId::AcademicTheft,
        MotiveId::SilenceFraud,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MotiveId::Inheritance => "Inheritance Money",
            MotiveId::RevengeAffair => "Revenge for Affair/Firing",
            MotiveId::AcademicTheft => "Academic Theft",
            MotiveId::SilenceFraud => "To Silence Fraud Exposure",
        }
    }
}

/// Time of incident, as listed on the indictment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDeath {
    ElevenPm,
    ElevenFifteen,
    ElevenThirtyFive,
    ElevenFifty,
}

impl TimeOfDeath {
    pub const ALL: [TimeOfDeath; 4] = [
        TimeOfDeath::ElevenPm,
        TimeOfDeath::ElevenFifteen,
        TimeOfDeath::ElevenThirtyFive,
        TimeOfDeath::ElevenFifty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDeath::ElevenPm => "11:00 PM",
            TimeOfDeath::ElevenFifteen => "11:15 PM",
            TimeOfDeath::ElevenThirtyFive => "11:35 PM",
            TimeOfDeath::ElevenFifty => "11:50 PM",
        }
    }
}
