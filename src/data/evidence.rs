//! Evidence the detective can collect
//!
//! Every evidence item exists from the start of the case in an uncollected
//! state. Items with a scene location are found by exploring the crime scene;
//! the rest are unlocked by interviews, lab results, or background checks.
//! Collection is one-way: evidence is never un-collected.

use serde::{Deserialize, Serialize};

/// Identifier for every evidence item in the case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EvidenceId {
    // Crime scene items
    Body,
    Decanter,
    Teacup,
    DeskCompartment,
    Calendar,
    Window,
    PoisonBook,
    // Forensic reports (lab unlocks)
    FingerprintReport,
    ToxReport,
    LuminolGloves,
    // Testimony and records (interview / background unlocks)
    KitchenLog,
    GardenInventory,
    FinancialReport,
    TheftRecord,
    ForgeryScandal,
}

/// Categories of evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceCategory {
    Physical,
    Testimony,
    Document,
    Forensic,
}

impl EvidenceCategory {
    pub fn symbol(&self) -> &'static str {
        match self {
            EvidenceCategory::Physical => "◆",
            EvidenceCategory::Testimony => "❝",
            EvidenceCategory::Document => "▤",
            EvidenceCategory::Forensic => "⚗",
        }
    }
}

impl std::fmt::Display for EvidenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvidenceCategory::Physical => write!(f, "PHYSICAL"),
            EvidenceCategory::Testimony => write!(f, "TESTIMONY"),
            EvidenceCategory::Document => write!(f, "DOCUMENT"),
            EvidenceCategory::Forensic => write!(f, "FORENSIC"),
        }
    }
}

/// A discrete clue in the case file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    pub id: EvidenceId,
    pub name: String,
    pub description: String,
    pub category: EvidenceCategory,
    /// Where the item sits at the crime scene. `None` means the item is only
    /// reachable through an unlock.
    pub location: Option<String>,
    pub collected: bool,
}

impl Evidence {
    pub fn scene(
        id: EvidenceId,
        name: &str,
        description: &str,
        category: EvidenceCategory,
        location: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            category,
            location: Some(location.to_string()),
            collected: false,
        }
    }

    pub fn unlockable(
        id: EvidenceId,
        name: &str,
        description: &str,
        category: EvidenceCategory,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            category,
            location: None,
            collected: false,
        }
    }

    /// One-line tag for list views.
    pub fn brief(&self) -> String {
        format!("{} {} - {}", self.category.symbol(), self.name, self.category)
    }
}
