//! The five people who were at Ashford Manor that night
//!
//! Suspect records are immutable for the session. `is_guilty` exists only for
//! the accusation check and is never shown to the player.

use serde::{Deserialize, Serialize};

/// Identifier for each suspect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SuspectId {
    Victoria,
    James,
    Margaret,
    Thomas,
    Olivia,
}

impl SuspectId {
    pub const ALL: [SuspectId; 5] = [
        SuspectId::Victoria,
        SuspectId::James,
        SuspectId::Margaret,
        SuspectId::Thomas,
        SuspectId::Olivia,
    ];
}

/// A suspect's dossier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suspect {
    pub id: SuspectId,
    pub name: String,
    pub role: String,
    pub age: u8,
    pub description: String,
    /// Working theory of motive. Flavor for the dossier, not the verdict.
    pub motive: String,
    pub alibi: String,
    /// Never rendered. Consulted only when an accusation is verified.
    pub is_guilty: bool,
}

impl Suspect {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: SuspectId,
        name: &str,
        role: &str,
        age: u8,
        description: &str,
        motive: &str,
        alibi: &str,
        is_guilty: bool,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            role: role.to_string(),
            age,
            description: description.to_string(),
            motive: motive.to_string(),
            alibi: alibi.to_string(),
            is_guilty,
        }
    }
}

/// Outcome of a completed background check, persisted per suspect. Absence
/// from the research map means the suspect has not been researched yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResearchVerdict {
    /// The archives turned up records worth filing as evidence.
    RecordsFound,
    /// The search completed and came back clean.
    CleanRecord,
}
