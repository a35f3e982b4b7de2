//! Interview questions and answers
//!
//! Each dialogue option belongs to one suspect. A question may require a
//! collected evidence item before it can be asked, and may unlock a new
//! evidence item when the suspect answers. Asked questions are recorded
//! permanently in the dialogue history; re-asking is a no-op.

use super::evidence::EvidenceId;
use super::suspects::SuspectId;
use serde::{Deserialize, Serialize};

/// Identifier for every interview question in the case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum QuestionId {
    // Victoria Ashford
    VictoriaAlibi,
    VictoriaManuscript,
    VictoriaDebts,
    // Dr. James Whitmore
    JamesGarden,
    JamesPoisonBook,
    JamesForgery,
    // Margaret Chen
    MargaretAlibi,
    MargaretManuscript,
    // Thomas Garrett
    ThomasAlibi,
    ThomasKitchen,
    ThomasLetters,
    // Olivia Hart
    OliviaDeparture,
    OliviaArgument,
}

/// One askable interview question with the suspect's fixed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueOption {
    pub id: QuestionId,
    pub suspect: SuspectId,
    pub text: String,
    pub response: String,
    /// The question is visible/askable only once this evidence is collected.
    pub requires_evidence: Option<EvidenceId>,
    /// Asking the question marks this evidence collected in the same update.
    pub unlocks_evidence: Option<EvidenceId>,
}

impl DialogueOption {
    pub fn new(id: QuestionId, suspect: SuspectId, text: &str, response: &str) -> Self {
        Self {
            id,
            suspect,
            text: text.to_string(),
            response: response.to_string(),
            requires_evidence: None,
            unlocks_evidence: None,
        }
    }

    pub fn requires(mut self, evidence: EvidenceId) -> Self {
        self.requires_evidence = Some(evidence);
        self
    }

    pub fn unlocks(mut self, evidence: EvidenceId) -> Self {
        self.unlocks_evidence = Some(evidence);
        self
    }
}
