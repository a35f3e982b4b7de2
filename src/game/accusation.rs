//! The accusation: draft, validation, and verification
//!
//! The draft is ephemeral UI state, never persisted. Validation happens
//! before the engine is involved and produces precise player-facing errors;
//! verification is the engine's one-shot check of a fully-formed accusation
//! against the case solution.

use crate::data::{EvidenceId, MethodId, MotiveId, SuspectId, TimeOfDeath};
use crate::game::case::Solution;

/// The player's in-progress final theory.
#[derive(Debug, Clone, Default)]
pub struct AccusationDraft {
    pub suspect: Option<SuspectId>,
    pub method: Option<MethodId>,
    pub motive: Option<MotiveId>,
    pub time: Option<TimeOfDeath>,
    pub evidence: Vec<EvidenceId>,
}

/// Why a draft cannot be submitted yet. The two cases carry distinct
/// messages; this is the player's main feedback loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    Incomplete,
    InsufficientEvidence,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftError::Incomplete => {
                write!(f, "REPORT INCOMPLETE. ALL FIELDS MANDATORY.")
            }
            DraftError::InsufficientEvidence => {
                write!(f, "INSUFFICIENT EVIDENCE. ATTACH AT LEAST 3 ITEMS.")
            }
        }
    }
}

impl AccusationDraft {
    /// The indictment form holds at most five exhibits.
    pub const MAX_EXHIBITS: usize = 5;
    /// And demands at least three.
    pub const MIN_EXHIBITS: usize = 3;

    /// Attach or detach an exhibit. Returns false when the form is full and
    /// the exhibit was not added. The cap is enforced here, at draft-build
    /// time, not at submission.
    pub fn toggle_evidence(&mut self, id: EvidenceId) -> bool {
        if let Some(pos) = self.evidence.iter().position(|e| *e == id) {
            self.evidence.remove(pos);
            return true;
        }
        if self.evidence.len() >= Self::MAX_EXHIBITS {
            return false;
        }
        self.evidence.push(id);
        true
    }

    pub fn has_evidence(&self, id: EvidenceId) -> bool {
        self.evidence.contains(&id)
    }

    /// Check the draft is fully formed. Missing scalar fields are reported
    /// before the exhibit count, matching the indictment form's own order.
    pub fn validate(&self) -> Result<Accusation, DraftError> {
        match (self.suspect, self.method, self.motive, self.time) {
            (Some(suspect), Some(method), Some(motive), Some(time)) => {
                if self.evidence.len() < Self::MIN_EXHIBITS {
                    return Err(DraftError::InsufficientEvidence);
                }
                Ok(Accusation {
                    suspect,
                    method,
                    motive,
                    time,
                    evidence: self.evidence.clone(),
                })
            }
            _ => Err(DraftError::Incomplete),
        }
    }
}

/// A fully-formed accusation, ready for the engine.
#[derive(Debug, Clone)]
pub struct Accusation {
    pub suspect: SuspectId,
    pub method: MethodId,
    pub motive: MotiveId,
    pub time: TimeOfDeath,
    pub evidence: Vec<EvidenceId>,
}

/// The single hint surfaced with a rejected accusation. Only one reason is
/// given even when several fields are wrong, so a rejection never maps out
/// the full solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    WrongSuspect,
    WrongMethod,
    WrongMotive,
    InsufficientEvidence,
}

impl Hint {
    pub fn detail(&self) -> &'static str {
        match self {
            Hint::WrongSuspect => "Suspect alibi may hold water.",
            Hint::WrongMethod => "Medical examiner disagrees with method.",
            Hint::WrongMotive => "Motive is weak.",
            Hint::InsufficientEvidence => "Insufficient physical evidence.",
        }
    }
}

/// Outcome of submitting an accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Correct on all four fields with enough key evidence. Terminal.
    CaseClosed,
    /// Rejected. Carries at most one hint; a draft wrong only on the time
    /// of death is rejected with no hint at all.
    Rejected(Option<Hint>),
    /// The case is already solved; the accusation flow is closed.
    AlreadyClosed,
}

/// Exact verification rule: all four scalar fields must match the solution,
/// and at least three attached exhibits must come from the solution's key
/// evidence set. Attaching three unrelated exhibits fails even if every
/// scalar field is right.
pub fn verify(accusation: &Accusation, solution: &Solution) -> Verdict {
    let suspect_ok = accusation.suspect == solution.suspect;
    let method_ok = accusation.method == solution.method;
    let motive_ok = accusation.motive == solution.motive;
    let time_ok = accusation.time == solution.time;

    let overlap = accusation
        .evidence
        .iter()
        .filter(|id| solution.required_evidence.contains(id))
        .count();
    let enough_evidence = overlap >= AccusationDraft::MIN_EXHIBITS;

    if suspect_ok && method_ok && motive_ok && time_ok && enough_evidence {
        return Verdict::CaseClosed;
    }

    // One hint, in fixed priority order. A time-only mismatch deliberately
    // falls through every arm and surfaces no specific hint.
    let hint = if !suspect_ok {
        Some(Hint::WrongSuspect)
    } else if !method_ok {
        Some(Hint::WrongMethod)
    } else if !motive_ok {
        Some(Hint::WrongMotive)
    } else if !enough_evidence {
        Some(Hint::InsufficientEvidence)
    } else {
        None
    };

    Verdict::Rejected(hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::case::Case;

    fn correct_draft() -> AccusationDraft {
        AccusationDraft {
            suspect: Some(SuspectId::Thomas),
            method: Some(MethodId::PoisonedPort),
            motive: Some(MotiveId::RevengeAffair),
            time: Some(TimeOfDeath::ElevenThirtyFive),
            evidence: vec![
                EvidenceId::Decanter,
                EvidenceId::FingerprintReport,
                EvidenceId::Calendar,
            ],
        }
    }

    #[test]
    fn three_of_seven_key_exhibits_is_enough() {
        let case = Case::midnight_manuscript();
        let accusation = correct_draft().validate().unwrap();
        assert_eq!(verify(&accusation, &case.solution), Verdict::CaseClosed);
    }

    #[test]
    fn zero_overlap_rejected_even_with_correct_fields() {
        let case = Case::midnight_manuscript();
        let mut draft = correct_draft();
        draft.evidence = vec![EvidenceId::Body, EvidenceId::Teacup, EvidenceId::Window];
        let accusation = draft.validate().unwrap();
        assert_eq!(
            verify(&accusation, &case.solution),
            Verdict::Rejected(Some(Hint::InsufficientEvidence))
        );
    }

    #[test]
    fn suspect_hint_wins_over_method_hint() {
        let case = Case::midnight_manuscript();
        let mut draft = correct_draft();
        draft.suspect = Some(SuspectId::Victoria);
        draft.method = Some(MethodId::PoisonedTea);
        let accusation = draft.validate().unwrap();
        assert_eq!(
            verify(&accusation, &case.solution),
            Verdict::Rejected(Some(Hint::WrongSuspect))
        );
    }

    #[test]
    fn time_only_mismatch_gives_no_hint() {
        let case = Case::midnight_manuscript();
        let mut draft = correct_draft();
        draft.time = Some(TimeOfDeath::ElevenFifty);
        let accusation = draft.validate().unwrap();
        assert_eq!(verify(&accusation, &case.solution), Verdict::Rejected(None));
    }

    #[test]
    fn missing_field_reported_before_exhibit_count() {
        let mut draft = correct_draft();
        draft.method = None;
        draft.evidence.clear();
        assert_eq!(draft.validate().unwrap_err(), DraftError::Incomplete);
    }

    #[test]
    fn too_few_exhibits_rejected_at_validation() {
        let mut draft = correct_draft();
        draft.evidence.truncate(2);
        assert_eq!(
            draft.validate().unwrap_err(),
            DraftError::InsufficientEvidence
        );
    }

    #[test]
    fn exhibit_cap_enforced_at_toggle_time() {
        let mut draft = AccusationDraft::default();
        let ids = [
            EvidenceId::Body,
            EvidenceId::Decanter,
            EvidenceId::Teacup,
            EvidenceId::Calendar,
            EvidenceId::Window,
        ];
        for id in ids {
            assert!(draft.toggle_evidence(id));
        }
        assert!(!draft.toggle_evidence(EvidenceId::PoisonBook));
        assert_eq!(draft.evidence.len(), AccusationDraft::MAX_EXHIBITS);

        // Detaching always works, even at the cap.
        assert!(draft.toggle_evidence(EvidenceId::Body));
        assert_eq!(draft.evidence.len(), 4);
    }
}
