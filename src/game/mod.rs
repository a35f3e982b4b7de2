//! Core game logic and state management
//!
//! `GameState` owns every fact that makes up the player's progress and is the
//! unit of persistence. All mutation goes through a small set of validated
//! transitions; each runs to completion, never exposes an intermediate state,
//! and reports its outcome back to the caller so the presentation layer can
//! decide what to announce. Invalid or repeated requests are no-ops, not
//! errors - nothing in this engine is fatal.

pub mod accusation;
pub mod case;
pub mod scheduler;

use crate::data::*;
use accusation::{verify, Accusation, Verdict};
use case::Case;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The authoritative game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// View the player last had open
    pub current_tab: Tab,

    /// All evidence in the case, collected or not
    pub evidence: Vec<Evidence>,

    /// Suspect dossiers
    pub suspects: Vec<Suspect>,

    /// Lab tests and their lifecycle status
    pub lab_tests: Vec<LabTest>,

    /// Asked question ids per suspect, in insertion order
    pub dialogue_history: BTreeMap<SuspectId, Vec<QuestionId>>,

    /// Completed background checks and their verdicts
    pub research: BTreeMap<SuspectId, ResearchVerdict>,

    /// Set once, permanently, by a correct accusation
    pub solved: bool,

    /// Stamp of the last autosave
    pub last_save: DateTime<Utc>,
}

/// Result of successfully asking a question.
#[derive(Debug, Clone)]
pub struct Asked {
    pub response: String,
    /// Evidence newly collected as part of this answer, if any.
    pub unlocked: Option<EvidenceId>,
}

/// Result of a lab test completing.
#[derive(Debug, Clone)]
pub struct LabFindings {
    pub result: String,
    /// Forensic report newly filed as evidence, if any.
    pub unlocked: Option<EvidenceId>,
}

/// Result of a completed background check.
#[derive(Debug, Clone)]
pub struct ResearchOutcome {
    pub verdict: ResearchVerdict,
    /// Everything the archives hold on this suspect. Empty means a clean
    /// record - a meaningful result, not a failure.
    pub found: Vec<EvidenceId>,
}

impl GameState {
    /// Fresh state from the case's content tables.
    pub fn new(case: &Case) -> Self {
        Self {
            current_tab: Tab::Home,
            evidence: case.evidence.clone(),
            suspects: case.suspects.clone(),
            lab_tests: case.lab_tests.clone(),
            dialogue_history: BTreeMap::new(),
            research: BTreeMap::new(),
            solved: false,
            last_save: Utc::now(),
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn evidence_item(&self, id: EvidenceId) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.id == id)
    }

    pub fn is_collected(&self, id: EvidenceId) -> bool {
        self.evidence_item(id).map_or(false, |e| e.collected)
    }

    pub fn collected_evidence(&self) -> impl Iterator<Item = &Evidence> {
        self.evidence.iter().filter(|e| e.collected)
    }

    pub fn lab_test(&self, id: LabTestId) -> Option<&LabTest> {
        self.lab_tests.iter().find(|t| t.id == id)
    }

    pub fn asked(&self, suspect: SuspectId, question: QuestionId) -> bool {
        self.dialogue_history
            .get(&suspect)
            .map_or(false, |h| h.contains(&question))
    }

    /// A question is askable when it has not been asked and its evidence
    /// requirement, if any, is met.
    pub fn question_available(&self, option: &DialogueOption) -> bool {
        if self.asked(option.suspect, option.id) {
            return false;
        }
        option
            .requires_evidence
            .map_or(true, |req| self.is_collected(req))
    }

    pub fn research_verdict(&self, suspect: SuspectId) -> Option<ResearchVerdict> {
        self.research.get(&suspect).copied()
    }

    /// Mark an evidence item collected. Returns whether this call newly
    /// collected it - callers use the flag to decide whether to notify the
    /// player (scene exploration stays silent, unlocks announce themselves).
    pub fn collect_evidence(&mut self, id: EvidenceId) -> bool {
        match self.evidence.iter_mut().find(|e| e.id == id) {
            Some(item) if !item.collected => {
                item.collected = true;
                true
            }
            _ => false,
        }
    }

    /// Ask a suspect a question. No-op (`None`) if the question belongs to
    /// someone else, is still locked behind uncollected evidence, or was
    /// already asked - a repeat never re-fires the unlock. The transcript
    /// entry and any unlocked evidence land in the same update.
    pub fn ask_question(
        &mut self,
        case: &Case,
        suspect: SuspectId,
        question: QuestionId,
    ) -> Option<Asked> {
        let option = case.dialogue(question)?;
        if option.suspect != suspect {
            return None;
        }
        if !self.question_available(option) {
            return None;
        }

        self.dialogue_history
            .entry(suspect)
            .or_default()
            .push(question);
        let unlocked = match option.unlocks_evidence {
            Some(id) if self.collect_evidence(id) => Some(id),
            _ => None,
        };

        Some(Asked {
            response: option.response.clone(),
            unlocked,
        })
    }

    /// Start a lab test. Returns true iff the test was available and its
    /// required evidence is collected; completion is driven externally by
    /// the scheduler once the test's duration elapses.
    pub fn run_lab_test(&mut self, id: LabTestId) -> bool {
        let required = match self.lab_test(id) {
            Some(test) if test.status == LabStatus::Available => test.required_evidence,
            _ => return false,
        };
        if !self.is_collected(required) {
            return false;
        }
        if let Some(test) = self.lab_tests.iter_mut().find(|t| t.id == id) {
            test.status = LabStatus::Running;
            return true;
        }
        false
    }

    /// Complete a running lab test. No-op unless the test is `Running`,
    /// which absorbs duplicate timer fires. Filing the forensic report as
    /// evidence happens in the same transition.
    pub fn complete_lab_test(&mut self, id: LabTestId) -> Option<LabFindings> {
        let result = {
            let test = self.lab_tests.iter_mut().find(|t| t.id == id)?;
            if test.status != LabStatus::Running {
                return None;
            }
            test.status = LabStatus::Completed;
            test.result_description.clone()
        };
        let unlocked = match Case::lab_unlock(id) {
            Some(evidence) if self.collect_evidence(evidence) => Some(evidence),
            _ => None,
        };
        Some(LabFindings { result, unlocked })
    }

    /// Record a finished background check and file whatever the archives
    /// hold on the suspect. Researching the same suspect twice is a no-op.
    pub fn complete_research(&mut self, suspect: SuspectId) -> Option<ResearchOutcome> {
        if self.research.contains_key(&suspect) {
            return None;
        }
        let found: Vec<EvidenceId> = Case::background_results(suspect).to_vec();
        for id in &found {
            self.collect_evidence(*id);
        }
        let verdict = if found.is_empty() {
            ResearchVerdict::CleanRecord
        } else {
            ResearchVerdict::RecordsFound
        };
        self.research.insert(suspect, verdict);
        Some(ResearchOutcome { verdict, found })
    }

    /// Judge a fully-formed accusation. A correct one closes the case for
    /// good; an incorrect one changes nothing and the player may retry.
    /// Once solved, further submissions are ignored.
    pub fn submit_accusation(&mut self, case: &Case, accusation: &Accusation) -> Verdict {
        if self.solved {
            return Verdict::AlreadyClosed;
        }
        let verdict = verify(accusation, &case.solution);
        if verdict == Verdict::CaseClosed {
            self.solved = true;
        }
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DialogueOption, EvidenceId, LabStatus, LabTestId, QuestionId, SuspectId};
    use crate::game::accusation::AccusationDraft;
    use crate::game::accusation::Hint;

    fn fresh() -> (Case, GameState) {
        let case = Case::midnight_manuscript();
        let state = GameState::new(&case);
        (case, state)
    }

    /// Case variant where asking Thomas about the kitchen log unlocks the
    /// shed inventory, to exercise the dialogue unlock path.
    fn case_with_dialogue_unlock() -> Case {
        let mut case = Case::midnight_manuscript();
        for option in &mut case.dialogues {
            if option.id == QuestionId::ThomasKitchen {
                option.unlocks_evidence = Some(EvidenceId::GardenInventory);
            }
        }
        case
    }

    #[test]
    fn collect_is_idempotent() {
        let (_, mut state) = fresh();
        assert!(state.collect_evidence(EvidenceId::Decanter));
        let snapshot = state.clone();
        assert!(!state.collect_evidence(EvidenceId::Decanter));
        assert_eq!(
            serde_json::to_string(&snapshot.evidence).unwrap(),
            serde_json::to_string(&state.evidence).unwrap()
        );
    }

    #[test]
    fn collected_set_is_monotonic() {
        let (case, mut state) = fresh();
        state.collect_evidence(EvidenceId::Body);
        state.collect_evidence(EvidenceId::Decanter);
        let before: Vec<EvidenceId> = state.collected_evidence().map(|e| e.id).collect();

        // A burst of arbitrary operations, valid and invalid.
        state.run_lab_test(LabTestId::Fingerprints);
        state.complete_lab_test(LabTestId::Fingerprints);
        state.ask_question(&case, SuspectId::Thomas, QuestionId::ThomasAlibi);
        state.complete_research(SuspectId::Margaret);
        state.run_lab_test(LabTestId::Luminol);

        for id in before {
            assert!(state.is_collected(id), "{:?} was un-collected", id);
        }
    }

    #[test]
    fn locked_question_is_a_noop_until_evidence_arrives() {
        let (case, mut state) = fresh();
        assert!(state
            .ask_question(&case, SuspectId::Victoria, QuestionId::VictoriaDebts)
            .is_none());
        assert!(state.dialogue_history.is_empty());

        state.complete_research(SuspectId::Victoria);
        let asked = state
            .ask_question(&case, SuspectId::Victoria, QuestionId::VictoriaDebts)
            .expect("question should unlock once the bank records are filed");
        assert!(asked.response.contains("needed money"));
    }

    #[test]
    fn question_for_wrong_suspect_is_a_noop() {
        let (case, mut state) = fresh();
        assert!(state
            .ask_question(&case, SuspectId::Olivia, QuestionId::ThomasAlibi)
            .is_none());
    }

    #[test]
    fn dialogue_unlock_is_atomic_and_fires_once() {
        let case = case_with_dialogue_unlock();
        let mut state = GameState::new(&case);
        state.complete_research(SuspectId::Thomas); // files the kitchen log

        // Research already collected the shed inventory; strip it so the
        // dialogue unlock is observable.
        state
            .evidence
            .iter_mut()
            .find(|e| e.id == EvidenceId::GardenInventory)
            .unwrap()
            .collected = false;

        let asked = state
            .ask_question(&case, SuspectId::Thomas, QuestionId::ThomasKitchen)
            .unwrap();
        assert_eq!(asked.unlocked, Some(EvidenceId::GardenInventory));
        assert!(state.is_collected(EvidenceId::GardenInventory));
        assert_eq!(state.dialogue_history[&SuspectId::Thomas].len(), 1);

        // Re-asking: no transcript duplicate, no unlock re-fire.
        assert!(state
            .ask_question(&case, SuspectId::Thomas, QuestionId::ThomasKitchen)
            .is_none());
        assert_eq!(state.dialogue_history[&SuspectId::Thomas].len(), 1);
    }

    #[test]
    fn transcript_preserves_insertion_order() {
        let (case, mut state) = fresh();
        state
            .ask_question(&case, SuspectId::James, QuestionId::JamesPoisonBook)
            .unwrap();
        state
            .ask_question(&case, SuspectId::James, QuestionId::JamesGarden)
            .unwrap();
        assert_eq!(
            state.dialogue_history[&SuspectId::James],
            vec![QuestionId::JamesPoisonBook, QuestionId::JamesGarden]
        );
    }

    #[test]
    fn lab_test_gated_on_required_evidence() {
        let (_, mut state) = fresh();
        assert!(!state.run_lab_test(LabTestId::Fingerprints));
        assert_eq!(
            state.lab_test(LabTestId::Fingerprints).unwrap().status,
            LabStatus::Available
        );

        state.collect_evidence(EvidenceId::Decanter);
        assert!(state.run_lab_test(LabTestId::Fingerprints));
        assert_eq!(
            state.lab_test(LabTestId::Fingerprints).unwrap().status,
            LabStatus::Running
        );

        // Running again while running is a no-op.
        assert!(!state.run_lab_test(LabTestId::Fingerprints));

        let findings = state.complete_lab_test(LabTestId::Fingerprints).unwrap();
        assert_eq!(findings.unlocked, Some(EvidenceId::FingerprintReport));
        assert!(state.is_collected(EvidenceId::FingerprintReport));
        assert_eq!(
            state.lab_test(LabTestId::Fingerprints).unwrap().status,
            LabStatus::Completed
        );
    }

    #[test]
    fn duplicate_timer_fire_is_absorbed() {
        let (_, mut state) = fresh();
        state.collect_evidence(EvidenceId::Body);
        state.run_lab_test(LabTestId::ToxScreen);
        assert!(state.complete_lab_test(LabTestId::ToxScreen).is_some());
        assert!(state.complete_lab_test(LabTestId::ToxScreen).is_none());
    }

    #[test]
    fn completing_a_test_that_never_ran_is_a_noop() {
        let (_, mut state) = fresh();
        assert!(state.complete_lab_test(LabTestId::Handwriting).is_none());
        assert!(!state.is_collected(EvidenceId::FingerprintReport));
    }

    #[test]
    fn clean_record_research_is_distinguishable() {
        let (_, mut state) = fresh();
        assert_eq!(state.research_verdict(SuspectId::Margaret), None);

        let outcome = state.complete_research(SuspectId::Margaret).unwrap();
        assert_eq!(outcome.verdict, ResearchVerdict::CleanRecord);
        assert!(outcome.found.is_empty());
        assert_eq!(
            state.research_verdict(SuspectId::Margaret),
            Some(ResearchVerdict::CleanRecord)
        );

        // Repeat research is a no-op.
        assert!(state.complete_research(SuspectId::Margaret).is_none());
    }

    #[test]
    fn thomas_research_files_three_records() {
        let (_, mut state) = fresh();
        let outcome = state.complete_research(SuspectId::Thomas).unwrap();
        assert_eq!(outcome.verdict, ResearchVerdict::RecordsFound);
        assert_eq!(outcome.found.len(), 3);
        assert!(state.is_collected(EvidenceId::KitchenLog));
        assert!(state.is_collected(EvidenceId::TheftRecord));
        assert!(state.is_collected(EvidenceId::GardenInventory));
    }

    #[test]
    fn solved_is_sticky() {
        let (case, mut state) = fresh();
        let correct = AccusationDraft {
            suspect: Some(SuspectId::Thomas),
            method: Some(MethodId::PoisonedPort),
            motive: Some(MotiveId::RevengeAffair),
            time: Some(TimeOfDeath::ElevenThirtyFive),
            evidence: vec![
                EvidenceId::Decanter,
                EvidenceId::ToxReport,
                EvidenceId::KitchenLog,
            ],
        }
        .validate()
        .unwrap();

        assert_eq!(
            state.submit_accusation(&case, &correct),
            Verdict::CaseClosed
        );
        assert!(state.solved);

        // Any further submission, right or wrong, is ignored.
        let mut wrong = correct.clone();
        wrong.suspect = SuspectId::Olivia;
        assert_eq!(
            state.submit_accusation(&case, &wrong),
            Verdict::AlreadyClosed
        );
        assert!(state.solved);
    }

    #[test]
    fn incorrect_accusation_mutates_nothing() {
        let (case, mut state) = fresh();
        state.collect_evidence(EvidenceId::Body);
        let before = serde_json::to_string(&state).unwrap();

        let wrong = AccusationDraft {
            suspect: Some(SuspectId::Victoria),
            method: Some(MethodId::PoisonedTea),
            motive: Some(MotiveId::Inheritance),
            time: Some(TimeOfDeath::ElevenPm),
            evidence: vec![
                EvidenceId::Body,
                EvidenceId::Teacup,
                EvidenceId::Window,
            ],
        }
        .validate()
        .unwrap();
        assert_eq!(
            state.submit_accusation(&case, &wrong),
            Verdict::Rejected(Some(Hint::WrongSuspect))
        );
        assert_eq!(serde_json::to_string(&state).unwrap(), before);
    }

    #[test]
    fn state_round_trips_through_json() {
        let (case, mut state) = fresh();
        state.collect_evidence(EvidenceId::Decanter);
        state
            .ask_question(&case, SuspectId::Thomas, QuestionId::ThomasAlibi)
            .unwrap();
        state.complete_research(SuspectId::Olivia);

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert!(restored.is_collected(EvidenceId::Decanter));
        assert!(restored.asked(SuspectId::Thomas, QuestionId::ThomasAlibi));
        assert_eq!(
            restored.research_verdict(SuspectId::Olivia),
            Some(ResearchVerdict::CleanRecord)
        );
    }

    #[test]
    fn unlocks_builder_survives_catalog_edit() {
        // Guards the test fixture itself: the unlock edit must stick.
        let case = case_with_dialogue_unlock();
        let option = case.dialogue(QuestionId::ThomasKitchen).unwrap();
        assert_eq!(option.unlocks_evidence, Some(EvidenceId::GardenInventory));
        assert_eq!(option.requires_evidence, Some(EvidenceId::KitchenLog));
    }

    #[test]
    fn unused_dialogue_option_builder_paths() {
        let option = DialogueOption::new(
            QuestionId::MargaretAlibi,
            SuspectId::Margaret,
            "q",
            "a",
        )
        .requires(EvidenceId::Calendar)
        .unlocks(EvidenceId::Teacup);
        assert_eq!(option.requires_evidence, Some(EvidenceId::Calendar));
        assert_eq!(option.unlocks_evidence, Some(EvidenceId::Teacup));
    }
}
