//! The Midnight Manuscript case content
//!
//! Static, read-only tables: who was at the manor, what can be found, what
//! the lab can run, what each suspect will say, what the archives hold, and
//! the solution the accusation is checked against. Nothing in here mutates
//! after construction; all game progress lives in [`GameState`].
//!
//! [`GameState`]: crate::game::GameState

use crate::data::*;
use serde::{Deserialize, Serialize};

/// The fixed correct combination used to verify an accusation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub suspect: SuspectId,
    pub method: MethodId,
    pub motive: MotiveId,
    pub time: TimeOfDeath,
    /// Key evidence. An accusation must attach at least three of these;
    /// unrelated exhibits do not count.
    pub required_evidence: Vec<EvidenceId>,
}

/// Static content catalog for one case.
#[derive(Debug, Clone)]
pub struct Case {
    pub title: String,
    pub victim: String,
    pub location: String,
    pub discovered_at: String,
    pub suspects: Vec<Suspect>,
    pub evidence: Vec<Evidence>,
    pub lab_tests: Vec<LabTest>,
    pub dialogues: Vec<DialogueOption>,
    pub solution: Solution,
}

impl Case {
    pub fn dialogue(&self, id: QuestionId) -> Option<&DialogueOption> {
        self.dialogues.iter().find(|d| d.id == id)
    }

    pub fn dialogues_for(&self, suspect: SuspectId) -> impl Iterator<Item = &DialogueOption> {
        self.dialogues.iter().filter(move |d| d.suspect == suspect)
    }

    pub fn suspect(&self, id: SuspectId) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.id == id)
    }

    /// Evidence filed when a lab test completes. Zero-or-one per test.
    pub fn lab_unlock(test: LabTestId) -> Option<EvidenceId> {
        match test {
            LabTestId::ToxScreen => Some(EvidenceId::ToxReport),
            LabTestId::Fingerprints => Some(EvidenceId::FingerprintReport),
            LabTestId::Luminol => Some(EvidenceId::LuminolGloves),
            LabTestId::Handwriting => None,
        }
    }

    /// Evidence unlocked by researching a suspect's background. An empty
    /// slice is a meaningful outcome: the record is clean.
    pub fn background_results(suspect: SuspectId) -> &'static [EvidenceId] {
        match suspect {
            SuspectId::Victoria => &[EvidenceId::FinancialReport],
            SuspectId::Thomas => &[
                EvidenceId::KitchenLog,
                EvidenceId::TheftRecord,
                EvidenceId::GardenInventory,
            ],
            SuspectId::James => &[EvidenceId::ForgeryScandal],
            SuspectId::Margaret => &[],
            SuspectId::Olivia => &[],
        }
    }

    /// Build the Midnight Manuscript case.
    pub fn midnight_manuscript() -> Case {
        let suspects = vec![
            Suspect::new(
                SuspectId::Victoria,
                "Victoria Ashford",
                "The Daughter",
                42,
                "Nervous, well-dressed. Stands to inherit the estate.",
                "Inheritance and debts",
                "In drawing room with Margaret",
                false,
            ),
            Suspect::new(
                SuspectId::James,
                "Dr. James Whitmore",
                "The Colleague",
                55,
                "Defensive intellectual. Sweats when nervous.",
                "Professional rivalry and forgery exposure",
                "Smoking in garden",
                false,
            ),
            Suspect::new(
                SuspectId::Margaret,
                "Margaret Chen",
                "The Broker",
                38,
                "Smooth, charming art dealer.",
                "Illegal manuscript sale commission",
                "In drawing room with Victoria",
                false,
            ),
            Suspect::new(
                SuspectId::Thomas,
                "Thomas Garrett",
                "The Butler",
                51,
                "Formal, proper, increasingly agitated.",
                "Revenge for affair and firing of wife",
                "Preparing tea in kitchen",
                true,
            ),
            Suspect::new(
                SuspectId::Olivia,
                "Olivia Hart",
                "The Assistant",
                29,
                "Bitter, intelligent graduate student.",
                "Research theft",
                "Left manor at 11:00 PM",
                false,
            ),
        ];

        let evidence = vec![
            // Crime scene items
            Evidence::scene(
                EvidenceId::Body,
                "Victim Body",
                "Prof. Ashford found slumped in chair. No external wounds.",
                EvidenceCategory::Physical,
                "Library - Center Rug",
            ),
            Evidence::scene(
                EvidenceId::Decanter,
                "Port Decanter",
                "Crystal decanter, half empty. Smells slightly metallic.",
                EvidenceCategory::Physical,
                "Side Table",
            ),
            Evidence::scene(
                EvidenceId::Teacup,
                "Unused Teacup",
                "Fine china, completely dry and clean.",
                EvidenceCategory::Physical,
                "Main Desk",
            ),
            Evidence::scene(
                EvidenceId::DeskCompartment,
                "Hidden Letters",
                "Love letters between Richard and the Cook (Thomas's wife).",
                EvidenceCategory::Document,
                "Desk Drawer (Hidden)",
            ),
            Evidence::scene(
                EvidenceId::Calendar,
                "Desk Calendar",
                "Entry at 4:00 PM: \"Fire Mrs. Garrett\".",
                EvidenceCategory::Document,
                "Main Desk",
            ),
            Evidence::scene(
                EvidenceId::Window,
                "Open Window",
                "Window latch is broken. Muddy footprint outside.",
                EvidenceCategory::Physical,
                "North Window",
            ),
            Evidence::scene(
                EvidenceId::PoisonBook,
                "Poison History Book",
                "Borrowed by Dr. Whitmore earlier.",
                EvidenceCategory::Physical,
                "West Bookshelf",
            ),
            // Lab results
            Evidence::unlockable(
                EvidenceId::FingerprintReport,
                "Fingerprint Analysis",
                "Thomas's prints found on the decanter.",
                EvidenceCategory::Forensic,
            ),
            Evidence::unlockable(
                EvidenceId::ToxReport,
                "Toxicology Report",
                "Cause of death: Liquid Nicotine poisoning.",
                EvidenceCategory::Forensic,
            ),
            Evidence::unlockable(
                EvidenceId::LuminolGloves,
                "Butler's Gloves Test",
                "Traces of nicotine found on Thomas's white gloves.",
                EvidenceCategory::Forensic,
            ),
            // Testimony and records
            Evidence::unlockable(
                EvidenceId::KitchenLog,
                "Kitchen Log & Staff",
                "Staff confirm Thomas was NOT in the kitchen at 11:35 PM.",
                EvidenceCategory::Testimony,
            ),
            Evidence::unlockable(
                EvidenceId::GardenInventory,
                "Shed Inventory",
                "Bottle of liquid nicotine pesticide is missing.",
                EvidenceCategory::Document,
            ),
            Evidence::unlockable(
                EvidenceId::FinancialReport,
                "Bank Records",
                "Victoria Ashford has $300k in gambling debts.",
                EvidenceCategory::Document,
            ),
            Evidence::unlockable(
                EvidenceId::TheftRecord,
                "Criminal Record",
                "Thomas Garrett has prior convictions for theft.",
                EvidenceCategory::Document,
            ),
            Evidence::unlockable(
                EvidenceId::ForgeryScandal,
                "Academic Forum",
                "Rumors that Dr. Whitmore's work relies on forgeries.",
                EvidenceCategory::Document,
            ),
        ];

        let lab_tests = vec![
            LabTest::new(
                LabTestId::ToxScreen,
                "Toxicology Screening",
                "Analyze victim blood sample for toxins.",
                5,
                EvidenceId::Body,
                "Lethal dose of liquid nicotine detected.",
            ),
            LabTest::new(
                LabTestId::Fingerprints,
                "Fingerprint Analysis",
                "Dust the port decanter for prints.",
                5,
                EvidenceId::Decanter,
                "Prints match Thomas Garrett (The Butler).",
            ),
            LabTest::new(
                LabTestId::Luminol,
                "Luminol Test",
                "Test Thomas's gloves for chemical residue.",
                5,
                EvidenceId::GardenInventory,
                "Positive for high concentration of nicotine.",
            ),
            LabTest::new(
                LabTestId::Handwriting,
                "Handwriting Analysis",
                "Verify authorship of love letters.",
                5,
                EvidenceId::DeskCompartment,
                "Confirmed handwriting of Richard Ashford and Mrs. Garrett.",
            ),
        ];

        let dialogues = vec![
            DialogueOption::new(
                QuestionId::VictoriaAlibi,
                SuspectId::Victoria,
                "Where were you between 11:15 and 11:45 PM?",
                "I was in the drawing room with Margaret. We were discussing art.",
            ),
            DialogueOption::new(
                QuestionId::VictoriaManuscript,
                SuspectId::Victoria,
                "Did you know about the manuscript?",
                "Father never shut up about it. Supposed to be worth a fortune.",
            ),
            DialogueOption::new(
                QuestionId::VictoriaDebts,
                SuspectId::Victoria,
                "I know about your gambling debts.",
                "That... that is personal! But yes, I needed money. I didn't kill him though!",
            )
            .requires(EvidenceId::FinancialReport),
            DialogueOption::new(
                QuestionId::JamesGarden,
                SuspectId::James,
                "What were you doing in the garden?",
                "Smoking. A bad habit, I know. I needed fresh air.",
            ),
            DialogueOption::new(
                QuestionId::JamesPoisonBook,
                SuspectId::James,
                "Tell me about this book on poisons.",
                "Purely academic interest! I returned it... or meant to.",
            ),
            DialogueOption::new(
                QuestionId::JamesForgery,
                SuspectId::James,
                "Rumor is your work is based on forgeries.",
                "Slander! ...Though Richard did threaten to ruin me with those lies.",
            )
            .requires(EvidenceId::ForgeryScandal),
            DialogueOption::new(
                QuestionId::MargaretAlibi,
                SuspectId::Margaret,
                "Can you verify Victoria's alibi?",
                "Yes, poor dear. She was with me the whole time.",
            ),
            DialogueOption::new(
                QuestionId::MargaretManuscript,
                SuspectId::Margaret,
                "Why was the manuscript so important?",
                "I had a buyer lined up. A private collector.",
            ),
            DialogueOption::new(
                QuestionId::ThomasAlibi,
                SuspectId::Thomas,
                "Where were you at the time of death?",
                "I was in the kitchen, preparing the Professor's late-night tea.",
            ),
            DialogueOption::new(
                QuestionId::ThomasKitchen,
                SuspectId::Thomas,
                "The kitchen staff says you weren't there.",
                "They... must be mistaken. Or perhaps I stepped into the pantry.",
            )
            .requires(EvidenceId::KitchenLog),
            DialogueOption::new(
                QuestionId::ThomasLetters,
                SuspectId::Thomas,
                "We found these letters in the desk.",
                "I... I have nothing to say. I loved her! He ruined everything!",
            )
            .requires(EvidenceId::DeskCompartment),
            DialogueOption::new(
                QuestionId::OliviaDeparture,
                SuspectId::Olivia,
                "When did you leave?",
                "11:00 sharp. I was home by 11:30. You can check the gate logs.",
            ),
            DialogueOption::new(
                QuestionId::OliviaArgument,
                SuspectId::Olivia,
                "You argued with the Professor.",
                "He stole my work! He was a fraud. But I didn't kill him.",
            ),
        ];

        let solution = Solution {
            suspect: SuspectId::Thomas,
            method: MethodId::PoisonedPort,
            motive: MotiveId::RevengeAffair,
            time: TimeOfDeath::ElevenThirtyFive,
            required_evidence: vec![
                EvidenceId::Decanter,
                EvidenceId::FingerprintReport,
                EvidenceId::DeskCompartment,
                EvidenceId::Calendar,
                EvidenceId::KitchenLog,
                EvidenceId::LuminolGloves,
                EvidenceId::ToxReport,
            ],
        };

        Case {
            title: "The Midnight Manuscript".to_string(),
            victim: "Prof. Richard Ashford".to_string(),
            location: "Ashford Manor".to_string(),
            discovered_at: "11:47 PM".to_string(),
            suspects,
            evidence,
            lab_tests,
            dialogues,
            solution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_suspect_has_dialogue() {
        let case = Case::midnight_manuscript();
        for suspect in SuspectId::ALL {
            assert!(
                case.dialogues_for(suspect).count() >= 2,
                "{:?} has too few questions",
                suspect
            );
        }
    }

    #[test]
    fn unlock_edges_reference_unlockable_evidence() {
        let case = Case::midnight_manuscript();
        for test in &case.lab_tests {
            if let Some(unlocked) = Case::lab_unlock(test.id) {
                let item = case.evidence.iter().find(|e| e.id == unlocked).unwrap();
                assert!(item.location.is_none(), "lab result should not be scene-located");
            }
        }
        for suspect in SuspectId::ALL {
            for id in Case::background_results(suspect) {
                assert!(case.evidence.iter().any(|e| e.id == *id));
            }
        }
    }

    #[test]
    fn solution_evidence_is_reachable() {
        let case = Case::midnight_manuscript();
        for id in &case.solution.required_evidence {
            assert!(case.evidence.iter().any(|e| e.id == *id));
        }
    }
}
