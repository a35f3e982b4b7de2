//! Full investigation drive-through: scene to verdict, with the scheduler
//! and save file in the loop the same way the app wires them.

use midnight_manuscript::data::*;
use midnight_manuscript::game::accusation::{AccusationDraft, Hint, Verdict};
use midnight_manuscript::game::case::Case;
use midnight_manuscript::game::scheduler::{Scheduler, TimerEvent, RESEARCH_DELAY};
use midnight_manuscript::persistence::SaveFile;
use midnight_manuscript::GameState;
use std::time::{Duration, Instant};

/// Apply every due scheduler event to the state, app-style.
fn drain(scheduler: &mut Scheduler, state: &mut GameState, now: Instant) {
    for event in scheduler.due(now) {
        match event {
            TimerEvent::LabFinished(test) => {
                state.complete_lab_test(test);
            }
            TimerEvent::ResearchFinished(suspect) => {
                state.complete_research(suspect);
            }
        }
    }
}

#[test]
fn the_butler_did_it() {
    let case = Case::midnight_manuscript();
    let mut state = GameState::new(&case);
    let mut scheduler = Scheduler::new();

    // Work the crime scene.
    for id in [
        EvidenceId::Body,
        EvidenceId::Decanter,
        EvidenceId::DeskCompartment,
        EvidenceId::Calendar,
    ] {
        assert!(state.collect_evidence(id), "{:?} should be collectable", id);
    }

    // Pull the butler's background. The kitchen log, his record and the
    // shed inventory all come back from the archives.
    assert!(scheduler.schedule_research(SuspectId::Thomas));
    drain(
        &mut scheduler,
        &mut state,
        Instant::now() + RESEARCH_DELAY + Duration::from_millis(50),
    );
    assert_eq!(
        state.research_verdict(SuspectId::Thomas),
        Some(ResearchVerdict::RecordsFound)
    );
    assert!(state.is_collected(EvidenceId::KitchenLog));
    assert!(state.is_collected(EvidenceId::GardenInventory));
    assert!(scheduler.is_idle());

    // Confront him. The kitchen question only opens up once the staff log
    // contradicts his alibi; the letters question once the drawer is found.
    assert!(state
        .ask_question(&case, SuspectId::Thomas, QuestionId::ThomasAlibi)
        .is_some());
    assert!(state
        .ask_question(&case, SuspectId::Thomas, QuestionId::ThomasKitchen)
        .is_some());
    let confession = state
        .ask_question(&case, SuspectId::Thomas, QuestionId::ThomasLetters)
        .unwrap();
    assert!(confession.response.contains("He ruined everything"));

    // Run the three incriminating tests concurrently.
    for test in [LabTestId::ToxScreen, LabTestId::Fingerprints, LabTestId::Luminol] {
        assert!(state.run_lab_test(test), "{:?} should start", test);
        let duration = state.lab_test(test).unwrap().duration_secs;
        scheduler.schedule_lab(test, Duration::from_secs(duration));
    }
    drain(
        &mut scheduler,
        &mut state,
        Instant::now() + Duration::from_secs(30),
    );
    assert!(state.is_collected(EvidenceId::ToxReport));
    assert!(state.is_collected(EvidenceId::FingerprintReport));
    assert!(state.is_collected(EvidenceId::LuminolGloves));
    assert!(scheduler.is_idle());

    // A first theory pins the wrong man and bounces with one hint.
    let mut draft = AccusationDraft {
        suspect: Some(SuspectId::James),
        method: Some(MethodId::PoisonedPort),
        motive: Some(MotiveId::RevengeAffair),
        time: Some(TimeOfDeath::ElevenThirtyFive),
        evidence: vec![
            EvidenceId::Decanter,
            EvidenceId::ToxReport,
            EvidenceId::KitchenLog,
        ],
    };
    let wrong = draft.validate().unwrap();
    assert_eq!(
        state.submit_accusation(&case, &wrong),
        Verdict::Rejected(Some(Hint::WrongSuspect))
    );
    assert!(!state.solved);

    // The rejection costs nothing; correct the suspect and resubmit.
    draft.suspect = Some(SuspectId::Thomas);
    assert!(draft.toggle_evidence(EvidenceId::FingerprintReport));
    assert!(draft.toggle_evidence(EvidenceId::LuminolGloves));
    let correct = draft.validate().unwrap();
    assert_eq!(state.submit_accusation(&case, &correct), Verdict::CaseClosed);
    assert!(state.solved);
}

#[test]
fn progress_survives_a_restart_mid_investigation() {
    let dir = tempfile::tempdir().unwrap();
    let save = SaveFile::at(dir.path().join("midnight-manuscript.save.json"));

    let case = Case::midnight_manuscript();
    let mut state = GameState::new(&case);
    state.collect_evidence(EvidenceId::Body);
    state.collect_evidence(EvidenceId::Decanter);
    state.run_lab_test(LabTestId::ToxScreen);
    state.select_tab(Tab::Lab);
    save.save(&mut state).unwrap();

    // "Restart": load and re-arm the running test the way the app does.
    let mut restored = save.load().unwrap().unwrap();
    assert_eq!(restored.current_tab, Tab::Lab);
    let mut scheduler = Scheduler::new();
    for test in &restored.lab_tests {
        if test.status == LabStatus::Running {
            scheduler.schedule_lab(test.id, Duration::from_secs(test.duration_secs));
        }
    }
    assert!(scheduler.lab_in_flight(LabTestId::ToxScreen));

    drain(
        &mut scheduler,
        &mut restored,
        Instant::now() + Duration::from_secs(30),
    );
    assert!(restored.is_collected(EvidenceId::ToxReport));
    assert_eq!(
        restored.lab_test(LabTestId::ToxScreen).unwrap().status,
        LabStatus::Completed
    );
}
