//! Timer scheduling at the engine boundary
//!
//! Lab tests and background checks complete after a real-time delay. Instead
//! of ambient timers firing into shared state, every delayed completion is an
//! explicit scheduled task owned here: each produces exactly one
//! [`TimerEvent`] when it expires, and dropping the scheduler drops all
//! pending work (no callback-after-dispose). Tasks are wall-clock; they are
//! not persisted, and a restored save re-schedules its running tests.

use crate::data::{LabTestId, SuspectId};
use std::time::{Duration, Instant};

/// Fixed delay for a background records search.
pub const RESEARCH_DELAY: Duration = Duration::from_secs(2);

/// A completion produced by an expired task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    LabFinished(LabTestId),
    ResearchFinished(SuspectId),
}

#[derive(Debug)]
struct Pending {
    due: Instant,
    event: TimerEvent,
}

/// Pending delayed completions, polled from the main loop tick.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a lab test completion. Any number of tests may run
    /// concurrently; each countdown is independent and non-cancelable.
    pub fn schedule_lab(&mut self, test: LabTestId, duration: Duration) {
        self.pending.push(Pending {
            due: Instant::now() + duration,
            event: TimerEvent::LabFinished(test),
        });
    }

    /// Schedule a background check. At most one may be in flight; a second
    /// request while one is pending is refused.
    pub fn schedule_research(&mut self, suspect: SuspectId) -> bool {
        if self.research_in_flight().is_some() {
            return false;
        }
        self.pending.push(Pending {
            due: Instant::now() + RESEARCH_DELAY,
            event: TimerEvent::ResearchFinished(suspect),
        });
        true
    }

    /// The suspect currently being researched, if any.
    pub fn research_in_flight(&self) -> Option<SuspectId> {
        self.pending.iter().find_map(|p| match p.event {
            TimerEvent::ResearchFinished(s) => Some(s),
            _ => None,
        })
    }

    /// Whether a completion is pending for this test.
    pub fn lab_in_flight(&self, test: LabTestId) -> bool {
        self.pending
            .iter()
            .any(|p| p.event == TimerEvent::LabFinished(test))
    }

    /// Time left on a pending lab test, for the progress display.
    pub fn lab_remaining(&self, test: LabTestId, now: Instant) -> Option<Duration> {
        self.pending.iter().find_map(|p| match p.event {
            TimerEvent::LabFinished(t) if t == test => {
                Some(p.due.saturating_duration_since(now))
            }
            _ => None,
        })
    }

    /// Drain every task due by `now`, in expiry order. A short test started
    /// after a long one therefore completes first.
    pub fn due(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut expired: Vec<Pending> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                expired.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        expired.sort_by_key(|p| p.due);
        expired.into_iter().map(|p| p.event).collect()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_before_expiry() {
        let mut sched = Scheduler::new();
        sched.schedule_lab(LabTestId::ToxScreen, Duration::from_secs(5));
        assert!(sched.due(Instant::now()).is_empty());
        assert!(sched.lab_in_flight(LabTestId::ToxScreen));
    }

    #[test]
    fn completion_order_follows_expiry_not_start_order() {
        let mut sched = Scheduler::new();
        // Long test started first, short test second.
        sched.schedule_lab(LabTestId::ToxScreen, Duration::from_secs(10));
        sched.schedule_lab(LabTestId::Fingerprints, Duration::from_secs(3));

        let far_future = Instant::now() + Duration::from_secs(60);
        let events = sched.due(far_future);
        assert_eq!(
            events,
            vec![
                TimerEvent::LabFinished(LabTestId::Fingerprints),
                TimerEvent::LabFinished(LabTestId::ToxScreen),
            ]
        );
        assert!(sched.is_idle());
    }

    #[test]
    fn partial_drain_keeps_later_tasks() {
        let mut sched = Scheduler::new();
        sched.schedule_lab(LabTestId::Luminol, Duration::from_secs(1));
        sched.schedule_lab(LabTestId::Handwriting, Duration::from_secs(30));

        let soon = Instant::now() + Duration::from_secs(2);
        let events = sched.due(soon);
        assert_eq!(events, vec![TimerEvent::LabFinished(LabTestId::Luminol)]);
        assert!(sched.lab_in_flight(LabTestId::Handwriting));
    }

    #[test]
    fn one_research_in_flight_at_a_time() {
        let mut sched = Scheduler::new();
        assert!(sched.schedule_research(SuspectId::Thomas));
        assert!(!sched.schedule_research(SuspectId::Victoria));
        assert_eq!(sched.research_in_flight(), Some(SuspectId::Thomas));

        let later = Instant::now() + RESEARCH_DELAY + Duration::from_millis(10);
        assert_eq!(
            sched.due(later),
            vec![TimerEvent::ResearchFinished(SuspectId::Thomas)]
        );
        // Flight slot frees up once the check completes.
        assert!(sched.schedule_research(SuspectId::Victoria));
    }

    #[test]
    fn lab_remaining_counts_down() {
        let mut sched = Scheduler::new();
        sched.schedule_lab(LabTestId::ToxScreen, Duration::from_secs(5));
        let now = Instant::now();
        let remaining = sched.lab_remaining(LabTestId::ToxScreen, now).unwrap();
        assert!(remaining <= Duration::from_secs(5));
        assert!(sched
            .lab_remaining(LabTestId::Fingerprints, now)
            .is_none());
    }
}
