//! Forensic lab tests
//!
//! A test is runnable once its required evidence is collected. Running it
//! starts a real-time countdown; when the timer elapses the test completes
//! and may file a forensic report as new evidence. The status transitions
//! `Available -> Running -> Completed` are one-directional, with no
//! cancellation and no failure state.

use super::evidence::EvidenceId;
use serde::{Deserialize, Serialize};

/// Identifier for each lab test.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LabTestId {
    ToxScreen,
    Fingerprints,
    Luminol,
    Handwriting,
}

/// Lifecycle of a lab test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabStatus {
    Available,
    Running,
    Completed,
}

impl std::fmt::Display for LabStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabStatus::Available => write!(f, "AVAILABLE"),
            LabStatus::Running => write!(f, "PROCESSING"),
            LabStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// A timed forensic analysis gated on a prerequisite evidence item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabTest {
    pub id: LabTestId,
    pub name: String,
    pub description: String,
    pub duration_secs: u64,
    pub required_evidence: EvidenceId,
    pub result_description: String,
    pub status: LabStatus,
}

impl LabTest {
    pub fn new(
        id: LabTestId,
        name: &str,
        description: &str,
        duration_secs: u64,
        required_evidence: EvidenceId,
        result_description: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            duration_secs,
            required_evidence,
            result_description: result_description.to_string(),
            status: LabStatus::Available,
        }
    }
}
