use serde::Serialize;

use crate::dispatch::patient::Patient;

/// Result of routing an emergency: where the patient was admitted and how
/// far the facility is from the origin city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admission {
    pub facility: String,
    pub distance: u32,
}

/// Outcome of closing a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CloseReport {
    /// The facility was already closed; nothing happened.
    AlreadyClosed,
    /// Closed with no patients to move.
    Closed,
    /// Closed; the whole queue was transferred to the nearest open
    /// facility.
    Transferred { count: usize, destination: String },
    /// Closed, but no open facility exists to take the queue. The
    /// patients stay in the closed facility.
    Stranded { count: usize },
}

/// Outcome of opening a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OpenReport {
    AlreadyOpen,
    Opened,
}

/// Outcome of treating the next patient at a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TreatReport {
    /// The facility has no patients waiting.
    NoPatients,
    /// The most urgent patient was extracted.
    Treated(Patient),
}

/// Snapshot of one facility, as produced by
/// [`DispatchDirectory::status`](crate::dispatch::directory::DispatchDirectory::status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityStatus {
    pub city: String,
    pub is_open: bool,
    pub patients_waiting: usize,
    pub next_patient: Option<Patient>,
}
