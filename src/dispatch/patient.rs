use std::fmt;

use serde::Serialize;

use crate::core::container::heap::Prioritized;
use crate::dispatch::error::DispatchError;

/// Urgency score of a patient. Higher values are treated first.
///
/// A severity can only be constructed inside the accepted range, so every
/// value reaching the dispatch core is already valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Severity(u8);

impl Severity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Create a severity, rejecting values outside `MIN..=MAX`.
    pub fn new(level: u8) -> Result<Self, DispatchError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DispatchError::InvalidSeverity { got: level })
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A patient waiting for treatment.
///
/// Immutable once created. The origin city records where the emergency
/// happened, which may differ from the city of the admitting facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    pub name: String,
    pub severity: Severity,
    pub origin: String,
}

impl Patient {
    pub fn new(name: impl Into<String>, severity: Severity, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity,
            origin: origin.into(),
        }
    }
}

impl Prioritized for Patient {
    type Priority = Severity;

    fn priority(&self) -> Severity {
        self.severity
    }
}
