//! Input validation for process sets.
//!
//! The scheduling policies assume well-formed input and perform no checks
//! of their own. This module rejects malformed sets at the boundary.
//! It detects:
//! - Empty process sets
//! - Duplicate or zero process IDs
//! - Zero burst times
//! - Negative priorities

use crate::models::ProcessSet;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The set contains no processes.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is 0 (IDs are 1-based).
    InvalidId,
    /// A process requires no CPU time.
    ZeroBurst,
    /// A process has a priority below zero.
    NegativePriority,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set before simulation.
///
/// Checks:
/// 1. The set is non-empty
/// 2. Every ID is positive and unique
/// 3. Every burst time is positive
/// 4. Every priority is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &ProcessSet) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes.processes() {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID 0 is not allowed (IDs start at 1)",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has a burst time of 0", p.id),
            ));
        }

        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("Process {} has negative priority {}", p.id, p.priority),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
