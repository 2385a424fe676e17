//! Input validation for problem instances.
//!
//! Checks structural integrity of machines and their task queues before
//! solving. Detects:
//! - Duplicate machine IDs
//! - Negative durations
//! - Tasks arriving with a start time already set
//!
//! Validation is advisory: the solver trusts its inputs, so callers
//! should validate at the construction boundary.

use std::collections::HashSet;

use crate::models::Machine;

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
    /// Two machines share the same ID.
    DuplicateId,
    /// A task has a negative manual or automatic duration.
    NegativeDuration,
    /// A task arrived with `start_ms` already set.
    AlreadyScheduled,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem instance.
///
/// Checks:
/// 1. No duplicate machine IDs
/// 2. No negative task durations
/// 3. No task pre-assigned a start time
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(machines: &[Machine]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut machine_ids = HashSet::new();
    for machine in machines {
        if !machine_ids.insert(machine.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate machine ID: {}", machine.id),
            ));
        }

        for task in &machine.tasks {
            if task.manual_ms < 0 || task.auto_ms < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeDuration,
                    format!(
                        "Task '{}' on machine '{}' has a negative duration",
                        task.id, machine.id
                    ),
                ));
            }
            if task.start_ms.is_some() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AlreadyScheduled,
                    format!(
                        "Task '{}' on machine '{}' already has a start time",
                        task.id, machine.id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
