//! Input validation for scheduling requests.
//!
//! Checks structural integrity of the backlog and the availability
//! preference before scheduling. Detects:
//! - Empty backlogs
//! - Duplicate unit IDs
//! - Zero-duration units
//! - Degenerate session bounds (min > max, zero max)
//! - Degenerate or overlapping time blocks
//!
//! Validation is advisory: the engine itself tolerates any input that
//! passes type construction, but callers that accept user-entered data
//! should run it first and surface every problem at once.

use crate::models::{AvailabilityPreference, LearningUnit};
use std::collections::HashSet;

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
    /// The backlog contains no units.
    EmptyBacklog,
    /// Two learning units share the same ID.
    DuplicateUnitId,
    /// A unit has a duration of zero minutes.
    ZeroDuration,
    /// Session bounds are unusable (min > max, or max is zero).
    InvalidSessionBounds,
    /// A time block ends at or before it starts.
    DegenerateTimeBlock,
    /// Two time blocks on the same day overlap.
    OverlappingTimeBlocks,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a backlog and preference pair.
///
/// Checks:
/// 1. The backlog is non-empty
/// 2. No duplicate unit IDs
/// 3. Every unit has a positive duration
/// 4. `min_session_minutes <= max_session_minutes` and the max is positive
/// 5. Every time block has a positive length
/// 6. No two time blocks overlap
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    units: &[LearningUnit],
    preference: &AvailabilityPreference,
) -> ValidationResult {
    let mut errors = Vec::new();

    if units.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBacklog,
            "Backlog contains no learning units",
        ));
    }

    let mut unit_ids = HashSet::new();
    for unit in units {
        if !unit_ids.insert(unit.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateUnitId,
                format!("Duplicate unit ID: {}", unit.id),
            ));
        }
        if unit.duration_minutes == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Unit '{}' has a duration of zero minutes", unit.id),
            ));
        }
    }

    if preference.max_session_minutes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSessionBounds,
            "Maximum session length is zero minutes",
        ));
    } else if preference.min_session_minutes > preference.max_session_minutes {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSessionBounds,
            format!(
                "Minimum session length {} exceeds maximum {}",
                preference.min_session_minutes, preference.max_session_minutes
            ),
        ));
    }

    for block in &preference.time_blocks {
        if block.end_minute <= block.start_minute {
            errors.push(ValidationError::new(
                ValidationErrorKind::DegenerateTimeBlock,
                format!(
                    "Time block {}..{} has no length",
                    block.start_minute, block.end_minute
                ),
            ));
        }
    }

    for (i, a) in preference.time_blocks.iter().enumerate() {
        for b in &preference.time_blocks[i + 1..] {
            if a.overlaps(b) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingTimeBlocks,
                    format!(
                        "Time blocks {}..{} and {}..{} overlap",
                        a.start_minute, a.end_minute, b.start_minute, b.end_minute
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeBlock;

    fn sample_units() -> Vec<LearningUnit> {
        vec![
            LearningUnit::new("1", "Intro", 30),
            LearningUnit::new("1.1", "Intro practice", 15),
            LearningUnit::new("2", "Basics", 40),
        ]
    }

    fn sample_preference() -> AvailabilityPreference {
        AvailabilityPreference::new(20, 60)
            .with_time_block(TimeBlock::new(480, 540))
            .with_time_block(TimeBlock::new(1140, 1260))
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_request(&sample_units(), &sample_preference()).is_ok());
    }

    #[test]
    fn test_empty_backlog() {
        let errors = validate_request(&[], &sample_preference()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyBacklog));
    }

    #[test]
    fn test_duplicate_unit_id() {
        let units = vec![
            LearningUnit::new("1", "Intro", 30),
            LearningUnit::new("1", "Intro again", 30),
        ];
        let errors = validate_request(&units, &sample_preference()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateUnitId));
    }

    #[test]
    fn test_zero_duration() {
        let units = vec![LearningUnit::new("1", "Intro", 0)];
        let errors = validate_request(&units, &sample_preference()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroDuration));
    }

    #[test]
    fn test_min_exceeds_max() {
        let pref = AvailabilityPreference::new(90, 60).with_time_block(TimeBlock::new(480, 540));
        let errors = validate_request(&sample_units(), &pref).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSessionBounds));
    }

    #[test]
    fn test_zero_max() {
        let pref = AvailabilityPreference::new(0, 0).with_time_block(TimeBlock::new(480, 540));
        let errors = validate_request(&sample_units(), &pref).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSessionBounds));
    }

    #[test]
    fn test_degenerate_block() {
        let pref = AvailabilityPreference::new(20, 60).with_time_block(TimeBlock::new(540, 540));
        let errors = validate_request(&sample_units(), &pref).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DegenerateTimeBlock));
    }

    #[test]
    fn test_overlapping_blocks() {
        let pref = AvailabilityPreference::new(20, 60)
            .with_time_block(TimeBlock::new(480, 600))
            .with_time_block(TimeBlock::new(540, 660));
        let errors = validate_request(&sample_units(), &pref).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OverlappingTimeBlocks));
    }

    #[test]
    fn test_multiple_errors() {
        let units = vec![LearningUnit::new("1", "Intro", 0)];
        let pref = AvailabilityPreference::new(90, 60).with_time_block(TimeBlock::new(480, 540));
        let errors = validate_request(&units, &pref).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
