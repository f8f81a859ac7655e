//! Boundary validation for request payloads.
//!
//! The scoring core trusts its inputs; everything it assumes is checked here
//! and reported as `AppError::Validation` (HTTP 400).

use crate::errors::AppError;
use crate::models::TopicPerformanceRecord;

pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Counts are unsigned, so negatives never reach here; this checks timing
/// and the `correct <= attempts` contract. Zero attempts is allowed, and any
/// topic name (blank included) is accepted: unknown topics fall back.
pub fn validate_topic_performance(records: &[TopicPerformanceRecord]) -> Result<(), AppError> {
    for (i, record) in records.iter().enumerate() {
        if !record.avg_time_sec.is_finite() || record.avg_time_sec < 0.0 {
            return Err(AppError::Validation(format!(
                "topic_performance[{i}].avg_time_sec must be a non-negative number, got {}",
                record.avg_time_sec
            )));
        }

        if record.correct > record.attempts {
            return Err(AppError::Validation(format!(
                "topic_performance[{i}]: correct ({}) exceeds attempts ({})",
                record.correct, record.attempts
            )));
        }
    }
    Ok(())
}

pub fn validate_target(target: f64) -> Result<(), AppError> {
    if !target.is_finite() || !(0.0..=1.0).contains(&target) {
        return Err(AppError::Validation(format!(
            "target must be between 0 and 1, got {target}"
        )));
    }
    Ok(())
}
