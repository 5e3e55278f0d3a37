//! Input validation for scheduling runs.
//!
//! Checks the parallel arrival/service arrays before any simulation state
//! is created. Detects:
//! - Mismatched array lengths
//! - Negative arrival times
//! - Non-positive service times
//!
//! All violations are collected and reported together; nothing is silently
//! coerced.

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
    /// Arrival and service arrays differ in length.
    LengthMismatch,
    /// A job arrives before the simulation epoch.
    NegativeArrival,
    /// A job requires zero or negative execution time.
    NonPositiveService,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates the parallel arrival/service arrays of a job set.
///
/// Checks:
/// 1. `arrivals.len() == services.len()`
/// 2. Every arrival time is ≥ 0
/// 3. Every service time is > 0 (a zero-length job is undefined and rejected)
///
/// An empty pair of arrays is valid: every policy maps it to the empty
/// result.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_job_set(arrivals: &[i64], services: &[i64]) -> ValidationResult {
    let mut errors = Vec::new();

    if arrivals.len() != services.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "{} arrival times but {} service times",
                arrivals.len(),
                services.len()
            ),
        ));
    }

    for (index, &arrival) in arrivals.iter().enumerate() {
        if arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Job {index} has negative arrival time {arrival}"),
            ));
        }
    }

    for (index, &service) in services.iter().enumerate() {
        if service <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveService,
                format!("Job {index} has non-positive service time {service}"),
            ));
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

    #[test]
    fn test_valid_input() {
        assert!(validate_job_set(&[0, 3, 7], &[5, 1, 2]).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(validate_job_set(&[], &[]).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let errors = validate_job_set(&[0, 1], &[5]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::LengthMismatch));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_job_set(&[0, -3], &[5, 5]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival && e.message.contains("Job 1")));
    }

    #[test]
    fn test_non_positive_service() {
        let errors = validate_job_set(&[0, 1], &[0, -2]).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonPositiveService)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let errors = validate_job_set(&[-1, 0], &[5]).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
