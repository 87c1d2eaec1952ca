use thiserror::Error;

/// Rejected calculator input. Only the first violated rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid month1")]
    InvalidMonth1,
    #[error("invalid month2")]
    InvalidMonth2,
    #[error("invalid day1")]
    InvalidDay1,
    #[error("invalid day2")]
    InvalidDay2,
    #[error("invalid year")]
    InvalidYear,
    #[error("month1 must be less than month2")]
    MonthOrderViolation,
    #[error("day1 must be less than day2 if month1 is equal to month2")]
    DayOrderViolation
}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn messages() {
        let cases = [
            (ValidationError::InvalidMonth1, "invalid month1"),
            (ValidationError::InvalidMonth2, "invalid month2"),
            (ValidationError::InvalidDay1, "invalid day1"),
            (ValidationError::InvalidDay2, "invalid day2"),
            (ValidationError::InvalidYear, "invalid year"),
            (ValidationError::MonthOrderViolation, "month1 must be less than month2"),
            (ValidationError::DayOrderViolation, "day1 must be less than day2 if month1 is equal to month2"),
        ];
        for (error, message) in cases {
            assert_eq!(error.to_string(), message);
        }
    }
}
