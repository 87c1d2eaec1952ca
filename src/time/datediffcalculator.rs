use crate::configuration::Configuration;

use super::dateinput::DateInput;
use super::daysinmonth::DaysInMonth;
use super::validationerror::ValidationError;

#[inline]
fn ensure(condition: bool, error: ValidationError) -> Result<(), ValidationError> {
    if condition { Ok(()) } else { Err(error) }
}

/// Counts the days from (month1, day1) to (month2, day2) within one year.
///
/// Days are only bounded by `1..=31`; the month walk uses the real month
/// lengths, so a day past the end of its month shifts the result instead
/// of being rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateDiffCalculator {
    configuration: Configuration
}

impl DateDiffCalculator {
    pub fn new(configuration: Configuration) -> DateDiffCalculator {
        DateDiffCalculator { configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn validate(&self, input: &DateInput) -> Result<(), ValidationError> {
        ensure((1..=12).contains(&input.month1()), ValidationError::InvalidMonth1)?;
        ensure((1..=12).contains(&input.month2()), ValidationError::InvalidMonth2)?;
        ensure((1..=31).contains(&input.day1()), ValidationError::InvalidDay1)?;
        ensure((1..=31).contains(&input.day2()), ValidationError::InvalidDay2)?;
        ensure(self.configuration.contains_year(input.year()), ValidationError::InvalidYear)?;
        ensure(input.month1() <= input.month2(), ValidationError::MonthOrderViolation)?;
        if input.month1() == input.month2() {
            ensure(input.day1() <= input.day2(), ValidationError::DayOrderViolation)?;
        }
        Ok(())
    }

    pub fn days_between(&self, input: &DateInput) -> Result<i32, ValidationError> {
        if let Err(error) = self.validate(input) {
            log::debug!("rejected {:?}: {}", input, error);
            return Err(error);
        }

        let days = if input.month1() == input.month2() {
            input.day2() - input.day1()
        } else {
            let days_in_month = DaysInMonth::for_year(input.year());
            let month1 = input.month1() as u32;
            let month2 = input.month2() as u32;
            (days_in_month.get(month1) as i32 - input.day1())
                + days_in_month.strictly_between(month1, month2) as i32
                + input.day2()
        };
        log::trace!("{:?} -> {} days", input, days);
        Ok(days)
    }
}

/// Days from (month1, day1) to (month2, day2) in `year`, using the default year range.
pub fn compute(month1: i32, day1: i32, month2: i32, day2: i32, year: i32) -> Result<i32, ValidationError> {
    DateDiffCalculator::default().days_between(&DateInput::new(month1, day1, month2, day2, year))
}
