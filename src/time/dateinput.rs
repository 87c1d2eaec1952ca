use serde::{Deserialize, Serialize};

/// Two (month, day) points within `year`. Nothing is checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInput {
    month1: i32,
    day1: i32,
    month2: i32,
    day2: i32,
    year: i32
}

impl DateInput {
    pub fn new(month1: i32, day1: i32, month2: i32, day2: i32, year: i32) -> DateInput {
        DateInput { month1, day1, month2, day2, year }
    }

    pub fn month1(&self) -> i32 { self.month1 }
    pub fn day1(&self) -> i32 { self.day1 }
    pub fn month2(&self) -> i32 { self.month2 }
    pub fn day2(&self) -> i32 { self.day2 }
    pub fn year(&self) -> i32 { self.year }
}

impl From<(i32, i32, i32, i32, i32)> for DateInput {
    fn from((month1, day1, month2, day2, year): (i32, i32, i32, i32, i32)) -> DateInput {
        DateInput::new(month1, day1, month2, day2, year)
    }
}
