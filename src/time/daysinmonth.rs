use super::utility::is_leap;

const NO_LEAP_DAYS: [u32; 12] = [
    31, 28, 31, 30,
    31, 30, 31, 31,
    30, 31, 30, 31
];

const LEAP_DAYS: [u32; 12] = [
    31, 29, 31, 30,
    31, 30, 31, 31,
    30, 31, 30, 31
];

/// Month lengths of a single year, January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaysInMonth {
    days: [u32; 12]
}

impl DaysInMonth {
    pub const fn for_year(year: i32) -> DaysInMonth {
        if is_leap(year) {
            DaysInMonth { days: LEAP_DAYS }
        } else {
            DaysInMonth { days: NO_LEAP_DAYS }
        }
    }

    /// `month` is 1-based and must lie in `1..=12`.
    #[inline]
    pub fn get(&self, month: u32) -> u32 {
        self.days[(month - 1) as usize]
    }

    /// Total length of the months after `month1` and before `month2`.
    pub fn strictly_between(&self, month1: u32, month2: u32) -> u32 {
        ((month1 + 1)..month2)
            .map(|month| self.get(month))
            .sum()
    }

    pub fn total(&self) -> u32 {
        self.days.iter().sum()
    }

    pub fn as_array(&self) -> &[u32; 12] {
        &self.days
    }
}
