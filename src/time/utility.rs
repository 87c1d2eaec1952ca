#[inline]
pub const fn is_leap(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

#[inline]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap(year) {
        366
    } else {
        365
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisible_by_four_is_leap() {
        assert!(is_leap(2024));
        assert!(is_leap(2020));
        assert!(!is_leap(2023));
        assert!(!is_leap(2021));
    }

    #[test]
    fn century_needs_four_hundred() {
        assert!(is_leap(2000));
        assert!(is_leap(400));
        assert!(!is_leap(1900));
        assert!(!is_leap(2100));
        assert!(is_leap(10000));
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(1), 365);
    }
}
