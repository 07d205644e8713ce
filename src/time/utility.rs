#[inline]
pub const fn is_leap(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`. Returns 0 for a month
/// outside 1..=12.
pub const fn days_of_month(year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month > 12 {
        return 0;
    }

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Largest day number `month` can ever have, leap years included.
#[inline]
pub const fn max_days_of_month(month: u32) -> u32 {
    days_of_month(2000, month)
}
