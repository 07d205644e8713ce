use chrono::{
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn month(&self) -> Option<u32> {
        Some(self.month)
    }

    /// `None` when the month has no `n`th such weekday (only possible for n = 5).
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
    }
}
