use chrono::NaiveDate;

use crate::time::utility::max_days_of_month;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        if day == 0 || day > max_days_of_month(month) {
            None
        } else {
            Some(FixedDateHoliday { month, day })
        }
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn month(&self) -> Option<u32> {
        Some(self.month)
    }

    /// `None` for February 29 outside leap years.
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
