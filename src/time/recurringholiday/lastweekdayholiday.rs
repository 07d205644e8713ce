use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::time::utility::days_of_month;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn month(&self) -> Option<u32> {
        Some(self.month)
    }

    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let eom = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month))?;
        let days_back = (eom.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;
        eom.checked_sub_days(Days::new(days_back as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memorial_day() {
        let memorial_day = LastWeekdayHoliday::new(5, Weekday::Mon).unwrap();
        assert_eq!(memorial_day.get_holiday(2024), NaiveDate::from_ymd_opt(2024, 5, 27));
        assert_eq!(memorial_day.get_holiday(2021), NaiveDate::from_ymd_opt(2021, 5, 31));
    }

    #[test]
    fn last_day_of_month_is_the_weekday() {
        // 2024-08-31 is a Saturday.
        let last_saturday = LastWeekdayHoliday::new(8, Weekday::Sat).unwrap();
        assert_eq!(last_saturday.get_holiday(2024), NaiveDate::from_ymd_opt(2024, 8, 31));
    }

    #[test]
    fn december_stays_in_year() {
        let last_friday = LastWeekdayHoliday::new(12, Weekday::Fri).unwrap();
        assert_eq!(last_friday.get_holiday(2024), NaiveDate::from_ymd_opt(2024, 12, 27));
    }
}
