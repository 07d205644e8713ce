use std::sync::Arc;

use chrono::{NaiveDate, TimeDelta};

use super::recurringholiday::RecurringHoliday;

/// A fixed number of days before or after another generated date, e.g. the
/// day after Thanksgiving.
#[derive(Clone)]
pub struct OffsetHoliday {
    base: Arc<dyn RecurringHoliday>,
    days: i64
}

impl OffsetHoliday {
    pub fn new(base: Arc<dyn RecurringHoliday>, days: i64) -> Option<OffsetHoliday> {
        TimeDelta::try_days(days).map(|_| OffsetHoliday { base, days })
    }
}

impl RecurringHoliday for OffsetHoliday {
    fn month(&self) -> Option<u32> {
        if self.days == 0 {
            self.base.month()
        } else {
            None
        }
    }

    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let base_date = self.base.get_holiday(year)?;
        base_date.checked_add_signed(TimeDelta::try_days(self.days)?)
    }
}
