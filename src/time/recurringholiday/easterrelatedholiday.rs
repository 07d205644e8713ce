use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use super::recurringholiday::RecurringHoliday;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

/// A holiday at a fixed distance from Easter Sunday (Good Friday = -2,
/// Easter Monday = 1, Pentecost = 49).
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(easter_type: EasterType, shift_days: i64) -> Option<EasterRelatedHoliday> {
        TimeDelta::try_days(shift_days).map(|_| EasterRelatedHoliday { easter_type, shift_days })
    }

    /// Easter Sunday in the Gregorian calendar, for years 1583..=4099.
    pub fn easter_day(easter_type: EasterType, year: i32) -> Option<NaiveDate> {
        if !(1583..=4099).contains(&year) {
            return None;
        }

        let g = year % 19;

        let p = match easter_type {
            EasterType::Orthodox => {
                let i = (19 * g + 15) % 30;
                let j = (year + year / 4 + i) % 7;
                // Julian to Gregorian shift
                let e = if year <= 1600 {
                    10
                } else {
                    10 + year / 100 - 16 - (year / 100 - 16) / 4
                };
                i - j + e
            },
            EasterType::Western => {
                let c = year / 100;
                let c_div_4 = c / 4;
                let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
                let h_div_28 = h / 28;
                let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
                let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
                i - j
            }
        };

        let day = 1 + (p + 27 + (p + 6) / 40) % 31;
        let month = 3 + (p + 26) / 30;

        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let easter = EasterRelatedHoliday::easter_day(self.easter_type, year)?;
        easter.checked_add_signed(TimeDelta::try_days(self.shift_days)?)
    }
}
