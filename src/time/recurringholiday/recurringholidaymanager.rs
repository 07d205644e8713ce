use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::manager::managererror::{ManagerError, parse_json_value};
use super::recurringholiday::RecurringHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::lastweekdayholiday::LastWeekdayHoliday;
use super::offsetholiday::OffsetHoliday;
use super::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};


#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    easter_type: EasterType,
    #[serde(default)]
    shift_days: i64
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

#[derive(Deserialize)]
struct OffsetHolidayJsonProp {
    base: serde_json::Value,
    days: i64
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday,
    Offset
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

/// Builds a date generator from an object tagged with `holiday_type`.
/// `name` is the owning holiday's, used in error messages.
pub fn get_recurring_holiday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    let holiday: Arc<dyn RecurringHoliday> = match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated => {
            let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
            let easter = EasterRelatedHoliday::new(json_prop.easter_type, json_prop.shift_days)
                .ok_or_else(|| ManagerError::invalid_holiday(name, "shift_days out of range"))?;
            Arc::new(easter)
        },
        HolidayType::FixedDate => {
            let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
            let fixed = FixedDateHoliday::new(json_prop.month, json_prop.day)
                .ok_or_else(|| ManagerError::invalid_holiday(
                    name, format!("no such date {}/{}", json_prop.month, json_prop.day)))?;
            Arc::new(fixed)
        },
        HolidayType::NthWeekday => {
            let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
            let nth = NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)
                .ok_or_else(|| ManagerError::invalid_holiday(name, "month must be 1-12 and n 1-5"))?;
            Arc::new(nth)
        },
        HolidayType::LastWeekday => {
            let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
            let last = LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)
                .ok_or_else(|| ManagerError::invalid_holiday(name, "month must be 1-12"))?;
            Arc::new(last)
        },
        HolidayType::Offset => {
            let json_prop: OffsetHolidayJsonProp = parse_json_value(json)?;
            let base = get_recurring_holiday_from_json(name, json_prop.base)?;
            let offset = OffsetHoliday::new(base, json_prop.days)
                .ok_or_else(|| ManagerError::invalid_holiday(name, "days out of range"))?;
            Arc::new(offset)
        }
    };
    Ok(holiday)
}
