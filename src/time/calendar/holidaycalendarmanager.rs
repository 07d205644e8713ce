use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::manager::manager::{FrozenManager, IManager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holiday::holiday::{Holiday, HolidayKind};
use crate::time::holiday::holidayrule::HolidayRule;
use crate::time::location::{Location, LocationHandle};
use crate::time::recurringholiday::recurringholidaymanager::get_recurring_holiday_from_json;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustmentRule;

#[derive(Deserialize)]
struct HolidayJsonProp {
    name: String,
    #[serde(default)]
    kind: HolidayKind,
    #[serde(default)]
    observance: WeekendAdjustmentRule,
    #[serde(default)]
    start_year: Option<i32>,
    #[serde(default)]
    end_year: Option<i32>
}

pub fn get_holiday_from_json(json: serde_json::Value) -> Result<Holiday, ManagerError> {
    let json_prop: HolidayJsonProp = parse_json_value(json.clone())?;
    let generator = get_recurring_holiday_from_json(&json_prop.name, json)?;
    Ok(Holiday::new(json_prop.name, generator)
        .with_kind(json_prop.kind)
        .with_observance(json_prop.observance)
        .with_year_range(json_prop.start_year, json_prop.end_year))
}

#[derive(Deserialize)]
struct HolidayCalendarJsonProp {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    locations: Option<Vec<String>>,
    #[serde(default)]
    holidays: Vec<serde_json::Value>
}

/// Loads calendars from JSON. Location names are resolved against an
/// already-loaded location registry, so two calendars naming the same
/// location share one location object.
pub struct HolidayCalendarLoader;

impl IManager<HolidayCalendar, FrozenManager<Location>> for HolidayCalendarLoader {
    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<HolidayCalendar>,
                            json_value: serde_json::Value,
                            supports: &FrozenManager<Location>) -> Result<(), ManagerError> {
        let json_prop: HolidayCalendarJsonProp = parse_json_value(json_value)?;

        let mut calendar = HolidayCalendar::new(json_prop.name.as_str(), json_prop.description);
        if let Some(location_names) = json_prop.locations {
            let locations = location_names
                .iter()
                .map(|name| supports.get(name))
                .collect::<Result<Vec<LocationHandle>, ManagerError>>()?;
            calendar = calendar.with_locations(locations);
        }

        let mut holidays: Vec<Arc<dyn HolidayRule>> = Vec::with_capacity(json_prop.holidays.len());
        for holiday_json in json_prop.holidays {
            holidays.push(Arc::new(get_holiday_from_json(holiday_json)?));
        }
        calendar.add_holiday(holidays);

        debug!("calendar {}: {} holidays loaded", calendar.name(), calendar.holidays().len());
        builder.insert(json_prop.name, calendar.freeze())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::time::location::LocatedDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_holiday_type_parses() {
        let cases = [
            (json!({"name": "New Year", "holiday_type": "FixedDate", "month": 1, "day": 1}), ymd(2024, 1, 1)),
            (json!({"name": "MLK", "holiday_type": "NthWeekday", "month": 1, "n": 3, "weekday": "Mon"}), ymd(2024, 1, 15)),
            (json!({"name": "Memorial", "holiday_type": "LastWeekday", "month": 5, "weekday": "Monday"}), ymd(2024, 5, 27)),
            (json!({"name": "Good Friday", "holiday_type": "EasterRelated", "easter_type": "Western", "shift_days": -2}), ymd(2024, 3, 29)),
            (json!({"name": "Black Friday", "holiday_type": "Offset", "days": 1,
                    "base": {"holiday_type": "NthWeekday", "month": 11, "n": 4, "weekday": "Thu"}}), ymd(2024, 11, 29))
        ];
        for (json, expected) in cases {
            let holiday = get_holiday_from_json(json).unwrap();
            assert_eq!(holiday.compute_for_year(2024).actual(), Some(expected), "{}", holiday.name());
        }
    }

    #[test]
    fn holiday_options() {
        let holiday = get_holiday_from_json(json!({
            "name": "Christmas Day",
            "holiday_type": "FixedDate",
            "month": 12,
            "day": 25,
            "kind": "Bank",
            "observance": {"Sat": "PreviousWeekday", "Sun": "NextWeekday"},
            "start_year": 1870
        })).unwrap();

        assert_eq!(holiday.kind(), HolidayKind::Bank);
        assert_eq!(holiday.start_year(), Some(1870));
        assert!(holiday.compute_for_year(1869).is_empty());
        assert_eq!(holiday.compute_for_year(2021).observed(), Some(ymd(2021, 12, 24)));
    }

    #[test]
    fn invalid_holidays_are_errors() {
        let bad_day = get_holiday_from_json(json!({"name": "Nope", "holiday_type": "FixedDate", "month": 2, "day": 30}));
        assert!(matches!(bad_day, Err(ManagerError::InvalidHolidayError { .. })));

        let bad_type = get_holiday_from_json(json!({"name": "Nope", "holiday_type": "Lunar"}));
        assert!(matches!(bad_type, Err(ManagerError::JsonParseError(_))));
    }

    #[test]
    fn calendars_share_named_locations() {
        let mut location_builder = ManagerBuilder::new();
        location_builder.insert("NewYork".to_owned(), Location::from_offset_seconds("NewYork", -18000).unwrap()).unwrap();
        let locations = location_builder.build();

        let calendars = HolidayCalendarLoader.load(&[
            json!({"name": "US", "locations": ["NewYork"], "holidays": [
                {"name": "Independence Day", "holiday_type": "FixedDate", "month": 7, "day": 4}
            ]}),
            json!({"name": "NYSE", "locations": ["NewYork"]}),
            json!({"name": "Everywhere"})
        ], &locations).unwrap();

        let us = calendars.get("US").unwrap();
        let nyse = calendars.get("NYSE").unwrap();
        let new_york = locations.get("NewYork").unwrap();
        assert!(Arc::ptr_eq(&us.locations().unwrap()[0], &nyse.locations().unwrap()[0]));
        assert!(calendars.get("Everywhere").unwrap().locations().is_none());

        let july_4th = LocatedDate::new(ymd(2024, 7, 4), new_york);
        assert!(us.is_holiday(&july_4th).actual());
    }

    #[test]
    fn unknown_location_is_an_error() {
        let locations = FrozenManager::empty();
        let result = HolidayCalendarLoader.load(&[json!({"name": "US", "locations": ["Mars"]})], &locations);
        assert!(matches!(result, Err(ManagerError::NameNotFoundError(ref name)) if name == "Mars"));
    }

    #[test]
    fn reads_single_object_or_array() {
        let locations = FrozenManager::empty();
        let single = br#"{"name": "A", "holidays": []}"#;
        let array = br#"[{"name": "A"}, {"name": "B"}]"#;
        assert_eq!(HolidayCalendarLoader.from_reader(&single[..], &locations).unwrap().len(), 1);
        assert_eq!(HolidayCalendarLoader.from_reader(&array[..], &locations).unwrap().names(), vec!["A", "B"]);
    }
}
