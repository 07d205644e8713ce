use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use log::debug;
use serde::Deserialize;

use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::manager::{FrozenManager, IManager};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarLoader;
use crate::time::location::{LocatedDate, Location, LocationHandle};
use crate::time::locationmanager::LocationLoader;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    default_location: Option<String>,
    #[serde(default)]
    locations: Vec<serde_json::Value>,
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>
}

/// Everything loaded at start-up: named locations, named calendars, and the
/// location used when a caller has a plain date and no location of its own.
pub struct Configuration {
    default_location: LocationHandle,
    locations: FrozenManager<Location>,
    holiday_calendars: FrozenManager<HolidayCalendar>
}

impl Configuration {
    /// No locations or calendars; the default location is the host's.
    pub fn new() -> Configuration {
        Configuration {
            default_location: Location::local(),
            locations: FrozenManager::empty(),
            holiday_calendars: FrozenManager::empty()
        }
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        let locations = LocationLoader.load(&json_prop.locations, &())?;
        let holiday_calendars = HolidayCalendarLoader.load(&json_prop.holiday_calendar, &locations)?;
        let default_location = match json_prop.default_location {
            Some(name) => locations.get(&name)?,
            None => Location::local()
        };
        debug!("configuration loaded: {} locations, {} calendars, default location {}",
               locations.len(), holiday_calendars.len(), default_location);
        Ok(Configuration { default_location, locations, holiday_calendars })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ManagerError> {
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Configuration::from_json_value(json_value)
    }

    pub fn from_path<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn with_default_location(mut self, location: LocationHandle) -> Configuration {
        self.default_location = location;
        self
    }

    pub fn default_location(&self) -> &LocationHandle {
        &self.default_location
    }

    pub fn locations(&self) -> &FrozenManager<Location> {
        &self.locations
    }

    pub fn holiday_calendars(&self) -> &FrozenManager<HolidayCalendar> {
        &self.holiday_calendars
    }

    pub fn holiday_calendar(&self, name: &str) -> Result<Arc<HolidayCalendar>, ManagerError> {
        self.holiday_calendars.get(name)
    }

    /// `date` placed in the default location.
    pub fn locate(&self, date: NaiveDate) -> LocatedDate {
        LocatedDate::new(date, Arc::clone(&self.default_location))
    }

    /// Today's date as seen from the default location.
    pub fn today(&self) -> LocatedDate {
        LocatedDate::from_instant(&Utc::now(), Arc::clone(&self.default_location))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
