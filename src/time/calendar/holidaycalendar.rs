use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use log::{debug, trace};

use crate::time::holiday::holidayrule::{HolidayOccurrence, HolidayRule};
use crate::time::location::{same_location, LocatedDate, LocationHandle};

const DEFAULT_HOLIDAY_CAPACITY: usize = 12;

/// Result of [`HolidayCalendar::is_holiday`].
#[derive(Clone, Default)]
pub struct HolidayMatch {
    actual: bool,
    observed: bool,
    holiday: Option<Arc<dyn HolidayRule>>
}

impl HolidayMatch {
    pub fn none() -> HolidayMatch {
        HolidayMatch::default()
    }

    /// The date is the holiday's actual date.
    pub fn actual(&self) -> bool {
        self.actual
    }

    /// The date is the holiday's observed date.
    pub fn observed(&self) -> bool {
        self.observed
    }

    pub fn holiday(&self) -> Option<&Arc<dyn HolidayRule>> {
        self.holiday.as_ref()
    }

    pub fn is_match(&self) -> bool {
        self.actual || self.observed
    }
}

impl fmt::Debug for HolidayMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayMatch")
            .field("actual", &self.actual)
            .field("observed", &self.observed)
            .field("holiday", &self.holiday.as_ref().map(|h| h.name()))
            .finish()
    }
}

#[inline]
fn same_month_day(d: Option<NaiveDate>, month: u32, day: u32) -> bool {
    d.is_some_and(|d| d.month() == month && d.day() == day)
}

/// A named set of holiday rules, optionally restricted to some locations.
///
/// Built with `&mut self` ([`add_holiday`](Self::add_holiday)) and then
/// queried through `&self`; [`freeze`](Self::freeze) hands the finished
/// calendar out as a shared, read-only `Arc`.
pub struct HolidayCalendar {
    name: String,
    description: String,
    locations: Option<Vec<LocationHandle>>,
    holidays: Option<Vec<Arc<dyn HolidayRule>>>
}

impl HolidayCalendar {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> HolidayCalendar {
        HolidayCalendar {
            name: name.into(),
            description: description.into(),
            locations: None,
            holidays: None
        }
    }

    /// Restricts the calendar to `locations`. An empty list applies nowhere.
    pub fn with_locations(mut self, locations: Vec<LocationHandle>) -> HolidayCalendar {
        self.locations = Some(locations);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn locations(&self) -> Option<&[LocationHandle]> {
        self.locations.as_deref()
    }

    /// Registered rules in registration order.
    pub fn holidays(&self) -> &[Arc<dyn HolidayRule>] {
        self.holidays.as_deref().unwrap_or(&[])
    }

    /// `true` when no locations were given, otherwise only for one of the
    /// given handles. Equal-looking locations built separately do not count.
    pub fn is_applicable(&self, location: &LocationHandle) -> bool {
        match &self.locations {
            None => true,
            Some(locations) => locations.iter().any(|l| same_location(l, location))
        }
    }

    /// Appends `rules` in order. Duplicates are kept.
    pub fn add_holiday<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = Arc<dyn HolidayRule>>
    {
        self.holidays
            .get_or_insert_with(|| Vec::with_capacity(DEFAULT_HOLIDAY_CAPACITY))
            .extend(rules);
    }

    /// Finds the first registered rule whose actual or observed date falls
    /// on `date`.
    ///
    /// Month and day are read from `date` in its own location. Rules that
    /// declare a different month are skipped without being computed. Only
    /// month and day are compared, so a rule returning a date in the wrong
    /// year can still match.
    pub fn is_holiday(&self, date: &LocatedDate) -> HolidayMatch {
        let holidays = match &self.holidays {
            Some(holidays) if !holidays.is_empty() => holidays,
            _ => return HolidayMatch::none()
        };

        if !self.is_applicable(date.location()) {
            trace!("calendar {}: location {} not applicable", self.name, date.location());
            return HolidayMatch::none();
        }

        let (year, month, day) = (date.year(), date.month(), date.day());
        for holiday in holidays.iter() {
            if holiday.declared_month().is_some_and(|m| m != 0 && m != month) {
                continue;
            }

            let occurrence = holiday.compute_for_year(year);
            let actual = same_month_day(occurrence.actual(), month, day);
            let observed = same_month_day(occurrence.observed(), month, day);
            if actual || observed {
                debug!("calendar {}: {} matches {} (actual: {}, observed: {})",
                       self.name, date, holiday.name(), actual, observed);
                return HolidayMatch {
                    actual,
                    observed,
                    holiday: Some(Arc::clone(holiday))
                };
            }
        }

        HolidayMatch::none()
    }

    /// Every rule that yields something in `year`, with what it yields.
    pub fn holidays_in_year(&self, year: i32) -> Vec<(Arc<dyn HolidayRule>, HolidayOccurrence)> {
        self.holidays()
            .iter()
            .map(|h| (Arc::clone(h), h.compute_for_year(year)))
            .filter(|(_, occurrence)| !occurrence.is_empty())
            .collect()
    }

    /// Not a weekend day and neither the actual nor the observed date of a
    /// holiday.
    pub fn is_business_day(&self, date: &LocatedDate, weekends: &HashSet<Weekday>) -> bool {
        !weekends.contains(&date.date().weekday()) && !self.is_holiday(date).is_match()
    }

    pub fn freeze(self) -> Arc<HolidayCalendar> {
        Arc::new(self)
    }
}

impl fmt::Debug for HolidayCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayCalendar")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("locations", &self.locations)
            .field("holidays", &self.holidays().iter().map(|h| h.name()).collect::<Vec<_>>())
            .finish()
    }
}
