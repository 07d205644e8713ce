use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustmentRule;
use super::holidayrule::{HolidayOccurrence, HolidayRule};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum HolidayKind {
    /// Banks and most businesses are closed.
    #[default]
    Bank,
    /// Commemorated, but not a day off.
    Observance,
    Other
}

/// A named holiday: a date generator, an observance policy, and the range
/// of years it is in effect.
#[derive(Clone)]
pub struct Holiday {
    name: String,
    kind: HolidayKind,
    generator: Arc<dyn RecurringHoliday>,
    observance: WeekendAdjustmentRule,
    start_year: Option<i32>,
    end_year: Option<i32>
}

impl Holiday {
    pub fn new(name: impl Into<String>, generator: Arc<dyn RecurringHoliday>) -> Holiday {
        Holiday {
            name: name.into(),
            kind: HolidayKind::default(),
            generator,
            observance: WeekendAdjustmentRule::none(),
            start_year: None,
            end_year: None
        }
    }

    pub fn with_kind(mut self, kind: HolidayKind) -> Holiday {
        self.kind = kind;
        self
    }

    pub fn with_observance(mut self, observance: WeekendAdjustmentRule) -> Holiday {
        self.observance = observance;
        self
    }

    /// Both bounds are inclusive; `None` leaves that side open.
    pub fn with_year_range(mut self, start_year: Option<i32>, end_year: Option<i32>) -> Holiday {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    pub fn kind(&self) -> HolidayKind {
        self.kind
    }

    pub fn observance(&self) -> &WeekendAdjustmentRule {
        &self.observance
    }

    pub fn start_year(&self) -> Option<i32> {
        self.start_year
    }

    pub fn end_year(&self) -> Option<i32> {
        self.end_year
    }

    pub fn is_active(&self, year: i32) -> bool {
        self.start_year.is_none_or(|start| year >= start)
            && self.end_year.is_none_or(|end| year <= end)
    }

    /// Actual date in `year`, ignoring observance.
    pub fn actual_date(&self, year: i32) -> Option<NaiveDate> {
        if self.is_active(year) {
            self.generator.get_holiday(year)
        } else {
            None
        }
    }
}

impl HolidayRule for Holiday {
    fn name(&self) -> &str {
        &self.name
    }

    /// Taken from the generator. An observed date pushed into a
    /// neighbouring month is not looked up in that month.
    fn declared_month(&self) -> Option<u32> {
        self.generator.month()
    }

    /// The observed date is only reported when observance moves it off the
    /// actual date.
    fn compute_for_year(&self, year: i32) -> HolidayOccurrence {
        match self.actual_date(year) {
            Some(actual) => {
                let observed = Some(self.observance.adjust(actual)).filter(|d| *d != actual);
                HolidayOccurrence::new(Some(actual), observed)
            }
            None => HolidayOccurrence::none()
        }
    }
}

impl fmt::Debug for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holiday")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("month", &self.generator.month())
            .field("start_year", &self.start_year)
            .field("end_year", &self.end_year)
            .finish()
    }
}
