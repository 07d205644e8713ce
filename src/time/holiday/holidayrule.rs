use chrono::NaiveDate;

/// Dates a holiday rule yields for one year.
///
/// `actual` is the nominal date; `observed` is the date it is recognised
/// on. Both `None` means the rule does not apply that year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HolidayOccurrence {
    actual: Option<NaiveDate>,
    observed: Option<NaiveDate>
}

impl HolidayOccurrence {
    pub fn new(actual: Option<NaiveDate>, observed: Option<NaiveDate>) -> HolidayOccurrence {
        HolidayOccurrence { actual, observed }
    }

    pub fn none() -> HolidayOccurrence {
        HolidayOccurrence::default()
    }

    pub fn actual(&self) -> Option<NaiveDate> {
        self.actual
    }

    pub fn observed(&self) -> Option<NaiveDate> {
        self.observed
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_none() && self.observed.is_none()
    }
}

/// What a calendar needs from a holiday: an optional month restriction and
/// the per-year date computation.
///
/// Implementations must be pure. A date returned for `year` is expected to
/// lie in `year`; calendars compare month and day only.
pub trait HolidayRule: Send + Sync {
    fn name(&self) -> &str;

    /// `Some(m)` when every date this rule can produce falls in month `m`.
    /// Calendars skip the rule for queries in any other month. `None` and
    /// `Some(0)` both mean unrestricted.
    fn declared_month(&self) -> Option<u32>;

    fn compute_for_year(&self, year: i32) -> HolidayOccurrence;
}
