use std::fmt;
use std::sync::Arc;

use chrono::{
    DateTime,
    Datelike,
    FixedOffset,
    Local,
    NaiveDate,
    Offset,
    TimeZone,
    Utc
};

/// A named region with a fixed UTC offset.
///
/// Locations are shared as [`LocationHandle`] and compared by identity:
/// two handles are the same location only when they point at the same
/// allocation, see [`same_location`]. Building two `Location`s with the same
/// name and offset gives two different locations.
pub struct Location {
    name: String,
    offset: FixedOffset
}

pub type LocationHandle = Arc<Location>;

impl Location {
    pub fn new(name: impl Into<String>, offset: FixedOffset) -> LocationHandle {
        Arc::new(Location { name: name.into(), offset })
    }

    /// Returns `None` when `seconds` is outside (-86_400, 86_400).
    pub fn from_offset_seconds(name: impl Into<String>, seconds: i32) -> Option<LocationHandle> {
        FixedOffset::east_opt(seconds).map(|offset| Location::new(name, offset))
    }

    pub fn utc() -> LocationHandle {
        Location::new("UTC", Utc.fix())
    }

    /// The host's current UTC offset, sampled once at call time.
    pub fn local() -> LocationHandle {
        Location::new("Local", Local::now().offset().fix())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({} {})", self.name, self.offset)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[inline]
pub fn same_location(l1: &LocationHandle, l2: &LocationHandle) -> bool {
    Arc::ptr_eq(l1, l2)
}

/// A calendar date as seen from a particular location.
#[derive(Clone)]
pub struct LocatedDate {
    date: NaiveDate,
    location: LocationHandle
}

impl LocatedDate {
    pub fn new(date: NaiveDate, location: LocationHandle) -> LocatedDate {
        LocatedDate { date, location }
    }

    pub fn from_ymd_opt(year: i32, month: u32, day: u32, location: LocationHandle) -> Option<LocatedDate> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| LocatedDate::new(date, location))
    }

    /// The local date of `instant` in `location`.
    pub fn from_instant<Tz: TimeZone>(instant: &DateTime<Tz>, location: LocationHandle) -> LocatedDate {
        let date = instant.with_timezone(&location.offset()).date_naive();
        LocatedDate { date, location }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> &LocationHandle {
        &self.location
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

impl PartialEq for LocatedDate {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && same_location(&self.location, &other.location)
    }
}

impl Eq for LocatedDate {}

impl fmt::Debug for LocatedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.date, self.location.name)
    }
}

impl fmt::Display for LocatedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.date, self.location.name)
    }
}
