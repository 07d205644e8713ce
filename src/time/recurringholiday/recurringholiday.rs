use chrono::NaiveDate;

/// A date generator: for each year, where (if anywhere) the holiday falls.
pub trait RecurringHoliday: Send + Sync {
    /// The month every generated date falls in, when that is known up front.
    fn month(&self) -> Option<u32> {
        None
    }

    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;
}
