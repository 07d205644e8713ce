use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    TimeDelta,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Observance policy: where a holiday is observed when its actual date
/// falls on a given weekday.
///
/// Stored as a day shift per weekday (0=Monday, 6=Sunday). A `None` slot
/// means the holiday is observed on its actual date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<Weekday, WeekendAdjustment>")]
pub struct WeekendAdjustmentRule {
    rule: [Option<i64>; 7]
}

impl WeekendAdjustmentRule {
    /// Builds the shift table from a weekday map.
    ///
    /// Every weekday present in the map counts as a weekend day, so a shift
    /// keeps walking in its direction until it leaves the weekend: with
    /// Saturday and Sunday both `NextWeekday`, Saturday moves two days.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule: [Option<i64>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let step = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut to_weekday = weekday;
            let mut shift_days: i64 = 0;
            // Bounded: at most seven steps before the walk cycles back.
            while adjustment_map.contains_key(&to_weekday) && shift_days.abs() < 7 {
                to_weekday = step(&to_weekday);
                shift_days += adj as i64;
            }

            rule[weekday.num_days_from_monday() as usize] = Some(shift_days);
        }

        WeekendAdjustmentRule { rule }
    }

    /// Observed on the actual date, whatever the weekday.
    pub fn none() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule::default()
    }

    /// Saturday back to Friday, Sunday forward to Monday.
    pub fn nearest_weekday() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]))
    }

    /// Saturday and Sunday forward to Monday.
    pub fn next_weekday() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::NextWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]))
    }

    pub fn is_unadjusted(&self) -> bool {
        self.rule.iter().all(|shift| shift.is_none())
    }

    /// Shift applied to a date falling on `weekday`, if any.
    pub fn shift_for(&self, weekday: Weekday) -> Option<i64> {
        self.rule[weekday.num_days_from_monday() as usize]
    }

    /// Reconstructs the adjustment map from the internal shift table.
    pub fn adjustment_map(&self) -> HashMap<Weekday, WeekendAdjustment> {
        let mut result = HashMap::new();

        for weekday in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
                        Weekday::Fri, Weekday::Sat, Weekday::Sun] {
            if let Some(shift) = self.shift_for(weekday) {
                let adjustment = match shift {
                    n if n > 0 => WeekendAdjustment::NextWeekday,
                    n if n < 0 => WeekendAdjustment::PreviousWeekday,
                    _ => WeekendAdjustment::Unadjusted
                };
                result.insert(weekday, adjustment);
            }
        }

        result
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        match self.shift_for(d.weekday()) {
            Some(shift) => d.checked_add_signed(TimeDelta::days(shift)).unwrap_or(d),
            None => d
        }
    }
}

impl From<HashMap<Weekday, WeekendAdjustment>> for WeekendAdjustmentRule {
    fn from(adjustment_map: HashMap<Weekday, WeekendAdjustment>) -> Self {
        WeekendAdjustmentRule::new(&adjustment_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn nearest_weekday_observance() {
        let rule = WeekendAdjustmentRule::nearest_weekday();
        // 2021-12-25 is a Saturday, 2022-12-25 a Sunday.
        assert_eq!(rule.adjust(ymd(2021, 12, 25)), ymd(2021, 12, 24));
        assert_eq!(rule.adjust(ymd(2022, 12, 25)), ymd(2022, 12, 26));
        assert_eq!(rule.adjust(ymd(2024, 12, 25)), ymd(2024, 12, 25));
    }

    #[test]
    fn consecutive_weekend_days_are_skipped() {
        let rule = WeekendAdjustmentRule::next_weekday();
        assert_eq!(rule.shift_for(Weekday::Sat), Some(2));
        assert_eq!(rule.shift_for(Weekday::Sun), Some(1));
        assert_eq!(rule.adjust(ymd(2021, 12, 25)), ymd(2021, 12, 27));
    }

    #[test]
    fn unadjusted_entries_still_count_as_weekend() {
        let rule = WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Fri, WeekendAdjustment::Unadjusted),
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday)
        ]));
        assert_eq!(rule.shift_for(Weekday::Fri), None);
        assert_eq!(rule.shift_for(Weekday::Sat), Some(-2));
    }

    #[test]
    fn map_round_trip_keeps_directions() {
        let rule = WeekendAdjustmentRule::nearest_weekday();
        let map = rule.adjustment_map();
        assert_eq!(map.get(&Weekday::Sat), Some(&WeekendAdjustment::PreviousWeekday));
        assert_eq!(map.get(&Weekday::Sun), Some(&WeekendAdjustment::NextWeekday));
        assert_eq!(WeekendAdjustmentRule::from(map), rule);
    }

    #[test]
    fn deserializes_from_weekday_map() {
        let rule: WeekendAdjustmentRule =
            serde_json::from_str(r#"{"Sat": "PreviousWeekday", "Sun": "NextWeekday"}"#).unwrap();
        assert_eq!(rule, WeekendAdjustmentRule::nearest_weekday());
        assert!(WeekendAdjustmentRule::none().is_unadjusted());
    }
}
