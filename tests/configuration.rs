//! Loading the bundled sample configuration.

use std::sync::Arc;

use chrono::NaiveDate;

use holidaycal::configuration::Configuration;
use holidaycal::time::location::{LocatedDate, same_location};

const CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/json/config.json");

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn matched(config: &Configuration, calendar: &str, date: &LocatedDate) -> Option<String> {
    config.holiday_calendar(calendar).unwrap()
        .is_holiday(date)
        .holiday()
        .map(|h| h.name().to_owned())
}

#[test]
fn sample_configuration_loads() {
    let config = Configuration::from_path(CONFIG_PATH).unwrap();
    assert_eq!(config.holiday_calendars().names(), vec!["Christian", "GB", "US"]);
    assert_eq!(config.locations().names(), vec!["London", "NewYork"]);

    let new_york = config.locations().get("NewYork").unwrap();
    assert!(same_location(config.default_location(), &new_york));

    let us = config.holiday_calendar("US").unwrap();
    assert_eq!(us.description(), "United States federal holidays");
    assert_eq!(us.holidays().len(), 12);
    assert!(Arc::ptr_eq(&us.locations().unwrap()[0], &new_york));
}

#[test]
fn us_holidays_in_new_york() {
    let config = Configuration::from_path(CONFIG_PATH).unwrap();

    let thanksgiving = config.locate(ymd(2023, 11, 23));
    let black_friday = config.locate(ymd(2023, 11, 24));
    let juneteenth_observed = config.locate(ymd(2022, 6, 20));
    let before_juneteenth = config.locate(ymd(2020, 6, 19));

    assert_eq!(matched(&config, "US", &thanksgiving).as_deref(), Some("Thanksgiving Day"));
    assert_eq!(matched(&config, "US", &black_friday).as_deref(), Some("Day after Thanksgiving"));
    assert_eq!(matched(&config, "US", &juneteenth_observed).as_deref(), Some("Juneteenth"));
    assert_eq!(matched(&config, "US", &before_juneteenth), None);

    let result = config.holiday_calendar("US").unwrap().is_holiday(&juneteenth_observed);
    assert!(!result.actual() && result.observed());
}

#[test]
fn gb_calendar_ignores_new_york_dates() {
    let config = Configuration::from_path(CONFIG_PATH).unwrap();
    let london = config.locations().get("London").unwrap();

    let good_friday_london = LocatedDate::new(ymd(2024, 3, 29), london);
    let good_friday_new_york = config.locate(ymd(2024, 3, 29));
    assert_eq!(matched(&config, "GB", &good_friday_london).as_deref(), Some("Good Friday"));
    assert_eq!(matched(&config, "GB", &good_friday_new_york), None);
}

#[test]
fn unscoped_calendar_matches_everywhere() {
    let config = Configuration::from_path(CONFIG_PATH).unwrap();
    let london = config.locations().get("London").unwrap();

    // Western and Orthodox Easter coincide in 2025; the first rule wins.
    let easter_2025 = LocatedDate::new(ymd(2025, 4, 20), london);
    assert_eq!(matched(&config, "Christian", &easter_2025).as_deref(), Some("Orthodox Easter"));

    let easter_2024 = config.locate(ymd(2024, 3, 31));
    assert_eq!(matched(&config, "Christian", &easter_2024).as_deref(), Some("Easter"));
}

#[test]
fn year_listing_from_configuration() {
    let config = Configuration::from_path(CONFIG_PATH).unwrap();
    let gb = config.holiday_calendar("GB").unwrap();

    let listed: Vec<(String, Option<NaiveDate>)> = gb.holidays_in_year(2024)
        .into_iter()
        .map(|(h, occurrence)| (h.name().to_owned(), occurrence.actual()))
        .collect();
    assert_eq!(listed.len(), 7);
    assert!(listed.contains(&("Easter Monday".to_owned(), Some(ymd(2024, 4, 1)))));
    assert!(listed.contains(&("Summer Bank Holiday".to_owned(), Some(ymd(2024, 8, 26)))));
}
