use std::env;
use std::error::Error;
use std::sync::Arc;

use chrono::NaiveDate;

use holidaycal::configuration::Configuration;
use holidaycal::time::location::LocatedDate;

const USAGE: &str = "usage: holidaycal <config.json> <YYYY-MM-DD> [location]";

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("{}", USAGE);
        return Ok(());
    }

    let config = Configuration::from_path(&args[0])?;
    let date = NaiveDate::parse_from_str(&args[1], "%Y-%m-%d")?;
    let location = match args.get(2) {
        Some(name) => config.locations().get(name)?,
        None => Arc::clone(config.default_location())
    };
    let located = LocatedDate::new(date, location);

    for name in config.holiday_calendars().names() {
        let calendar = config.holiday_calendar(name)?;
        let result = calendar.is_holiday(&located);
        match result.holiday() {
            Some(holiday) => println!("{}: {}, {} (actual: {}, observed: {})",
                                      name, located, holiday.name(), result.actual(), result.observed()),
            None => println!("{}: {}, not a holiday", name, located)
        }
    }
    Ok(())
}
