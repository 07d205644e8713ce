use serde::Deserialize;

use crate::manager::manager::{IManager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::location::Location;

#[derive(Deserialize)]
struct LocationJsonProp {
    name: String,
    #[serde(default)]
    utc_offset_seconds: i32
}

/// Loads `{"name": ..., "utc_offset_seconds": ...}` objects. Each entry
/// becomes exactly one location object, shared by every calendar naming it.
pub struct LocationLoader;

impl IManager<Location, ()> for LocationLoader {
    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<Location>,
                            json_value: serde_json::Value,
                            _supports: &()) -> Result<(), ManagerError> {
        let json_prop: LocationJsonProp = parse_json_value(json_value)?;
        let location = Location::from_offset_seconds(json_prop.name.as_str(), json_prop.utc_offset_seconds)
            .ok_or_else(|| ManagerError::invalid_location(&json_prop.name, "utc offset out of range"))?;
        builder.insert(json_prop.name, location)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn loads_locations() {
        let locations = LocationLoader.load(&[
            json!({"name": "Tokyo", "utc_offset_seconds": 32400}),
            json!({"name": "London"})
        ], &()).unwrap();

        assert_eq!(locations.get("Tokyo").unwrap().offset().local_minus_utc(), 32400);
        assert_eq!(locations.get("London").unwrap().offset().local_minus_utc(), 0);
    }

    #[test]
    fn rejects_bad_offset() {
        let err = LocationLoader
            .load(&[json!({"name": "Nowhere", "utc_offset_seconds": 90000})], &())
            .err()
            .unwrap();
        assert!(matches!(err, ManagerError::InvalidLocationError { .. }));
    }
}
