//! Generic object conversion through JSON.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::facade::Facade;

/// Compact JSON text of `value`. Serialization failures yield an empty string.
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Round-trip `value` through JSON into a string-keyed map.
///
/// Anything that is not a JSON object is logged through `facade.log_error`
/// and yields an empty map. `null` yields an empty map silently.
pub fn to_generic_map<T: Serialize + ?Sized>(value: &T, facade: &dyn Facade) -> Map<String, Value> {
    json_text_to_map(&to_json_text(value), facade)
}

pub(crate) fn json_text_to_map(text: &str, facade: &dyn Facade) -> Map<String, Value> {
    match serde_json::from_str::<Option<Map<String, Value>>>(text) {
        Ok(map) => map.unwrap_or_default(),
        Err(e) => {
            facade.log_error(&[&e]);
            Map::new()
        }
    }
}
