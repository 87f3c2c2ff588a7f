//! Geographic coordinate with a fault-tolerant decoder.
//!
//! The backend is inconsistent about how it stores `kordinat`: some rows
//! carry a proper JSON object, others a JSON-encoded *string* of that object,
//! and a few stringify the numbers themselves. Decoding must never sink an
//! entire destination fetch, so anything unreadable collapses to the origin
//! instead of an error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Koordinat {
    pub lat: f64,
    pub lng: f64,
}

impl Koordinat {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Decode from any JSON shape the backend has been seen to produce.
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                lat: axis(map.get("lat")),
                lng: axis(map.get("lng")),
            },
            // String-encoded object: unwrap one level and retry.
            Value::String(raw) => serde_json::from_str::<Value>(raw)
                .map(|inner| Self::from_value(&inner))
                .unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// One axis: a number, a stringified number, or 0.0 for anything else.
fn axis(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

impl<'de> Deserialize<'de> for Koordinat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests;
