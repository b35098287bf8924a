//! Device — a sensor installed in a room, reporting a single integer value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidTypeError;
use crate::id::{DeviceId, RoomId};

/// The kinds of sensor a room can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Humidity,
    Temperature,
}

impl DeviceType {
    /// Wire name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Humidity => "humidity",
            Self::Temperature => "temperature",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = InvalidTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "humidity" => Ok(Self::Humidity),
            "temperature" => Ok(Self::Temperature),
            other => Err(InvalidTypeError(other.to_string())),
        }
    }
}

/// A sensor belonging to exactly one [`Room`](crate::room::Room).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DeviceType,
    pub room_id: RoomId,
    pub value: i64,
}

/// Fields required to create a [`Device`].
///
/// `kind` is kept as the raw string so the store can report the parent
/// check before the type check.
#[derive(Debug, Clone)]
pub struct NewDevice {
    pub name: String,
    pub kind: String,
    pub room_id: RoomId,
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_supported_types() {
        assert_eq!(
            "humidity".parse::<DeviceType>().unwrap(),
            DeviceType::Humidity
        );
        assert_eq!(
            "temperature".parse::<DeviceType>().unwrap(),
            DeviceType::Temperature
        );
    }

    #[test]
    fn should_reject_unknown_type() {
        let err = "voltage".parse::<DeviceType>().unwrap_err();
        assert_eq!(err.0, "voltage");
    }

    #[test]
    fn should_be_case_sensitive() {
        assert!("Temperature".parse::<DeviceType>().is_err());
    }

    #[test]
    fn should_serialize_kind_under_type_key() {
        let device = Device {
            id: DeviceId::new(1),
            name: "Temperature Sensor".to_string(),
            kind: DeviceType::Temperature,
            room_id: RoomId::new(1),
            value: 25,
        };
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["type"], "temperature");
        assert_eq!(json["room_id"], 1);
        assert_eq!(json["value"], 25);
        assert!(json.get("kind").is_none());
    }
}
