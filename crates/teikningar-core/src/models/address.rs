use serde::{Deserialize, Serialize};

use crate::error::TeikningarError;
use crate::text::normalize;

/// Latitude/longitude pair in degrees. Serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub(crate) fn validate(self) -> Result<Self, TeikningarError> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lng_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lng_ok {
            Ok(self)
        } else {
            Err(TeikningarError::Validation(format!(
                "coordinates out of range: [{}, {}]",
                self.latitude, self.longitude
            )))
        }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(value: Coordinates) -> Self {
        [value.latitude, value.longitude]
    }
}

/// One street address with at least one archived blueprint.
///
/// The normalized form is derived from `address` when the record is built and
/// never recomputed; whatever `normalized` value arrives on the wire is
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AddressWire")]
pub struct AddressRecord {
    address: String,
    #[serde(rename = "normalized")]
    normalized_address: String,
    #[serde(rename = "count")]
    blueprint_count: u32,
    #[serde(rename = "coords", skip_serializing_if = "Option::is_none")]
    coordinates: Option<Coordinates>,
}

impl AddressRecord {
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        blueprint_count: u32,
        coordinates: Option<Coordinates>,
    ) -> Self {
        let address = address.into();
        let normalized_address = normalize(&address);
        Self {
            address,
            normalized_address,
            blueprint_count,
            coordinates,
        }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn normalized_address(&self) -> &str {
        &self.normalized_address
    }

    #[must_use]
    pub const fn blueprint_count(&self) -> u32 {
        self.blueprint_count
    }

    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }
}

#[derive(Debug, Deserialize)]
struct AddressWire {
    address: String,
    #[serde(default)]
    count: u32,
    #[serde(default)]
    coords: Option<Coordinates>,
}

impl TryFrom<AddressWire> for AddressRecord {
    type Error = TeikningarError;

    fn try_from(wire: AddressWire) -> Result<Self, Self::Error> {
        if wire.address.trim().is_empty() {
            return Err(TeikningarError::Validation(
                "address must not be empty".to_string(),
            ));
        }
        // A bad location only hides the address from the map.
        let coordinates = wire.coords.and_then(|coords| match coords.validate() {
            Ok(coords) => Some(coords),
            Err(error) => {
                tracing::warn!(
                    target: "teikningar.catalog",
                    address = %wire.address,
                    %error,
                    "dropping invalid coordinates"
                );
                None
            }
        });
        Ok(Self::new(wire.address, wire.count, coordinates))
    }
}
