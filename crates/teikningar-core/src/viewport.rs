use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::models::{AddressRecord, Coordinates};

/// Initial map centre (Reykjavík).
pub const DEFAULT_MAP_CENTER: Coordinates = Coordinates::new(64.135_209_9, -21.899_254_5);

/// The map cannot be panned outside this rectangle.
pub const MAP_MAX_BOUNDS: GeoBounds = GeoBounds {
    south: 63.969_326_35,
    west: -22.398_992_86,
    north: 64.256_404_13,
    east: -21.662_807_8,
};

/// Closed latitude/longitude rectangle, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    #[must_use]
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    #[must_use]
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.south..=self.north).contains(&point.latitude)
            && (self.west..=self.east).contains(&point.longitude)
    }

    fn exceeds(&self, limit: f64) -> bool {
        self.width() > limit || self.height() > limit
    }
}

/// Markers to draw for the current viewport, using the default dead zone.
#[must_use]
pub fn visible_addresses(bounds: GeoBounds, addresses: &[AddressRecord]) -> Vec<AddressRecord> {
    visible_addresses_with(&MapConfig::default(), bounds, addresses)
}

/// Zoomed-out viewports (wider or taller than the dead zone) get no markers at
/// all. Addresses without coordinates never appear.
#[must_use]
pub fn visible_addresses_with(
    config: &MapConfig,
    bounds: GeoBounds,
    addresses: &[AddressRecord],
) -> Vec<AddressRecord> {
    if bounds.exceeds(config.dead_zone_degrees) {
        return Vec::new();
    }
    addresses
        .iter()
        .filter(|record| {
            record
                .coordinates()
                .is_some_and(|point| bounds.contains(point))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str, lat: f64, lng: f64) -> AddressRecord {
        AddressRecord::new(name, 1, Some(Coordinates::new(lat, lng)))
    }

    fn small_bounds() -> GeoBounds {
        GeoBounds::new(64.14, -21.94, 64.16, -21.92)
    }

    #[test]
    fn wide_viewport_is_a_dead_zone() {
        let addresses = vec![at("Laugavegur 1", 64.145, -21.93)];
        let bounds = GeoBounds::new(64.14, -21.97, 64.15, -21.92);
        assert!((bounds.width() - 0.05).abs() < 1e-9);
        assert!(visible_addresses(bounds, &addresses).is_empty());
    }

    #[test]
    fn tall_viewport_is_a_dead_zone() {
        let addresses = vec![at("Laugavegur 1", 64.145, -21.93)];
        let bounds = GeoBounds::new(64.10, -21.94, 64.16, -21.92);
        assert!(visible_addresses(bounds, &addresses).is_empty());
    }

    #[test]
    fn small_viewport_keeps_points_inside_including_edges() {
        let bounds = small_bounds();
        let addresses = vec![
            at("inside", 64.15, -21.93),
            at("south-west corner", 64.14, -21.94),
            at("north edge", 64.16, -21.925),
            at("outside east", 64.15, -21.91),
            at("outside north", 64.17, -21.93),
            AddressRecord::new("no coords", 3, None),
        ];
        let visible = visible_addresses(bounds, &addresses);
        let names: Vec<&str> = visible.iter().map(AddressRecord::address).collect();
        assert_eq!(names, vec!["inside", "south-west corner", "north edge"]);
    }

    #[test]
    fn viewport_exactly_at_threshold_is_not_a_dead_zone() {
        let bounds = GeoBounds::new(0.0, 0.0, 0.04, 0.04);
        let addresses = vec![at("centre", 0.02, 0.02)];
        assert_eq!(visible_addresses(bounds, &addresses).len(), 1);
    }

    #[test]
    fn zero_sized_viewport_only_matches_exact_point() {
        let bounds = GeoBounds::new(64.15, -21.93, 64.15, -21.93);
        let addresses = vec![at("exact", 64.15, -21.93), at("near", 64.151, -21.93)];
        let visible = visible_addresses(bounds, &addresses);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].address(), "exact");
    }

    #[test]
    fn configured_dead_zone_overrides_default() {
        let config = MapConfig {
            dead_zone_degrees: 0.01,
        };
        let addresses = vec![at("inside", 64.15, -21.93)];
        assert!(visible_addresses_with(&config, small_bounds(), &addresses).is_empty());
    }

    #[test]
    fn default_center_lies_within_max_bounds() {
        assert!(MAP_MAX_BOUNDS.contains(DEFAULT_MAP_CENTER));
    }
}
