use super::env::read_env_positive_f64;

const ENV_MAP_DEAD_ZONE_DEGREES: &str = "TEIKNINGAR_MAP_DEAD_ZONE_DEGREES";

const DEFAULT_DEAD_ZONE_DEGREES: f64 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Viewports wider or taller than this many degrees show no markers.
    pub dead_zone_degrees: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            dead_zone_degrees: DEFAULT_DEAD_ZONE_DEGREES,
        }
    }
}

impl MapConfig {
    #[must_use]
    pub(super) fn from_env() -> Self {
        Self {
            dead_zone_degrees: read_env_positive_f64(
                ENV_MAP_DEAD_ZONE_DEGREES,
                DEFAULT_DEAD_ZONE_DEGREES,
            ),
        }
    }
}
