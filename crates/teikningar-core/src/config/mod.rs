mod env;
mod map;
mod search;
mod store;

pub use map::MapConfig;
pub use search::SearchConfig;
pub use store::{MAX_RECENTLY_VIEWED, StoreConfig};

const ENV_IMAGE_URL_PREFIX: &str = "TEIKNINGAR_IMAGE_URL_PREFIX";

pub const DEFAULT_IMAGE_URL_PREFIX: &str = "https://skjalasafn.reykjavik.is";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub map: MapConfig,
    pub store: StoreConfig,
    pub image_url_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            map: MapConfig::default(),
            store: StoreConfig::default(),
            image_url_prefix: DEFAULT_IMAGE_URL_PREFIX.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads every `TEIKNINGAR_*` variable. Unparsable or out-of-range values
    /// fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            search: SearchConfig::from_env(),
            map: MapConfig::from_env(),
            store: StoreConfig::from_env(),
            image_url_prefix: env::read_non_empty_env(ENV_IMAGE_URL_PREFIX)
                .unwrap_or_else(|| DEFAULT_IMAGE_URL_PREFIX.to_string()),
        }
    }
}
