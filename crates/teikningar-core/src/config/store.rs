use super::env::{parse_usize, read_raw_env};

const ENV_RECENTLY_VIEWED_CAP: &str = "TEIKNINGAR_RECENTLY_VIEWED_CAP";

/// Ceiling on the recently viewed list. Configuration can only lower it.
pub const MAX_RECENTLY_VIEWED: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub recently_viewed_cap: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            recently_viewed_cap: MAX_RECENTLY_VIEWED,
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub(super) fn from_env() -> Self {
        Self {
            recently_viewed_cap: parse_recently_viewed_cap(
                read_raw_env(ENV_RECENTLY_VIEWED_CAP).as_deref(),
            ),
        }
    }

    /// The cap actually applied, kept within `1..=MAX_RECENTLY_VIEWED`
    /// whatever the field holds.
    #[must_use]
    pub fn recently_viewed_limit(&self) -> usize {
        self.recently_viewed_cap.clamp(1, MAX_RECENTLY_VIEWED)
    }
}

fn parse_recently_viewed_cap(raw: Option<&str>) -> usize {
    parse_usize(raw, MAX_RECENTLY_VIEWED, 1).min(MAX_RECENTLY_VIEWED)
}
