use super::env::read_env_usize;

const ENV_SEARCH_MAX_RESULTS: &str = "TEIKNINGAR_SEARCH_MAX_RESULTS";

const DEFAULT_SEARCH_MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Results shown in the dropdown before the "N more" line.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_SEARCH_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub(super) fn from_env() -> Self {
        Self {
            max_results: read_env_usize(ENV_SEARCH_MAX_RESULTS, DEFAULT_SEARCH_MAX_RESULTS, 1),
        }
    }
}
