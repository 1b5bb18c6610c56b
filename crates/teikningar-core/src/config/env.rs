#[must_use]
pub(super) fn read_raw_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[must_use]
pub(super) fn read_non_empty_env(name: &str) -> Option<String> {
    read_raw_env(name)
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn read_env_usize(name: &str, default_value: usize, min_value: usize) -> usize {
    parse_usize(read_raw_env(name).as_deref(), default_value, min_value)
}

#[must_use]
pub(super) fn read_env_positive_f64(name: &str, default_value: f64) -> f64 {
    parse_positive_f64(read_raw_env(name).as_deref(), default_value)
}

#[must_use]
pub(super) fn parse_usize(raw: Option<&str>, default_value: usize, min_value: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value >= min_value)
        .unwrap_or(default_value)
}

#[must_use]
pub(super) fn parse_positive_f64(raw: Option<&str>, default_value: f64) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(default_value)
}
