//! Page settings read from the `data-*` attributes of the mount element.
//!
//! Every value has a default and inclusive bounds. Missing, unparsable or
//! out-of-range values fall back to the default and are reported by key.

use crate::log::{ContactLogMode, LogLevel};

const DEFAULT_TYPING_DELAY_MS: u32 = 50;
const DEFAULT_LIST_DELAY_MS: u32 = 200;
const DEFAULT_PARTICLE_COUNT: usize = 50;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_CONTACT_LOG_MODE: ContactLogMode = ContactLogMode::Full;

const TYPING_DELAY_MS_BOUNDS: (u32, u32) = (1, 1_000);
const LIST_DELAY_MS_BOUNDS: (u32, u32) = (1, 5_000);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 500);

pub const TYPING_DELAY_KEY: &str = "data-typing-delay-ms";
pub const LIST_DELAY_KEY: &str = "data-list-delay-ms";
pub const PARTICLE_COUNT_KEY: &str = "data-particle-count";
pub const LOG_LEVEL_KEY: &str = "data-log-level";
pub const LOG_CONTACT_KEY: &str = "data-log-contact";

/// Reveal cadence for the typing animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    pub typing_delay_ms: u32,
    pub list_delay_ms: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            list_delay_ms: DEFAULT_LIST_DELAY_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub pacing: Pacing,
    pub particle_count: usize,
    pub log_level: LogLevel,
    pub contact_log_mode: ContactLogMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            particle_count: DEFAULT_PARTICLE_COUNT,
            log_level: DEFAULT_LOG_LEVEL,
            contact_log_mode: DEFAULT_CONTACT_LOG_MODE,
        }
    }
}

impl SiteConfig {
    /// Builds the config from `lookup`. The second value lists keys that were
    /// present but rejected.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<&'static str>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();
        let read = |key: &'static str| -> Option<String> {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let typing_delay_ms = parse_with_bounds(
            read(TYPING_DELAY_KEY),
            DEFAULT_TYPING_DELAY_MS,
            TYPING_DELAY_MS_BOUNDS,
        )
        .unwrap_or_else(|default| {
            rejected.push(TYPING_DELAY_KEY);
            default
        });
        let list_delay_ms = parse_with_bounds(
            read(LIST_DELAY_KEY),
            DEFAULT_LIST_DELAY_MS,
            LIST_DELAY_MS_BOUNDS,
        )
        .unwrap_or_else(|default| {
            rejected.push(LIST_DELAY_KEY);
            default
        });
        let particle_count = parse_with_bounds(
            read(PARTICLE_COUNT_KEY),
            DEFAULT_PARTICLE_COUNT,
            PARTICLE_COUNT_BOUNDS,
        )
        .unwrap_or_else(|default| {
            rejected.push(PARTICLE_COUNT_KEY);
            default
        });
        let log_level = parse_choice(read(LOG_LEVEL_KEY), DEFAULT_LOG_LEVEL, LogLevel::parse)
            .unwrap_or_else(|default| {
                rejected.push(LOG_LEVEL_KEY);
                default
            });
        let contact_log_mode = parse_choice(
            read(LOG_CONTACT_KEY),
            DEFAULT_CONTACT_LOG_MODE,
            ContactLogMode::parse,
        )
        .unwrap_or_else(|default| {
            rejected.push(LOG_CONTACT_KEY);
            default
        });

        let config = Self {
            pacing: Pacing {
                typing_delay_ms,
                list_delay_ms,
            },
            particle_count,
            log_level,
            contact_log_mode,
        };

        (config, rejected)
    }
}

/// `Ok` with the parsed or default value, `Err(default)` when a value was
/// given but could not be used.
fn parse_with_bounds<T>(raw: Option<String>, default: T, bounds: (T, T)) -> Result<T, T>
where
    T: std::str::FromStr + PartialOrd + Copy,
{
    let Some(raw) = raw else {
        return Ok(default);
    };

    raw.parse::<T>()
        .ok()
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .ok_or(default)
}

fn parse_choice<T: Copy>(
    raw: Option<String>,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, T> {
    match raw {
        None => Ok(default),
        Some(raw) => parse(&raw).ok_or(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> (SiteConfig, Vec<&'static str>) {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| values.get(key).cloned())
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let (config, rejected) = config_from(&[]);

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.pacing.typing_delay_ms, 50);
        assert_eq!(config.pacing.list_delay_ms, 200);
        assert_eq!(config.particle_count, 50);
        assert!(rejected.is_empty());
    }

    #[test]
    fn valid_values_override_defaults() {
        let (config, rejected) = config_from(&[
            (TYPING_DELAY_KEY, " 20 "),
            (LIST_DELAY_KEY, "500"),
            (PARTICLE_COUNT_KEY, "0"),
            (LOG_LEVEL_KEY, "Debug"),
            (LOG_CONTACT_KEY, "redacted"),
        ]);

        assert_eq!(config.pacing.typing_delay_ms, 20);
        assert_eq!(config.pacing.list_delay_ms, 500);
        assert_eq!(config.particle_count, 0);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.contact_log_mode, ContactLogMode::Redacted);
        assert!(rejected.is_empty());
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back() {
        let (config, rejected) = config_from(&[
            (TYPING_DELAY_KEY, "0"),
            (LIST_DELAY_KEY, "fast"),
            (PARTICLE_COUNT_KEY, "501"),
            (LOG_LEVEL_KEY, "trace"),
        ]);

        assert_eq!(config.pacing, Pacing::default());
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(
            rejected,
            vec![TYPING_DELAY_KEY, LIST_DELAY_KEY, PARTICLE_COUNT_KEY, LOG_LEVEL_KEY]
        );
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let (config, rejected) = config_from(&[(TYPING_DELAY_KEY, "   ")]);
        assert_eq!(config.pacing.typing_delay_ms, 50);
        assert!(rejected.is_empty());
    }
}
