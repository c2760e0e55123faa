//! Engine configuration from environment variables.
//!
//! Supported variables:
//! - `SCOREBOOK_UNDO_DEPTH`: snapshots kept per game for undo (1-1000, default 50)
//! - `SCOREBOOK_INNINGS`: scheduled innings (1-20, default 7)
//! - `SCOREBOOK_SCRIPT`: scoresheet replayed when no path is given on the command line
//!
//! Invalid values are ignored with a warning and the default is kept.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use scorebook_domain::DEFAULT_UNDO_DEPTH;

pub const DEFAULT_INNINGS: u32 = 7;

const UNDO_DEPTH_RANGE: RangeInclusive<usize> = 1..=1000;
const INNINGS_RANGE: RangeInclusive<u32> = 1..=20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub undo_depth: usize,
    pub innings: u32,
    pub script: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            undo_depth: DEFAULT_UNDO_DEPTH,
            innings: DEFAULT_INNINGS,
            script: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("SCOREBOOK_UNDO_DEPTH") {
            match val.trim().parse::<usize>() {
                Ok(depth) if UNDO_DEPTH_RANGE.contains(&depth) => {
                    config.undo_depth = depth;
                    tracing::info!(depth, "Applied SCOREBOOK_UNDO_DEPTH environment variable");
                }
                Ok(depth) => tracing::warn!(
                    depth,
                    "SCOREBOOK_UNDO_DEPTH out of range [1, 1000], ignoring"
                ),
                Err(_) => tracing::warn!(
                    val = %val,
                    "SCOREBOOK_UNDO_DEPTH is not a valid number, ignoring"
                ),
            }
        }

        if let Some(val) = lookup("SCOREBOOK_INNINGS") {
            match val.trim().parse::<u32>() {
                Ok(innings) if INNINGS_RANGE.contains(&innings) => {
                    config.innings = innings;
                    tracing::info!(innings, "Applied SCOREBOOK_INNINGS environment variable");
                }
                Ok(innings) => {
                    tracing::warn!(innings, "SCOREBOOK_INNINGS out of range [1, 20], ignoring")
                }
                Err(_) => tracing::warn!(
                    val = %val,
                    "SCOREBOOK_INNINGS is not a valid number, ignoring"
                ),
            }
        }

        config.script = lookup("SCOREBOOK_SCRIPT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(EngineConfig::from_lookup(lookup(&[])), EngineConfig::default());
    }

    #[test]
    fn reads_valid_values() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("SCOREBOOK_UNDO_DEPTH", "10"),
            ("SCOREBOOK_INNINGS", "9"),
            ("SCOREBOOK_SCRIPT", " games/opener.json "),
        ]));

        assert_eq!(config.undo_depth, 10);
        assert_eq!(config.innings, 9);
        assert_eq!(config.script, Some(PathBuf::from("games/opener.json")));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("SCOREBOOK_UNDO_DEPTH", "0"),
            ("SCOREBOOK_INNINGS", "seven"),
            ("SCOREBOOK_SCRIPT", "   "),
        ]));

        assert_eq!(config, EngineConfig::default());
    }
}
