// In: src/config.rs

//! The single source of truth for all jabl configuration.
//!
//! `JablConfig` is meant to be created once at the application boundary (from
//! a JSON document or `Default`) and then handed by reference to the
//! operations that take policy arguments: `Sequence::chunk` takes a
//! `ChunkSpec`, `Sequence::zip_with_policy` takes a `ZipPolicy`, and
//! `Sequence::par_try_map` takes a `ParallelConfig`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::JablError;

//==================================================================================
// I. Operation Policies
//==================================================================================

/// How `zip` treats inputs of different lengths.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ZipPolicy {
    /// **Default:** the shorter input determines the result length.
    #[default]
    Truncate,

    /// A length mismatch is a `PreconditionViolation`.
    Strict,
}

/// Sizing arguments for `Sequence::chunk`.
///
/// Exactly one sizing mode is honoured: `n_chunks` wins when both are set.
/// `chunk_size` on its own is recognised but not implemented yet.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChunkSpec {
    #[serde(default)]
    pub chunk_size: Option<usize>,
    #[serde(default)]
    pub n_chunks: Option<usize>,
}

impl ChunkSpec {
    /// A spec that partitions into `n` balanced chunks.
    pub fn n_chunks(n: usize) -> Self {
        Self {
            chunk_size: None,
            n_chunks: Some(n),
        }
    }

    /// A spec that asks for chunks of `size` elements each.
    pub fn chunk_size(size: usize) -> Self {
        Self {
            chunk_size: Some(size),
            n_chunks: None,
        }
    }
}

/// Worker pool settings for `Sequence::par_try_map`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParallelConfig {
    /// Number of rayon worker threads. Must be at least 1.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Number of balanced chunks to split the input into. Defaults to `workers`.
    #[serde(default)]
    pub n_chunks: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            n_chunks: None,
        }
    }
}

impl ParallelConfig {
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            n_chunks: None,
        }
    }

    /// The number of chunks the input is partitioned into.
    pub fn effective_chunks(&self) -> usize {
        self.n_chunks.unwrap_or(self.workers)
    }
}

/// Provides a sensible default worker count for serde.
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

//==================================================================================
// II. Logging
//==================================================================================

/// Settings consumed by `logging::init_logging`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// If set, log lines are appended to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

//==================================================================================
// III. The Unified JablConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct JablConfig {
    #[serde(default)]
    pub zip_policy: ZipPolicy,

    /// Chunk sizing for callers to pass to `Sequence::chunk`.
    #[serde(default)]
    pub chunking: ChunkSpec,

    #[serde(default)]
    pub parallel: ParallelConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl JablConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, JablError> {
        let config: JablConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values serde cannot express as types.
    pub fn validate(&self) -> Result<(), JablError> {
        if self.parallel.workers == 0 {
            return Err(JablError::Config(
                "parallel.workers must be at least 1".to_string(),
            ));
        }
        if self.parallel.n_chunks == Some(0) {
            return Err(JablError::Config(
                "parallel.n_chunks must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = JablConfig::from_json_str("{}").unwrap();
        assert_eq!(config.zip_policy, ZipPolicy::Truncate);
        assert_eq!(config.chunking, ChunkSpec::default());
        assert!(config.parallel.workers >= 1);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_json_roundtrips_through_serde() {
        let json = r#"{
            "zip_policy": "strict",
            "chunking": { "n_chunks": 3 },
            "parallel": { "workers": 2, "n_chunks": 8 },
            "logging": { "level": "debug" }
        }"#;
        let config = JablConfig::from_json_str(json).unwrap();
        assert_eq!(config.zip_policy, ZipPolicy::Strict);
        assert_eq!(config.chunking, ChunkSpec::n_chunks(3));
        assert_eq!(config.parallel.effective_chunks(), 8);
        assert_eq!(config.logging.level, "debug");

        let reparsed =
            JablConfig::from_json_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = JablConfig::from_json_str(r#"{ "zip": "strict" }"#);
        assert!(matches!(result, Err(JablError::SerdeJson(_))));
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let result = JablConfig::from_json_str(r#"{ "parallel": { "workers": 0 } }"#);
        assert!(matches!(result, Err(JablError::Config(_))));
    }
}
