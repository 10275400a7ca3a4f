//! Configuration for the diff and patch pipeline
//!
//! Defaults with environment-variable overrides. Nothing here is required
//! on the happy path; the knobs exist for the output naming scheme and the
//! memory ceiling of the distance table.

use serde::{Deserialize, Serialize};

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineDiffConfig {
    /// Output naming configuration
    pub output: OutputConfig,
    /// Resource limits
    pub limits: LimitsConfig,
}

/// Configuration for persisted output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Prefix prepended to the input file name when writing the patched result
    pub patched_prefix: String,
}

/// Resource limits for the diff engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Upper bound on distance-table cells a single diff may allocate
    pub max_table_cells: u64,
}

impl Default for LineDiffConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            patched_prefix: "_".to_string(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            // ~64M cells, a few hundred MB of table. The quadratic table is
            // the known scaling limit of the algorithm.
            max_table_cells: 64_000_000,
        }
    }
}

impl LineDiffConfig {
    /// Load configuration from environment variables over the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("LINEDIFF_PATCHED_PREFIX") {
            if !val.is_empty() {
                config.output.patched_prefix = val;
            }
        }

        if let Ok(val) = std::env::var("LINEDIFF_MAX_TABLE_CELLS") {
            if let Ok(cells) = val.parse::<u64>() {
                config.limits.max_table_cells = cells;
            }
        }

        config
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.output.patched_prefix.is_empty() {
            return Err("patched_prefix must not be empty (the output would overwrite the input)"
                .to_string());
        }

        if self.limits.max_table_cells == 0 {
            return Err("max_table_cells must be greater than 0".to_string());
        }

        Ok(())
    }
}
