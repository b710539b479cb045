// src/config.rs

use crate::error::{LotSizingError, LotSizingResult};
use crate::io::demand::DemandSource;
use crate::planning::BuildOptions;
use crate::strategy::costs::CostParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything one planning run needs, loadable from a JSON file.
///
/// ```json
/// {
///   "costs": { "mode": "direct", "setup_cost": 100.0, "holding_cost": 1.0 },
///   "demand": { "source": "csv", "path": "demand.csv" },
///   "output_path": "plan.csv"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub costs: CostParameters,
    pub demand: DemandSource,
    /// Keep the full N x N cost table (needed for `print_table`).
    pub keep_cost_table: bool,
    pub print_table: bool,
    /// Where to export the schedule CSV, if anywhere.
    pub output_path: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            costs: CostParameters::default(),
            demand: DemandSource::default(),
            keep_cost_table: true,
            print_table: true,
            output_path: None,
        }
    }
}

impl PlannerConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> LotSizingResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LotSizingError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Cross-field checks serde cannot express.
    pub fn validate(&self) -> LotSizingResult<()> {
        if self.print_table && !self.keep_cost_table {
            return Err(LotSizingError::Config(
                "print_table requires keep_cost_table".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            keep_cost_table: self.keep_cost_table,
        }
    }
}
