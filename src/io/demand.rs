// src/io/demand.rs

use crate::error::{LotSizingError, LotSizingResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// One row of a demand file: `period,demand`.
#[derive(Debug, Clone, Deserialize)]
struct DemandRecord {
    period: usize,
    demand: f64,
}

/// Reads a demand sequence from a CSV file with a `period,demand` header.
///
/// Periods must run 1, 2, ..., N in file order. Values are returned as-is;
/// sign and finiteness are checked when the instance is built.
pub fn read_demand_csv(path: impl AsRef<Path>) -> LotSizingResult<Vec<f64>> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path)?;

    let mut demand = Vec::new();
    for (idx, row) in rdr.deserialize::<DemandRecord>().enumerate() {
        let record = row?;
        let expected = idx + 1;
        if record.period != expected {
            return Err(LotSizingError::invalid(format!(
                "{}: expected period {expected}, found {}",
                path.display(),
                record.period
            )));
        }
        demand.push(record.demand);
    }

    info!(periods = demand.len(), file = %path.display(), "demand loaded");
    Ok(demand)
}

/// Generates a demand schedule where every period has the exact same amount.
pub fn generate_constant_demand(periods: usize, value: f64) -> Vec<f64> {
    vec![value; periods]
}

/// Generates a "Step" pattern: `initial` until period `step_at` (1-based),
/// `stepped` from then on.
pub fn generate_step_demand(
    periods: usize,
    initial: f64,
    stepped: f64,
    step_at: usize,
) -> Vec<f64> {
    (1..=periods)
        .map(|period| if period < step_at { initial } else { stepped })
        .collect()
}

/// Generates a demand schedule from a Normal (Bell Curve) distribution.
///
/// # Arguments
/// * `periods` - Length of the horizon.
/// * `mean` - The average demand per period (e.g., 100.0).
/// * `std_dev` - The standard deviation (volatility) (e.g., 10.0).
/// * `seed` - Seed for the generator, so a plan can be reproduced.
///
/// Samples are rounded to whole units and clamped at 0 (demand cannot be negative).
pub fn generate_normal_demand(
    periods: usize,
    mean: f64,
    std_dev: f64,
    seed: u64,
) -> LotSizingResult<Vec<f64>> {
    let normal = Normal::new(mean, std_dev)
        .map_err(|e| LotSizingError::invalid(format!("normal demand: {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);

    Ok((0..periods)
        .map(|_| normal.sample(&mut rng).round().max(0.0))
        .collect())
}

/// Where the demand sequence comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DemandSource {
    Inline {
        values: Vec<f64>,
    },
    Csv {
        path: PathBuf,
    },
    Constant {
        periods: usize,
        value: f64,
    },
    Step {
        periods: usize,
        initial: f64,
        stepped: f64,
        step_at: usize,
    },
    Normal {
        periods: usize,
        mean: f64,
        std_dev: f64,
        #[serde(default)]
        seed: u64,
    },
}

impl DemandSource {
    pub fn load(&self) -> LotSizingResult<Vec<f64>> {
        match self {
            Self::Inline { values } => Ok(values.clone()),
            Self::Csv { path } => read_demand_csv(path),
            Self::Constant { periods, value } => Ok(generate_constant_demand(*periods, *value)),
            Self::Step {
                periods,
                initial,
                stepped,
                step_at,
            } => Ok(generate_step_demand(*periods, *initial, *stepped, *step_at)),
            Self::Normal {
                periods,
                mean,
                std_dev,
                seed,
            } => generate_normal_demand(*periods, *mean, *std_dev, *seed),
        }
    }
}

impl Default for DemandSource {
    /// Twelve months of demand for a single machined part.
    fn default() -> Self {
        Self::Inline {
            values: vec![
                100.0, 90.0, 115.0, 120.0, 95.0, 100.0, 90.0, 105.0, 105.0, 100.0, 110.0, 105.0,
            ],
        }
    }
}
