// src/model/instance.rs

use crate::error::{LotSizingError, LotSizingResult};

/// A validated single-item lot-sizing problem.
///
/// Construction is the only place inputs are checked; everything downstream
/// (builder, reconstructor, policies) assumes a well-formed instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LotSizingInstance {
    demand: Vec<f64>,
    setup_cost: f64,
    holding_cost: f64,
}

impl LotSizingInstance {
    /// # Arguments
    /// * `demand` - Demand per period, period 1 first. Must be non-empty, finite and >= 0.
    /// * `setup_cost` - Fixed charge per production run.
    /// * `holding_cost` - Charge per unit carried per period.
    pub fn new(demand: Vec<f64>, setup_cost: f64, holding_cost: f64) -> LotSizingResult<Self> {
        if demand.is_empty() {
            return Err(LotSizingError::invalid(
                "planning horizon must contain at least one period",
            ));
        }

        for (idx, &value) in demand.iter().enumerate() {
            if !value.is_finite() {
                return Err(LotSizingError::invalid(format!(
                    "demand in period {} is not finite ({value})",
                    idx + 1
                )));
            }
            if value < 0.0 {
                return Err(LotSizingError::invalid(format!(
                    "demand in period {} is negative ({value})",
                    idx + 1
                )));
            }
        }

        check_rate("setup_cost", setup_cost)?;
        check_rate("holding_cost", holding_cost)?;

        Ok(Self {
            demand,
            setup_cost,
            holding_cost,
        })
    }

    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// Number of periods N.
    pub fn periods(&self) -> usize {
        self.demand.len()
    }

    pub fn setup_cost(&self) -> f64 {
        self.setup_cost
    }

    pub fn holding_cost(&self) -> f64 {
        self.holding_cost
    }

    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }
}

pub(crate) fn check_rate(name: &str, value: f64) -> LotSizingResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LotSizingError::invalid(format!(
            "{name} must be finite and non-negative, got {value}"
        )));
    }
    Ok(())
}
