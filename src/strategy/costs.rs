// src/strategy/costs.rs

//! Derives the two scalars the planner consumes (setup cost per run and
//! holding cost per unit per period) from shop-floor and warehouse figures.

use crate::error::{LotSizingError, LotSizingResult};
use crate::model::instance::check_rate;
use serde::{Deserialize, Serialize};

/// What one changeover costs on the machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupCostInputs {
    pub setup_time_hours: f64,
    /// Fraction of the tool consumed per hour of setup.
    pub tool_wear_rate: f64,
    pub tool_cost: f64,
    pub oil_cost_per_liter: f64,
    pub oil_required_liters: f64,
    pub operator_wage_per_hour: f64,
}

/// Monthly warehouse overhead spread over the stored units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingCostInputs {
    pub rent_per_sqft: f64,
    pub warehouse_sqft: f64,
    pub electricity: f64,
    pub maintenance: f64,
    pub units_stored: f64,
}

/// Calculates the setup cost of one production run.
///
/// Formula: wear * time * tool_cost + oil_liters * oil_price + time * wage
pub fn setup_cost(inputs: &SetupCostInputs) -> LotSizingResult<f64> {
    check_rate("setup_time_hours", inputs.setup_time_hours)?;
    check_rate("tool_wear_rate", inputs.tool_wear_rate)?;
    check_rate("tool_cost", inputs.tool_cost)?;
    check_rate("oil_cost_per_liter", inputs.oil_cost_per_liter)?;
    check_rate("oil_required_liters", inputs.oil_required_liters)?;
    check_rate("operator_wage_per_hour", inputs.operator_wage_per_hour)?;

    let tool = inputs.tool_wear_rate * inputs.setup_time_hours * inputs.tool_cost;
    let oil = inputs.oil_required_liters * inputs.oil_cost_per_liter;
    let operator = inputs.setup_time_hours * inputs.operator_wage_per_hour;
    Ok(tool + oil + operator)
}

/// Calculates the holding cost per unit per period.
///
/// Formula: (rent * sqft + electricity + maintenance) / units_stored
pub fn holding_cost_rate(inputs: &HoldingCostInputs) -> LotSizingResult<f64> {
    check_rate("rent_per_sqft", inputs.rent_per_sqft)?;
    check_rate("warehouse_sqft", inputs.warehouse_sqft)?;
    check_rate("electricity", inputs.electricity)?;
    check_rate("maintenance", inputs.maintenance)?;
    check_rate("units_stored", inputs.units_stored)?;
    if inputs.units_stored == 0.0 {
        return Err(LotSizingError::invalid(
            "units_stored must be positive to spread warehouse cost",
        ));
    }

    let storage =
        inputs.rent_per_sqft * inputs.warehouse_sqft + inputs.electricity + inputs.maintenance;
    Ok(storage / inputs.units_stored)
}

/// How the planner obtains its two cost scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CostParameters {
    Direct {
        setup_cost: f64,
        holding_cost: f64,
    },
    Derived {
        setup: SetupCostInputs,
        holding: HoldingCostInputs,
    },
}

impl CostParameters {
    /// Returns `(setup_cost, holding_cost)`.
    pub fn resolve(&self) -> LotSizingResult<(f64, f64)> {
        match self {
            Self::Direct {
                setup_cost,
                holding_cost,
            } => {
                check_rate("setup_cost", *setup_cost)?;
                check_rate("holding_cost", *holding_cost)?;
                Ok((*setup_cost, *holding_cost))
            }
            Self::Derived { setup, holding } => {
                Ok((setup_cost(setup)?, holding_cost_rate(holding)?))
            }
        }
    }
}

impl Default for CostParameters {
    /// A 75-minute changeover and a 500 sqft warehouse holding 500 units.
    fn default() -> Self {
        Self::Derived {
            setup: SetupCostInputs {
                setup_time_hours: 75.0 / 60.0,
                tool_wear_rate: 0.005,
                tool_cost: 2500.0,
                oil_cost_per_liter: 100.0,
                oil_required_liters: 0.4,
                operator_wage_per_hour: 50.0,
            },
            holding: HoldingCostInputs {
                rent_per_sqft: 2.0,
                warehouse_sqft: 500.0,
                electricity: 100.0,
                maintenance: 100.0,
                units_stored: 500.0,
            },
        }
    }
}
