//! Wagner-Whitin dynamic program: forward cost pass, backward schedule walk.

pub mod builder;
pub mod evaluate;
pub mod reconstruct;

use crate::error::LotSizingResult;
use crate::model::{CostTable, LotSizingInstance, ProductionSchedule};
use tracing::debug;

pub use builder::{BuildOptions, CostTableBuilder, DpTables};
pub use evaluate::schedule_cost;
pub use reconstruct::reconstruct_schedule;

/// Result of one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct LotSizingSolution {
    pub schedule: ProductionSchedule,
    /// `Z[N]`.
    pub total_cost: f64,
    /// `Z[0..=N]`.
    pub min_costs: Vec<f64>,
    /// `j[0..=N]`, index 0 unused.
    pub last_setup: Vec<usize>,
    /// Present unless the run was built with `keep_cost_table = false`.
    pub cost_table: Option<CostTable>,
}

/// Plans the cheapest schedule for `demand` and keeps the full cost table.
///
/// # Arguments
/// * `demand` - Demand per period, period 1 first.
/// * `setup_cost` - Fixed charge per production run.
/// * `holding_cost` - Charge per unit carried per period.
pub fn solve(
    demand: &[f64],
    setup_cost: f64,
    holding_cost: f64,
) -> LotSizingResult<LotSizingSolution> {
    let instance = LotSizingInstance::new(demand.to_vec(), setup_cost, holding_cost)?;
    solve_with(&instance, &BuildOptions::default())
}

/// Same as [`solve`] for an already validated instance.
pub fn solve_with(
    instance: &LotSizingInstance,
    options: &BuildOptions,
) -> LotSizingResult<LotSizingSolution> {
    let DpTables {
        cost_table,
        min_costs,
        last_setup,
    } = CostTableBuilder::new(instance)
        .with_options(*options)
        .build()?;

    let schedule = reconstruct_schedule(&last_setup, instance.demand())?;
    let total_cost = min_costs[instance.periods()];

    debug!(
        periods = instance.periods(),
        total_cost,
        setups = schedule.setup_count(),
        "lot-sizing plan complete"
    );

    Ok(LotSizingSolution {
        schedule,
        total_cost,
        min_costs,
        last_setup,
        cost_table,
    })
}
