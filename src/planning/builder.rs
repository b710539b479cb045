// src/planning/builder.rs

use crate::error::{LotSizingError, LotSizingResult};
use crate::model::{CostTable, LotSizingInstance};
use tracing::{debug, trace};

/// Knobs for a single build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Keep the full N x N cost table. When false only `Z` and `j` are
    /// produced and memory stays O(N).
    pub keep_cost_table: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            keep_cost_table: true,
        }
    }
}

/// Everything the forward pass produces.
#[derive(Debug, Clone, PartialEq)]
pub struct DpTables {
    pub cost_table: Option<CostTable>,
    /// `Z[0..=N]`, `Z[0] = 0`.
    pub min_costs: Vec<f64>,
    /// `j[0..=N]`; index 0 is unused and left at 0.
    pub last_setup: Vec<usize>,
}

/// Forward pass of the Wagner-Whitin recurrence.
///
/// For each horizon `t` every start period `k <= t` is priced as
///
/// ```text
/// cost(k, t) = Z[k-1] + S + H * sum_{i=k..=t} (i - k) * d[i]
/// ```
///
/// and `Z[t]` takes the cheapest. Ties go to the earliest `k`.
#[derive(Debug)]
pub struct CostTableBuilder<'a> {
    instance: &'a LotSizingInstance,
    options: BuildOptions,
}

impl<'a> CostTableBuilder<'a> {
    pub fn new(instance: &'a LotSizingInstance) -> Self {
        Self {
            instance,
            options: BuildOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(&self) -> LotSizingResult<DpTables> {
        let demand = self.instance.demand();
        let n = demand.len();
        let setup = self.instance.setup_cost();
        let holding = self.instance.holding_cost();

        let mut table = self.options.keep_cost_table.then(|| CostTable::new(n));
        let mut z = vec![0.0_f64; n + 1];
        let mut j = vec![0_usize; n + 1];

        // holding_units[k] = sum_{i=k..=t} (i - k) * d[i] for the current t.
        // Growing t by one adds exactly one term per start period, so the
        // whole pass stays O(N^2) and sums in the same order as the direct form.
        let mut holding_units = vec![0.0_f64; n + 1];

        for t in 1..=n {
            let d_t = demand[t - 1];

            // The first non-NaN candidate seeds the minimum so j[t] is always
            // a real start period.
            let mut best_k = 0;
            let mut best_cost = f64::INFINITY;

            for k in 1..=t {
                holding_units[k] += (t - k) as f64 * d_t;
                // With free holding the unit count may overflow to inf, and
                // 0 * inf would poison the candidate with NaN.
                let cost = if holding == 0.0 {
                    z[k - 1] + setup
                } else {
                    z[k - 1] + setup + holding * holding_units[k]
                };

                if let Some(table) = table.as_mut() {
                    table.set(k, t, cost);
                }
                trace!(k, t, cost, "priced production fragment");

                // Strict `<`: an equal cost never displaces an earlier start.
                if !cost.is_nan() && (best_k == 0 || cost < best_cost) {
                    best_k = k;
                    best_cost = cost;
                }
            }

            if best_k == 0 || !best_cost.is_finite() {
                return Err(LotSizingError::invalid(format!(
                    "accumulated cost overflowed at period {t}"
                )));
            }

            z[t] = best_cost;
            j[t] = best_k;
            debug!(period = t, z = best_cost, last_setup = best_k, "horizon solved");
        }

        Ok(DpTables {
            cost_table: table,
            min_costs: z,
            last_setup: j,
        })
    }
}
