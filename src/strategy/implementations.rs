// src/strategy/implementations.rs

use crate::error::{LotSizingError, LotSizingResult};
use crate::model::{LotSizingInstance, ProductionSchedule};
use crate::planning::{self, BuildOptions};
use crate::strategy::traits::LotSizingPolicy;

// =========================================================================
// 1. Wagner-Whitin (Optimal)
// =========================================================================

/// The exact dynamic program. No cost table is kept since policies only
/// return the schedule.
#[derive(Debug, Clone, Default)]
pub struct WagnerWhitinPolicy;

impl WagnerWhitinPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl LotSizingPolicy for WagnerWhitinPolicy {
    fn name(&self) -> &str {
        "wagner-whitin"
    }

    fn plan(&self, instance: &LotSizingInstance) -> LotSizingResult<ProductionSchedule> {
        let options = BuildOptions {
            keep_cost_table: false,
        };
        Ok(planning::solve_with(instance, &options)?.schedule)
    }
}

// =========================================================================
// 2. Lot-for-Lot (Pass-Through)
// =========================================================================

/// Orders exactly each period's demand in that period. Never holds stock,
/// pays a setup for every period with positive demand.
#[derive(Debug, Clone, Default)]
pub struct LotForLotPolicy;

impl LotForLotPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl LotSizingPolicy for LotForLotPolicy {
    fn name(&self) -> &str {
        "lot-for-lot"
    }

    fn plan(&self, instance: &LotSizingInstance) -> LotSizingResult<ProductionSchedule> {
        Ok(ProductionSchedule::from(instance.demand().to_vec()))
    }
}

// =========================================================================
// 3. Fixed Period Quantity
// =========================================================================

/// Orders every `periods` periods, each order covering the demand of its
/// window. `periods = 1` degenerates to lot-for-lot.
#[derive(Debug, Clone)]
pub struct FixedPeriodPolicy {
    periods: usize,
}

impl FixedPeriodPolicy {
    pub fn new(periods: usize) -> LotSizingResult<Self> {
        if periods == 0 {
            return Err(LotSizingError::invalid(
                "fixed period policy needs a window of at least one period",
            ));
        }
        Ok(Self { periods })
    }
}

impl LotSizingPolicy for FixedPeriodPolicy {
    fn name(&self) -> &str {
        "fixed-period"
    }

    fn plan(&self, instance: &LotSizingInstance) -> LotSizingResult<ProductionSchedule> {
        let mut quantities = vec![0.0; instance.periods()];
        for (window, chunk) in instance.demand().chunks(self.periods).enumerate() {
            quantities[window * self.periods] = chunk.iter().sum();
        }
        Ok(ProductionSchedule::from(quantities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::schedule_cost;

    fn instance() -> LotSizingInstance {
        LotSizingInstance::new(
            vec![20.0, 50.0, 10.0, 50.0, 50.0, 10.0, 20.0, 40.0, 20.0, 30.0],
            100.0,
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn lot_for_lot_mirrors_demand() {
        let schedule = LotForLotPolicy::new().plan(&instance()).unwrap();
        assert_eq!(schedule.quantities(), instance().demand().to_vec());
        assert_eq!(schedule_cost(&instance(), &schedule).unwrap(), 1000.0);
    }

    #[test]
    fn fixed_period_batches_windows() {
        let schedule = FixedPeriodPolicy::new(3).unwrap().plan(&instance()).unwrap();
        assert_eq!(
            schedule.quantities(),
            vec![80.0, 0.0, 0.0, 110.0, 0.0, 0.0, 80.0, 0.0, 0.0, 30.0]
        );
    }

    #[test]
    fn fixed_period_rejects_zero_window() {
        assert!(FixedPeriodPolicy::new(0).is_err());
    }

    #[test]
    fn optimum_is_never_beaten_by_baselines() {
        let policies: Vec<Box<dyn LotSizingPolicy>> = vec![
            Box::new(LotForLotPolicy::new()),
            Box::new(FixedPeriodPolicy::new(2).unwrap()),
            Box::new(FixedPeriodPolicy::new(4).unwrap()),
        ];
        let optimal = WagnerWhitinPolicy::new().plan(&instance()).unwrap();
        let best = schedule_cost(&instance(), &optimal).unwrap();
        assert_eq!(best, 580.0);

        for policy in &policies {
            let schedule = policy.plan(&instance()).unwrap();
            let cost = schedule_cost(&instance(), &schedule).unwrap();
            assert!(best <= cost, "{} beat the optimum: {cost}", policy.name());
        }
    }
}
