// src/planning/evaluate.rs

use crate::error::{LotSizingError, LotSizingResult};
use crate::model::{LotSizingInstance, ProductionSchedule};

/// Prices an arbitrary schedule against an instance.
///
/// Cost = S per period with a positive order + H * sum of end-of-period
/// inventory. Orders are received at the start of their period and demand is
/// consumed within it, so a run covering `k..=t` carries `d[i]` for `i - k`
/// periods, the same accounting as the forward pass.
///
/// Schedules that run short of cumulative demand are rejected: backlogging is
/// not modelled.
pub fn schedule_cost(
    instance: &LotSizingInstance,
    schedule: &ProductionSchedule,
) -> LotSizingResult<f64> {
    if schedule.periods() != instance.periods() {
        return Err(LotSizingError::invalid(format!(
            "schedule covers {} periods, instance has {}",
            schedule.periods(),
            instance.periods()
        )));
    }

    let mut inventory = 0.0_f64;
    let mut setups = 0_usize;
    let mut carried = 0.0_f64;

    for (order, &demand) in schedule.orders().iter().zip(instance.demand()) {
        if !order.quantity.is_finite() || order.quantity < 0.0 {
            return Err(LotSizingError::invalid(format!(
                "order in period {} has quantity {}",
                order.period, order.quantity
            )));
        }
        if order.quantity > 0.0 {
            setups += 1;
        }

        inventory += order.quantity - demand;
        if inventory < -shortage_tolerance(demand) {
            return Err(LotSizingError::invalid(format!(
                "schedule runs short by {} units in period {}",
                -inventory, order.period
            )));
        }
        inventory = inventory.max(0.0);
        carried += inventory;
    }

    Ok(setups as f64 * instance.setup_cost() + instance.holding_cost() * carried)
}

fn shortage_tolerance(demand: f64) -> f64 {
    1e-9 * demand.max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> LotSizingInstance {
        LotSizingInstance::new(vec![10.0, 10.0, 10.0], 50.0, 1.0).unwrap()
    }

    #[test]
    fn single_order_matches_hand_count() {
        let schedule = ProductionSchedule::from(vec![30.0, 0.0, 0.0]);
        // carry 20 after period 1, 10 after period 2
        assert_eq!(schedule_cost(&instance(), &schedule).unwrap(), 80.0);
    }

    #[test]
    fn lot_for_lot_pays_only_setups() {
        let schedule = ProductionSchedule::from(vec![10.0, 10.0, 10.0]);
        assert_eq!(schedule_cost(&instance(), &schedule).unwrap(), 150.0);
    }

    #[test]
    fn shortage_is_rejected() {
        let schedule = ProductionSchedule::from(vec![10.0, 0.0, 20.0]);
        let err = schedule_cost(&instance(), &schedule).unwrap_err();
        assert!(matches!(err, LotSizingError::InvalidInput(_)));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let schedule = ProductionSchedule::from(vec![30.0]);
        assert!(schedule_cost(&instance(), &schedule).is_err());
    }
}
