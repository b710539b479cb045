// src/model/schedule.rs

use serde::Serialize;

/// One row of the per-period schedule. We make this Serialize so it can go
/// straight to CSV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduledOrder {
    /// 1-based period.
    pub period: usize,
    /// Units ordered at the start of `period` (0 when nothing is ordered).
    pub quantity: f64,
}

/// A single production run covering periods `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductionRun {
    pub start: usize,
    pub end: usize,
    pub quantity: f64,
}

/// The planned orders for every period of the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSchedule {
    orders: Vec<ScheduledOrder>,
    runs: Vec<ProductionRun>,
}

impl ProductionSchedule {
    /// An empty plan: `periods` rows, all zero, no runs.
    pub fn new(periods: usize) -> Self {
        Self {
            orders: (1..=periods)
                .map(|period| ScheduledOrder {
                    period,
                    quantity: 0.0,
                })
                .collect(),
            runs: Vec::new(),
        }
    }

    /// Records a run covering `start..=end` as one order placed in `start`.
    ///
    /// Runs may be added in any order; they are kept sorted by start period.
    pub(crate) fn add_run(&mut self, start: usize, end: usize, quantity: f64) {
        if let Some(order) = self.orders.get_mut(start.wrapping_sub(1)) {
            order.quantity = quantity;
        }
        let pos = self.runs.partition_point(|run| run.start < start);
        self.runs.insert(
            pos,
            ProductionRun {
                start,
                end,
                quantity,
            },
        );
    }

    pub fn periods(&self) -> usize {
        self.orders.len()
    }

    pub fn orders(&self) -> &[ScheduledOrder] {
        &self.orders
    }

    pub fn runs(&self) -> &[ProductionRun] {
        &self.runs
    }

    pub fn quantities(&self) -> Vec<f64> {
        self.orders.iter().map(|order| order.quantity).collect()
    }

    /// Quantity ordered in a 1-based period, `None` outside the horizon.
    pub fn quantity_at(&self, period: usize) -> Option<f64> {
        self.orders
            .get(period.wrapping_sub(1))
            .map(|order| order.quantity)
    }

    /// Sum of all orders. Equals the demand total exactly for integer
    /// demand; fractional demand is summed per run first, so the two may
    /// differ by a few ulps.
    pub fn total_quantity(&self) -> f64 {
        self.orders.iter().map(|order| order.quantity).sum()
    }

    /// Number of production runs, i.e. setups charged.
    pub fn setup_count(&self) -> usize {
        self.runs.len()
    }

    /// Periods with a strictly positive order.
    pub fn order_periods(&self) -> Vec<usize> {
        self.orders
            .iter()
            .filter(|order| order.quantity > 0.0)
            .map(|order| order.period)
            .collect()
    }
}

impl From<Vec<f64>> for ProductionSchedule {
    /// Builds a schedule from raw per-period quantities; every positive
    /// quantity starts a run that lasts until the next one.
    fn from(quantities: Vec<f64>) -> Self {
        let periods = quantities.len();
        let starts: Vec<usize> = quantities
            .iter()
            .enumerate()
            .filter(|(_, qty)| **qty > 0.0)
            .map(|(idx, _)| idx + 1)
            .collect();

        let mut schedule = Self::new(periods);
        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).map(|next| next - 1).unwrap_or(periods);
            schedule.add_run(start, end, quantities[start - 1]);
        }
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_schedule_is_all_zero() {
        let schedule = ProductionSchedule::new(4);
        assert_eq!(schedule.periods(), 4);
        assert_eq!(schedule.quantities(), vec![0.0; 4]);
        assert_eq!(schedule.setup_count(), 0);
        assert!(schedule.order_periods().is_empty());
    }

    #[test]
    fn runs_stay_sorted_when_added_backwards() {
        let mut schedule = ProductionSchedule::new(5);
        schedule.add_run(4, 5, 12.0);
        schedule.add_run(1, 3, 30.0);

        let starts: Vec<usize> = schedule.runs().iter().map(|run| run.start).collect();
        assert_eq!(starts, vec![1, 4]);
        assert_eq!(schedule.quantity_at(1), Some(30.0));
        assert_eq!(schedule.quantity_at(4), Some(12.0));
        assert_eq!(schedule.quantity_at(2), Some(0.0));
        assert_eq!(schedule.quantity_at(0), None);
        assert_eq!(schedule.quantity_at(6), None);
        assert_eq!(schedule.total_quantity(), 42.0);
    }

    #[test]
    fn from_quantities_infers_runs() {
        let schedule = ProductionSchedule::from(vec![80.0, 0.0, 0.0, 130.0, 0.0]);
        assert_eq!(
            schedule.runs(),
            &[
                ProductionRun {
                    start: 1,
                    end: 3,
                    quantity: 80.0
                },
                ProductionRun {
                    start: 4,
                    end: 5,
                    quantity: 130.0
                },
            ]
        );
        assert_eq!(schedule.order_periods(), vec![1, 4]);
    }
}
