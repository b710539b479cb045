// src/model/cost_table.rs

/// Value held by every cell the builder never visits (`k > t`).
///
/// A written cell may hold the same value (an overflowed fragment), so
/// whether a cell was filled is tracked separately; see [`CostTable::get`].
pub const NOT_COMPUTED: f64 = f64::INFINITY;

/// The N x N table of policy-fragment costs.
///
/// Cell `(k, t)` (both 1-based) is the total cost of covering periods `k..=t`
/// from one production run started in period `k`, plus the optimal cost of
/// everything before `k`. Only `k <= t` is ever written; all other cells stay
/// at [`NOT_COMPUTED`].
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    periods: usize,
    // Row-major: row = start period k, column = horizon t.
    cells: Vec<f64>,
    computed: Vec<bool>,
}

impl CostTable {
    pub fn new(periods: usize) -> Self {
        Self {
            periods,
            cells: vec![NOT_COMPUTED; periods * periods],
            computed: vec![false; periods * periods],
        }
    }

    pub fn periods(&self) -> usize {
        self.periods
    }

    fn index(&self, k: usize, t: usize) -> Option<usize> {
        if k == 0 || t == 0 || k > self.periods || t > self.periods {
            return None;
        }
        Some((k - 1) * self.periods + (t - 1))
    }

    /// Raw cell value, sentinel included. Out-of-range reads return the sentinel.
    pub fn raw(&self, k: usize, t: usize) -> f64 {
        self.index(k, t)
            .map(|idx| self.cells[idx])
            .unwrap_or(NOT_COMPUTED)
    }

    /// The cost of cell `(k, t)`, or `None` if it was never filled.
    ///
    /// A filled cell is returned as written, even when its cost is infinite.
    pub fn get(&self, k: usize, t: usize) -> Option<f64> {
        let idx = self.index(k, t)?;
        self.computed[idx].then(|| self.cells[idx])
    }

    pub fn is_computed(&self, k: usize, t: usize) -> bool {
        self.index(k, t).is_some_and(|idx| self.computed[idx])
    }

    pub(crate) fn set(&mut self, k: usize, t: usize, cost: f64) {
        debug_assert!(k <= t, "cost table cell ({k}, {t}) lies below the diagonal");
        if let Some(idx) = self.index(k, t) {
            self.cells[idx] = cost;
            self.computed[idx] = true;
        }
    }

    /// All horizons `t = 1..=N` for start period `k`.
    pub fn row(&self, k: usize) -> &[f64] {
        match self.index(k, 1) {
            Some(start) => &self.cells[start..start + self.periods],
            None => &[],
        }
    }

    /// Rows paired with their 1-based start period.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        (1..=self.periods).map(move |k| (k, self.row(k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_is_all_sentinel() {
        let table = CostTable::new(3);
        for k in 1..=3 {
            for t in 1..=3 {
                assert_eq!(table.raw(k, t), NOT_COMPUTED);
                assert!(!table.is_computed(k, t));
            }
        }
    }

    #[test]
    fn set_and_get_use_one_based_indices() {
        let mut table = CostTable::new(3);
        table.set(1, 3, 80.0);
        table.set(2, 2, 100.0);

        assert_eq!(table.get(1, 3), Some(80.0));
        assert_eq!(table.get(2, 2), Some(100.0));
        assert_eq!(table.get(3, 1), None);
        assert_eq!(table.row(1), &[NOT_COMPUTED, NOT_COMPUTED, 80.0]);
    }

    #[test]
    fn out_of_range_reads_are_sentinel() {
        let table = CostTable::new(2);
        assert_eq!(table.raw(0, 1), NOT_COMPUTED);
        assert_eq!(table.raw(3, 3), NOT_COMPUTED);
        assert!(table.row(5).is_empty());
        assert_eq!(table.rows().count(), 2);
        assert!(!table.is_computed(0, 1));
        assert_eq!(table.get(3, 3), None);
    }

    #[test]
    fn infinite_cost_still_counts_as_computed() {
        let mut table = CostTable::new(3);
        table.set(2, 2, f64::INFINITY);

        assert_eq!(table.get(2, 2), Some(f64::INFINITY));
        assert!(table.is_computed(2, 2));
        assert_eq!(table.raw(2, 2), NOT_COMPUTED);
        assert_eq!(table.get(2, 3), None);
    }
}
