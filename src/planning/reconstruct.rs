// src/planning/reconstruct.rs

use crate::error::{LotSizingError, LotSizingResult};
use crate::model::ProductionSchedule;

/// Walks the predecessor array back from the last period and collapses each
/// interval `j[t]..=t` into one order placed in `j[t]`.
///
/// `last_setup` must have length `N + 1` with `1 <= j[t] <= t` for every
/// `t in 1..=N`; anything else is a [`LotSizingError::CorruptState`].
pub fn reconstruct_schedule(
    last_setup: &[usize],
    demand: &[f64],
) -> LotSizingResult<ProductionSchedule> {
    let n = demand.len();
    if last_setup.len() != n + 1 {
        return Err(LotSizingError::corrupt(
            0,
            format!(
                "predecessor array has {} entries for {n} periods",
                last_setup.len()
            ),
        ));
    }

    for (t, &k) in last_setup.iter().enumerate().skip(1) {
        if k == 0 || k > t {
            return Err(LotSizingError::corrupt(
                t,
                format!("last setup {k} outside 1..={t}"),
            ));
        }
    }

    let mut schedule = ProductionSchedule::new(n);
    let mut t = n;
    while t > 0 {
        let k = last_setup[t];
        let quantity: f64 = demand[k - 1..t].iter().sum();
        schedule.add_run(k, t, quantity);
        t = k - 1;
    }

    Ok(schedule)
}
