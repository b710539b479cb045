// src/strategy/traits.rs

use crate::error::LotSizingResult;
use crate::model::{LotSizingInstance, ProductionSchedule};
use std::fmt::Debug;

/// Decides how many periods of demand to batch into each production run.
///
/// We require `Send` + `Sync` so one policy can plan many components at once.
pub trait LotSizingPolicy: Debug + Send + Sync {
    /// Short label used in reports.
    fn name(&self) -> &str;

    /// Produces a feasible schedule for the whole horizon of `instance`.
    fn plan(&self, instance: &LotSizingInstance) -> LotSizingResult<ProductionSchedule>;
}
