pub mod cost_table;
pub mod instance;
pub mod schedule;

pub use cost_table::{CostTable, NOT_COMPUTED};
pub use instance::LotSizingInstance;
pub use schedule::{ProductionRun, ProductionSchedule, ScheduledOrder};
