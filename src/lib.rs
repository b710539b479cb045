//! Single-item dynamic lot sizing (Wagner-Whitin).
//!
//! Given a deterministic demand per period, a fixed setup cost per production
//! run and a linear holding cost, [`solve`] finds the cheapest schedule of
//! production runs over the horizon, together with the cost table, the
//! minimal prefix costs `Z` and the last-setup pointers `j` it was derived
//! from.
//!
//! ```
//! let plan = lot_sizing::solve(&[10.0, 10.0, 10.0], 50.0, 1.0).unwrap();
//! assert_eq!(plan.total_cost, 80.0);
//! assert_eq!(plan.schedule.quantities(), vec![30.0, 0.0, 0.0]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod planning;
pub mod strategy;

pub use error::{LotSizingError, LotSizingResult};
pub use model::{CostTable, LotSizingInstance, ProductionSchedule, ScheduledOrder};
pub use planning::{solve, solve_with, BuildOptions, LotSizingSolution};
