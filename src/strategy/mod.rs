pub mod costs;
pub mod implementations;
pub mod traits;

pub use costs::{CostParameters, HoldingCostInputs, SetupCostInputs};
pub use implementations::{FixedPeriodPolicy, LotForLotPolicy, WagnerWhitinPolicy};
pub use traits::LotSizingPolicy;
