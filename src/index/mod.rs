pub mod staleness;
pub mod stats;
pub mod store;
pub mod types;

pub use staleness::{FullDiffStaleness, SampledStaleness, StalenessMode, StalenessPolicy};
pub use stats::IndexStats;
pub use store::IndexStore;
pub use types::*;
