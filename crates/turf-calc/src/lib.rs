//! # Turf Calculation Engine
//!
//! 草皮裁切與物料估算引擎

pub mod estimator;
pub mod generator;
pub mod metrics;
pub mod packing;
pub mod pricing;
pub mod supplies;

// Re-export 主要類型
pub use estimator::{TurfEstimate, TurfEstimator};
pub use generator::CutGenerator;
pub use metrics::{EstimateResult, MetricsCalculator};
pub use packing::{PackedRoll, PackingResult, RollPacker};
pub use pricing::{PriceBreakdown, PricingComposer};
pub use supplies::SupplyCalculator;
