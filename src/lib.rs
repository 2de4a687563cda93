//! # Turf Estimation Engine
//!
//! 草皮裁切與物料估算引擎（工作區門面）
//!
//! 對外重新導出三個成員 crate 的主要類型：
//! - `turf-core`：資料模型與配置
//! - `turf-calc`：估算管線
//! - `turf-plan`：可編輯裁切計劃

pub use turf_core::{
    Accessory, AccessoryCatalog, AccessoryKind, CoverageRules, Cut, EstimateError, Result,
    RollSpec, SupplyLineItem, TurfCategory,
};

pub use turf_calc::{
    CutGenerator, EstimateResult, MetricsCalculator, PackedRoll, PackingResult, PriceBreakdown,
    PricingComposer, RollPacker, SupplyCalculator, TurfEstimate, TurfEstimator,
};

pub use turf_plan::CutPlan;
