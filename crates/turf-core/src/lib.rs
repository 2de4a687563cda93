//! # Turf Core
//!
//! 核心資料模型與類型定義

pub mod accessory;
pub mod config;
pub mod cut;
pub mod supply;

// Re-export 主要類型
pub use accessory::{Accessory, AccessoryCatalog, AccessoryKind, TurfCategory};
pub use config::{CoverageRules, RollSpec};
pub use cut::Cut;
pub use supply::SupplyLineItem;

/// 估算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("無效的卷材規格: {0}")]
    InvalidRollSpec(String),

    #[error("配件目錄中找不到類型: {0:?}")]
    AccessoryNotFound(AccessoryKind),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, EstimateError>;
