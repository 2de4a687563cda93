//! # Turf Plan
//!
//! 可編輯裁切計劃（自動/手動模式的呼叫端狀態）

pub mod plan;

// Re-export 主要類型
pub use plan::CutPlan;
