//! 推導指標計算

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use turf_core::{cut, Cut, RollSpec};

use crate::packing::PackingResult;

/// 估算結果（每次清單變更整體重算，不就地修改）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// 需求面積（自動模式下以使用者輸入為準）
    pub requested_area: Decimal,

    /// 實際裁切面積 = 各裁切面積總和
    pub realized_area: Decimal,

    /// 總裁切直線長度
    pub total_linear_length: Decimal,

    /// 所需卷數
    pub rolls_needed: u32,

    /// 浪費直線長度
    pub waste_length: Decimal,

    /// 浪費比例（完整精度，供下游運算）
    pub waste_percentage: Decimal,

    /// 接縫數量 = max(0, 裁切數 − 1)
    pub seam_count: u32,
}

impl EstimateResult {
    /// 顯示用浪費比例（取整到最接近的百分點）
    pub fn waste_percentage_display(&self) -> u32 {
        (self.waste_percentage * Decimal::ONE_HUNDRED)
            .round()
            .to_u32()
            .unwrap_or(0)
    }
}

/// 推導指標計算器
///
/// 每個額外的實體裁切都需要一道接縫與相鄰片材相接，
/// 接縫數不考慮幾何相鄰性（引擎刻意不做此改良）。
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// 依當前裁切清單與裝箱結果重新計算推導指標
    pub fn calculate(
        cuts: &[Cut],
        requested_area: Decimal,
        packing: &PackingResult,
        spec: &RollSpec,
    ) -> EstimateResult {
        let seam_count = cuts.len().saturating_sub(1) as u32;

        EstimateResult {
            requested_area,
            realized_area: cut::total_area(cuts, spec),
            total_linear_length: cut::total_linear_length(cuts),
            rolls_needed: packing.rolls_needed,
            waste_length: packing.waste_length,
            waste_percentage: packing.waste_percentage,
            seam_count,
        }
    }
}
