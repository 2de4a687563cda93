//! 卷材裝箱計算

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use turf_core::{cut, Cut, RollSpec};

/// 單卷分配明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedRoll {
    /// 分配到此卷的裁切ID（依分配順序）
    pub cut_ids: Vec<Uuid>,

    /// 剩餘可用長度
    pub remaining_capacity: Decimal,
}

/// 裝箱計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingResult {
    /// 所需卷數
    pub rolls_needed: u32,

    /// 浪費直線長度 = 卷數 × 卷長 − 總裁切長度
    pub waste_length: Decimal,

    /// 浪費比例（完整精度，0 到 1）
    pub waste_percentage: Decimal,

    /// 各卷的分配明細
    pub rolls: Vec<PackedRoll>,
}

impl PackingResult {
    /// 顯示用浪費比例（取整到最接近的百分點）
    pub fn waste_percentage_display(&self) -> u32 {
        (self.waste_percentage * Decimal::ONE_HUNDRED)
            .round()
            .to_u32()
            .unwrap_or(0)
    }
}

/// 卷材裝箱計算器
///
/// 精確裝箱為 NP-hard，此處採用首次適應遞減（FFD）啟發式：
/// 結果最多為最優卷數的約 11/9 倍，且對相同輸入具決定性。
pub struct RollPacker;

impl RollPacker {
    /// 首次適應遞減裝箱
    ///
    /// 裁切先以長度遞減排序（穩定排序，等長裁切維持原相對順序，
    /// 排序在本地副本上進行，不影響顯示順序），再依序放入
    /// 第一個剩餘容量足夠的卷；都放不下則開新卷。
    pub fn pack(cuts: &[Cut], spec: &RollSpec) -> PackingResult {
        let mut sorted: Vec<&Cut> = cuts.iter().collect();
        sorted.sort_by(|a, b| b.length.cmp(&a.length));

        let mut rolls: Vec<PackedRoll> = Vec::new();

        for cut in sorted {
            match rolls
                .iter()
                .position(|roll| roll.remaining_capacity >= cut.length)
            {
                Some(index) => {
                    rolls[index].cut_ids.push(cut.id);
                    rolls[index].remaining_capacity -= cut.length;
                }
                None => rolls.push(PackedRoll {
                    cut_ids: vec![cut.id],
                    remaining_capacity: spec.max_cut_length - cut.length,
                }),
            }
        }

        let rolls_needed = (rolls.len() as u32).max(1);
        let total_linear = cut::total_linear_length(cuts);
        let capacity = Decimal::from(rolls_needed) * spec.max_cut_length;
        let waste_length = capacity - total_linear;
        let waste_percentage = if capacity > Decimal::ZERO {
            waste_length / capacity
        } else {
            Decimal::ZERO
        };

        PackingResult {
            rolls_needed,
            waste_length,
            waste_percentage,
            rolls,
        }
    }
}
