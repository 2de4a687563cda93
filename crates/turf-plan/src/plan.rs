//! 可編輯裁切計劃

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use turf_calc::CutGenerator;
use turf_core::{cut, Cut, RollSpec};

/// 裁切計劃（呼叫端的響應式狀態）
///
/// 新增/刪除/編輯任一操作都會設置手動模式標記，並將需求面積
/// 同步為清單的隱含總面積；重新輸入面積或明確重設則清除標記
/// 並從頭重新生成清單。清單恆為非空，所有長度恆在規格範圍內。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutPlan {
    /// 卷材規格
    spec: RollSpec,

    /// 裁切清單（插入順序即顯示順序）
    cuts: Vec<Cut>,

    /// 需求面積
    requested_area: Decimal,

    /// 是否為手動編輯模式
    is_custom: bool,
}

impl CutPlan {
    /// 依目標面積創建自動生成的計劃
    pub fn from_area(target_area: Decimal, spec: RollSpec) -> Self {
        let requested_area = target_area.max(spec.minimum_order_area());
        let cuts = CutGenerator::generate(requested_area, &spec);
        Self {
            spec,
            cuts,
            requested_area,
            is_custom: false,
        }
    }

    /// 重新輸入目標面積（回到自動模式並重新生成清單）
    pub fn set_target_area(&mut self, target_area: Decimal) {
        self.requested_area = target_area.max(self.spec.minimum_order_area());
        self.cuts = CutGenerator::generate(self.requested_area, &self.spec);
        self.is_custom = false;
    }

    /// 新增裁切（長度收斂到規格範圍），返回新裁切的ID
    pub fn add_cut(&mut self, length: Decimal) -> Uuid {
        let cut = Cut::clamped(length, &self.spec);
        let id = cut.id;
        self.cuts.push(cut);
        self.mark_custom();
        id
    }

    /// 編輯裁切長度（收斂到規格範圍）；未知ID視為無操作
    pub fn edit_cut(&mut self, id: Uuid, length: Decimal) -> bool {
        match self.cuts.iter().position(|c| c.id == id) {
            Some(index) => {
                self.cuts[index].length = self.spec.clamp_length(length);
                self.mark_custom();
                true
            }
            None => false,
        }
    }

    /// 刪除裁切；僅剩最後一筆時拒絕（清單保持不變）
    pub fn remove_cut(&mut self, id: Uuid) -> bool {
        if self.cuts.len() <= 1 {
            return false;
        }

        let before = self.cuts.len();
        self.cuts.retain(|c| c.id != id);
        if self.cuts.len() == before {
            return false;
        }

        self.mark_custom();
        true
    }

    /// 重設為自動模式（依需求面積重新生成清單）
    pub fn reset_to_automatic(&mut self) {
        self.cuts = CutGenerator::generate(self.requested_area, &self.spec);
        self.is_custom = false;
    }

    /// 設置手動標記並同步需求面積為清單隱含總面積
    fn mark_custom(&mut self) {
        self.is_custom = true;
        self.requested_area = cut::total_area(&self.cuts, &self.spec);
    }

    /// 裁切清單（顯示順序）
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    /// 需求面積
    pub fn requested_area(&self) -> Decimal {
        self.requested_area
    }

    /// 是否為手動編輯模式
    pub fn is_custom(&self) -> bool {
        self.is_custom
    }

    /// 卷材規格
    pub fn spec(&self) -> &RollSpec {
        &self.spec
    }

    /// 清單隱含總面積
    pub fn implied_area(&self) -> Decimal {
        cut::total_area(&self.cuts, &self.spec)
    }
}
