//! 配件明細模型

use serde::{Deserialize, Serialize};

use crate::accessory::Accessory;

/// 配件建議明細
///
/// `recommended_quantity` 由覆蓋率規則推導；使用者可覆寫數量或取消選購，
/// 選購中的明細其有效數量恆為整數且至少為 1。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyLineItem {
    /// 對應的目錄配件
    pub accessory: Accessory,

    /// 建議數量（推導值）
    pub recommended_quantity: u32,

    /// 使用者覆寫數量
    pub user_quantity: Option<u32>,

    /// 是否選購
    pub selected: bool,
}

impl SupplyLineItem {
    /// 創建新的配件明細（預設選購、無覆寫）
    pub fn new(accessory: Accessory, recommended_quantity: u32) -> Self {
        Self {
            accessory,
            recommended_quantity,
            user_quantity: None,
            selected: true,
        }
    }

    /// 建構器模式：設置使用者覆寫數量（至少為 1）
    pub fn with_user_quantity(mut self, quantity: u32) -> Self {
        self.user_quantity = Some(quantity.max(1));
        self
    }

    /// 建構器模式：設置選購狀態
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// 有效數量 = 使用者覆寫 ?? 建議數量，選購時至少為 1
    pub fn effective_quantity(&self) -> u32 {
        let quantity = self.user_quantity.unwrap_or(self.recommended_quantity);
        if self.selected {
            quantity.max(1)
        } else {
            quantity
        }
    }

    /// 明細小計（分）；未選購時為 0
    pub fn subtotal_cents(&self) -> i64 {
        if self.selected {
            self.accessory.unit_price_cents * i64::from(self.effective_quantity())
        } else {
            0
        }
    }
}
