//! 價格組合

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use turf_core::SupplyLineItem;

/// 價格明細（金額一律以分為單位的整數運算，避免浮點漂移）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// 草皮小計（分）
    pub turf_subtotal_cents: i64,

    /// 配件小計（分）
    pub supplies_subtotal_cents: i64,

    /// 總計（分）
    pub grand_total_cents: i64,
}

/// 價格組合計算器
pub struct PricingComposer;

impl PricingComposer {
    /// 組合草皮與配件總價
    ///
    /// 草皮小計以實際裁切面積計價（顧客為實際裁下的材料付費，
    /// 而非僅為其輸入的需求面積付費）。
    pub fn compose(
        realized_area: Decimal,
        price_per_area_cents: i64,
        supplies: &[SupplyLineItem],
    ) -> PriceBreakdown {
        let turf_subtotal_cents = (realized_area * Decimal::from(price_per_area_cents))
            .round()
            .to_i64()
            .unwrap_or(0);

        let supplies_subtotal_cents: i64 = supplies.iter().map(|item| item.subtotal_cents()).sum();

        PriceBreakdown {
            turf_subtotal_cents,
            supplies_subtotal_cents,
            grand_total_cents: turf_subtotal_cents + supplies_subtotal_cents,
        }
    }
}
