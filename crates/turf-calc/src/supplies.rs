//! 配件數量規則

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use turf_core::{
    AccessoryCatalog, AccessoryKind, CoverageRules, EstimateError, SupplyLineItem, TurfCategory,
};

/// 配件數量計算器
///
/// 填充砂以需求面積為基準（顧客實際使用的地面範圍），
/// 結構性配件（防草布、固定釘、防鼠網）以實際裁切面積為基準
/// （鋪設材料必須整面覆蓋，包含進位多出的部分）。
pub struct SupplyCalculator;

impl SupplyCalculator {
    /// 推導配件建議清單
    ///
    /// 數量為零的配件整項省略；接縫膠帶依接縫數計，
    /// 無接縫時不出現在清單中。
    pub fn derive(
        requested_area: Decimal,
        realized_area: Decimal,
        seam_count: u32,
        category: TurfCategory,
        rules: &CoverageRules,
        catalog: &AccessoryCatalog,
    ) -> turf_core::Result<Vec<SupplyLineItem>> {
        let mut items = Vec::new();

        // 填充砂：寵物草皮使用除臭款
        let infill_kind = if category.is_pet() {
            AccessoryKind::PetInfill
        } else {
            AccessoryKind::Infill
        };
        let infill_quantity = Self::coverage_quantity(requested_area, rules.infill_area_per_bag);
        Self::push_item(&mut items, catalog, infill_kind, infill_quantity)?;

        let barrier_quantity =
            Self::coverage_quantity(realized_area, rules.weed_barrier_area_per_roll);
        Self::push_item(&mut items, catalog, AccessoryKind::WeedBarrier, barrier_quantity)?;

        let nails_quantity = Self::coverage_quantity(realized_area, rules.nails_area_per_box);
        Self::push_item(&mut items, catalog, AccessoryKind::SeamNails, nails_quantity)?;

        let wire_quantity =
            Self::coverage_quantity(realized_area, rules.gopher_wire_area_per_roll);
        Self::push_item(&mut items, catalog, AccessoryKind::GopherWire, wire_quantity)?;

        if seam_count > 0 {
            Self::push_item(&mut items, catalog, AccessoryKind::SeamTape, seam_count)?;
        }

        Ok(items)
    }

    /// 覆蓋數量 = ceil(面積 / 單位覆蓋面積)
    fn coverage_quantity(area: Decimal, area_per_unit: Decimal) -> u32 {
        if area_per_unit <= Decimal::ZERO {
            return 0;
        }
        (area / area_per_unit).ceil().to_u32().unwrap_or(0)
    }

    fn push_item(
        items: &mut Vec<SupplyLineItem>,
        catalog: &AccessoryCatalog,
        kind: AccessoryKind,
        quantity: u32,
    ) -> turf_core::Result<()> {
        if quantity == 0 {
            return Ok(());
        }

        let accessory = catalog
            .find(kind)
            .ok_or(EstimateError::AccessoryNotFound(kind))?
            .clone();

        items.push(SupplyLineItem::new(accessory, quantity));
        Ok(())
    }
}
