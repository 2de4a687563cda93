//! 估算主計算器

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use turf_core::{cut, AccessoryCatalog, CoverageRules, Cut, RollSpec, SupplyLineItem, TurfCategory};

use crate::generator::CutGenerator;
use crate::metrics::{EstimateResult, MetricsCalculator};
use crate::packing::{PackingResult, RollPacker};
use crate::pricing::{PriceBreakdown, PricingComposer};
use crate::supplies::SupplyCalculator;

/// 草皮估算器
///
/// 持有卷材規格、覆蓋率規則與配件目錄，對外提供完整估算管線。
/// 所有計算為同步純函數，估算器本身不含可變狀態，
/// 並行呼叫彼此獨立。
pub struct TurfEstimator {
    /// 卷材規格
    spec: RollSpec,

    /// 配件覆蓋率規則
    rules: CoverageRules,

    /// 配件目錄
    catalog: AccessoryCatalog,
}

/// 完整估算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurfEstimate {
    /// 裁切清單（顯示順序）
    pub cuts: Vec<Cut>,

    /// 推導指標
    pub result: EstimateResult,

    /// 裝箱明細
    pub packing: PackingResult,

    /// 配件建議清單
    pub supplies: Vec<SupplyLineItem>,

    /// 價格明細
    pub pricing: PriceBreakdown,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl TurfEstimator {
    /// 創建新的估算器（規格先行驗證）
    pub fn new(
        spec: RollSpec,
        rules: CoverageRules,
        catalog: AccessoryCatalog,
    ) -> turf_core::Result<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            rules,
            catalog,
        })
    }

    /// 依目標面積執行完整估算
    pub fn estimate_area(
        &self,
        target_area: Decimal,
        category: TurfCategory,
        price_per_area_cents: i64,
    ) -> turf_core::Result<TurfEstimate> {
        tracing::info!("開始估算：目標面積 {}，類別 {:?}", target_area, category);
        let start_time = std::time::Instant::now();

        // Step 1: 生成裁切清單
        tracing::debug!("Step 1: 生成裁切清單");
        let cuts = CutGenerator::generate(target_area, &self.spec);
        let requested_area = target_area.max(self.spec.minimum_order_area());

        self.run_pipeline(cuts, requested_area, category, price_per_area_cents, start_time)
    }

    /// 以手動編輯的裁切清單執行估算
    ///
    /// 不重新生成裁切；需求面積同步為清單的隱含總面積，
    /// 讓下游數字與清單保持一致。
    pub fn estimate_cuts(
        &self,
        cuts: Vec<Cut>,
        category: TurfCategory,
        price_per_area_cents: i64,
    ) -> turf_core::Result<TurfEstimate> {
        tracing::info!("開始估算：手動清單 {} 筆裁切", cuts.len());
        let start_time = std::time::Instant::now();

        let requested_area = cut::total_area(&cuts, &self.spec);

        self.run_pipeline(cuts, requested_area, category, price_per_area_cents, start_time)
    }

    fn run_pipeline(
        &self,
        cuts: Vec<Cut>,
        requested_area: Decimal,
        category: TurfCategory,
        price_per_area_cents: i64,
        start_time: std::time::Instant,
    ) -> turf_core::Result<TurfEstimate> {
        // Step 2: 裝箱
        tracing::debug!("Step 2: 裝箱，裁切 {} 筆", cuts.len());
        let packing = RollPacker::pack(&cuts, &self.spec);
        tracing::debug!("所需卷數: {}", packing.rolls_needed);

        // Step 3: 推導指標
        tracing::debug!("Step 3: 推導指標");
        let result = MetricsCalculator::calculate(&cuts, requested_area, &packing, &self.spec);

        // Step 4: 配件數量
        tracing::debug!("Step 4: 配件數量");
        let supplies = SupplyCalculator::derive(
            result.requested_area,
            result.realized_area,
            result.seam_count,
            category,
            &self.rules,
            &self.catalog,
        )?;
        tracing::debug!("配件明細: {} 筆", supplies.len());

        // Step 5: 價格組合
        tracing::debug!("Step 5: 價格組合");
        let pricing = PricingComposer::compose(result.realized_area, price_per_area_cents, &supplies);

        tracing::info!(
            "估算完成，耗時 {:?}，總計 {} 分",
            start_time.elapsed(),
            pricing.grand_total_cents
        );

        Ok(TurfEstimate {
            cuts,
            result,
            packing,
            supplies,
            pricing,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        })
    }

    /// 獲取卷材規格引用
    pub fn spec(&self) -> &RollSpec {
        &self.spec
    }

    /// 獲取覆蓋率規則引用
    pub fn rules(&self) -> &CoverageRules {
        &self.rules
    }

    /// 獲取配件目錄引用
    pub fn catalog(&self) -> &AccessoryCatalog {
        &self.catalog
    }
}
