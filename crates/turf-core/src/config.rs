//! 卷材規格與覆蓋率配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 卷材規格（全程序共用的業務常數）
///
/// 作為顯式配置傳入引擎入口，不藏在模組層級狀態中，
/// 以便用其他卷材幾何測試引擎。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollSpec {
    /// 卷寬（長度單位）
    pub width: Decimal,

    /// 單一裁切的最大長度（即一整卷的長度）
    pub max_cut_length: Decimal,

    /// 單一裁切的最小長度（低於此長度不符合裁切經濟效益）
    pub min_cut_length: Decimal,
}

impl Default for RollSpec {
    fn default() -> Self {
        Self {
            width: Decimal::from(15),
            max_cut_length: Decimal::from(100),
            min_cut_length: Decimal::from(10),
        }
    }
}

impl RollSpec {
    /// 創建新的卷材規格
    pub fn new(width: Decimal, max_cut_length: Decimal, min_cut_length: Decimal) -> Self {
        Self {
            width,
            max_cut_length,
            min_cut_length,
        }
    }

    /// 建構器模式：設置卷寬
    pub fn with_width(mut self, width: Decimal) -> Self {
        self.width = width;
        self
    }

    /// 建構器模式：設置最大裁切長度
    pub fn with_max_cut_length(mut self, max_cut_length: Decimal) -> Self {
        self.max_cut_length = max_cut_length;
        self
    }

    /// 建構器模式：設置最小裁切長度
    pub fn with_min_cut_length(mut self, min_cut_length: Decimal) -> Self {
        self.min_cut_length = min_cut_length;
        self
    }

    /// 驗證規格是否合理
    pub fn validate(&self) -> crate::Result<()> {
        if self.width <= Decimal::ZERO {
            return Err(crate::EstimateError::InvalidRollSpec(format!(
                "卷寬必須為正值: {}",
                self.width
            )));
        }
        if self.min_cut_length <= Decimal::ZERO {
            return Err(crate::EstimateError::InvalidRollSpec(format!(
                "最小裁切長度必須為正值: {}",
                self.min_cut_length
            )));
        }
        if self.min_cut_length > self.max_cut_length {
            return Err(crate::EstimateError::InvalidRollSpec(format!(
                "最小裁切長度 {} 超過最大裁切長度 {}",
                self.min_cut_length, self.max_cut_length
            )));
        }
        Ok(())
    }

    /// 單卷總面積
    pub fn roll_area(&self) -> Decimal {
        self.width * self.max_cut_length
    }

    /// 最小可購買面積（訂單面積下限）
    pub fn minimum_order_area(&self) -> Decimal {
        self.min_cut_length * self.width
    }

    /// 將裁切長度收斂到合法範圍
    pub fn clamp_length(&self, length: Decimal) -> Decimal {
        length
            .max(self.min_cut_length)
            .min(self.max_cut_length)
    }
}

/// 配件覆蓋率規則（業務常數，非推導值）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageRules {
    /// 每袋填充砂的覆蓋面積
    pub infill_area_per_bag: Decimal,

    /// 每卷防草布的覆蓋面積
    pub weed_barrier_area_per_roll: Decimal,

    /// 每盒固定釘的覆蓋面積
    pub nails_area_per_box: Decimal,

    /// 每卷防鼠網的覆蓋面積
    pub gopher_wire_area_per_roll: Decimal,
}

impl Default for CoverageRules {
    fn default() -> Self {
        Self {
            infill_area_per_bag: Decimal::from(50),
            weed_barrier_area_per_roll: Decimal::from(800),
            nails_area_per_box: Decimal::from(800),
            gopher_wire_area_per_roll: Decimal::from(400),
        }
    }
}

impl CoverageRules {
    /// 建構器模式：設置填充砂覆蓋率
    pub fn with_infill_area_per_bag(mut self, area: Decimal) -> Self {
        self.infill_area_per_bag = area;
        self
    }

    /// 建構器模式：設置防草布覆蓋率
    pub fn with_weed_barrier_area_per_roll(mut self, area: Decimal) -> Self {
        self.weed_barrier_area_per_roll = area;
        self
    }

    /// 建構器模式：設置固定釘覆蓋率
    pub fn with_nails_area_per_box(mut self, area: Decimal) -> Self {
        self.nails_area_per_box = area;
        self
    }

    /// 建構器模式：設置防鼠網覆蓋率
    pub fn with_gopher_wire_area_per_roll(mut self, area: Decimal) -> Self {
        self.gopher_wire_area_per_roll = area;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roll_spec() {
        let spec = RollSpec::default();

        assert_eq!(spec.width, Decimal::from(15));
        assert_eq!(spec.max_cut_length, Decimal::from(100));
        assert_eq!(spec.min_cut_length, Decimal::from(10));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_roll_spec_builder() {
        let spec = RollSpec::default()
            .with_width(Decimal::from(12))
            .with_max_cut_length(Decimal::from(80))
            .with_min_cut_length(Decimal::from(5));

        assert_eq!(spec.width, Decimal::from(12));
        assert_eq!(spec.max_cut_length, Decimal::from(80));
        assert_eq!(spec.min_cut_length, Decimal::from(5));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_roll_spec_validation() {
        // 最小長度超過最大長度
        let spec = RollSpec::default().with_min_cut_length(Decimal::from(200));
        assert!(spec.validate().is_err());

        // 卷寬為零
        let spec = RollSpec::default().with_width(Decimal::ZERO);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_derived_areas() {
        let spec = RollSpec::default();

        // 單卷面積 = 15 × 100
        assert_eq!(spec.roll_area(), Decimal::from(1500));
        // 最小訂購面積 = 10 × 15
        assert_eq!(spec.minimum_order_area(), Decimal::from(150));
    }

    #[test]
    fn test_clamp_length() {
        let spec = RollSpec::default();

        assert_eq!(spec.clamp_length(Decimal::from(5)), Decimal::from(10));
        assert_eq!(spec.clamp_length(Decimal::from(47)), Decimal::from(47));
        assert_eq!(spec.clamp_length(Decimal::from(250)), Decimal::from(100));
    }

    #[test]
    fn test_default_coverage_rules() {
        let rules = CoverageRules::default();

        assert_eq!(rules.infill_area_per_bag, Decimal::from(50));
        assert_eq!(rules.weed_barrier_area_per_roll, Decimal::from(800));
        assert_eq!(rules.nails_area_per_box, Decimal::from(800));
        assert_eq!(rules.gopher_wire_area_per_roll, Decimal::from(400));
    }

    #[test]
    fn test_coverage_rules_builder() {
        let rules = CoverageRules::default()
            .with_infill_area_per_bag(Decimal::from(40))
            .with_gopher_wire_area_per_roll(Decimal::from(500));

        assert_eq!(rules.infill_area_per_bag, Decimal::from(40));
        assert_eq!(rules.gopher_wire_area_per_roll, Decimal::from(500));
    }
}
