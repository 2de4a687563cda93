//! 裁切模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::RollSpec;

/// 單一裁切（自卷材上取下的一段長度，佔滿整個卷寬）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    /// 裁切ID（穩定識別，供前端列表比對）
    pub id: Uuid,

    /// 裁切長度（長度單位）
    pub length: Decimal,
}

impl Cut {
    /// 創建新的裁切
    pub fn new(length: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            length,
        }
    }

    /// 創建裁切並將長度收斂到規格範圍
    pub fn clamped(length: Decimal, spec: &RollSpec) -> Self {
        Self::new(spec.clamp_length(length))
    }

    /// 裁切面積 = 長度 × 卷寬
    pub fn area(&self, spec: &RollSpec) -> Decimal {
        self.length * spec.width
    }

    /// 檢查長度是否在規格範圍內
    pub fn is_within_bounds(&self, spec: &RollSpec) -> bool {
        self.length >= spec.min_cut_length && self.length <= spec.max_cut_length
    }
}

/// 清單總直線長度
pub fn total_linear_length(cuts: &[Cut]) -> Decimal {
    cuts.iter().map(|c| c.length).sum()
}

/// 清單隱含總面積 = 總直線長度 × 卷寬
pub fn total_area(cuts: &[Cut], spec: &RollSpec) -> Decimal {
    total_linear_length(cuts) * spec.width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cut() {
        let spec = RollSpec::default();
        let cut = Cut::new(Decimal::from(47));

        assert_eq!(cut.length, Decimal::from(47));
        assert_eq!(cut.area(&spec), Decimal::from(705));
        assert!(cut.is_within_bounds(&spec));
    }

    #[test]
    fn test_clamped_cut() {
        let spec = RollSpec::default();

        // 過短收斂到最小長度
        let short = Cut::clamped(Decimal::from(3), &spec);
        assert_eq!(short.length, Decimal::from(10));

        // 過長收斂到最大長度
        let long = Cut::clamped(Decimal::from(150), &spec);
        assert_eq!(long.length, Decimal::from(100));
    }

    #[test]
    fn test_cut_identity_is_stable() {
        let cut = Cut::new(Decimal::from(20));
        let cloned = cut.clone();

        // 複製後識別碼不變
        assert_eq!(cut.id, cloned.id);
        // 新建的裁切有新的識別碼
        assert_ne!(cut.id, Cut::new(Decimal::from(20)).id);
    }

    #[test]
    fn test_totals() {
        let spec = RollSpec::default();
        let cuts = vec![Cut::new(Decimal::from(100)), Cut::new(Decimal::from(47))];

        assert_eq!(total_linear_length(&cuts), Decimal::from(147));
        assert_eq!(total_area(&cuts, &spec), Decimal::from(2205));
    }

    #[test]
    fn test_cut_serialization() {
        let cut = Cut::new(Decimal::from(47));
        let json = serde_json::to_string(&cut).unwrap();
        let parsed: Cut = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, cut.id);
        assert_eq!(parsed.length, cut.length);
    }
}
