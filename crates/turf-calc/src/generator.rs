//! 裁切清單生成

use rust_decimal::Decimal;
use turf_core::{Cut, RollSpec};

/// 裁切清單生成器
pub struct CutGenerator;

impl CutGenerator {
    /// 依目標面積生成裁切清單
    ///
    /// 目標面積先收斂到最小訂購面積，再換算為所需直線長度
    /// （無條件進位到整數單位），然後依序切出
    /// `min(剩餘長度, 最大裁切長度)` 的片段。
    ///
    /// 切出至少一段後，若剩餘長度不足最小裁切長度，該尾段直接捨棄
    /// （視為已被既有餘裕吸收），因此實際面積可能略低於需求面積；
    /// 缺口必定小於一段最小裁切的面積。
    pub fn generate(target_area: Decimal, spec: &RollSpec) -> Vec<Cut> {
        // 訂單面積下限：一段最小裁切
        let area = target_area.max(spec.minimum_order_area());

        // 所需直線長度；收斂後必不低於最小裁切長度
        let mut remaining = (area / spec.width).ceil();

        let mut cuts = Vec::new();

        while remaining >= spec.min_cut_length {
            let length = remaining.min(spec.max_cut_length);
            cuts.push(Cut::new(length));
            remaining -= length;
        }

        cuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use turf_core::cut;

    #[rstest]
    #[case(150, vec![10])] // 剛好最小訂購面積
    #[case(1500, vec![100])] // 剛好一整卷
    #[case(2200, vec![100, 47])] // ceil(2200/15) = 147
    #[case(3000, vec![100, 100])]
    #[case(1650, vec![100, 10])] // 110 直線單位，尾段剛好最小長度
    fn test_generate_scenarios(#[case] area: u32, #[case] expected: Vec<u32>) {
        let spec = RollSpec::default();
        let cuts = CutGenerator::generate(Decimal::from(area), &spec);

        let lengths: Vec<Decimal> = cuts.iter().map(|c| c.length).collect();
        let expected: Vec<Decimal> = expected.into_iter().map(Decimal::from).collect();
        assert_eq!(lengths, expected);
    }

    #[test]
    fn test_tiny_area_floored_to_minimum() {
        let spec = RollSpec::default();
        let cuts = CutGenerator::generate(Decimal::from(1), &spec);

        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].length, Decimal::from(10));
    }

    #[test]
    fn test_remainder_below_minimum_is_dropped() {
        let spec = RollSpec::default();

        // 1575 平方單位 → 105 直線單位 → 一段 100，剩 5 捨棄
        let cuts = CutGenerator::generate(Decimal::from(1575), &spec);

        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].length, Decimal::from(100));

        // 實際面積低於需求面積，但缺口小於最小裁切面積（150）
        let realized = cut::total_area(&cuts, &spec);
        assert_eq!(realized, Decimal::from(1500));
        assert!(Decimal::from(1575) - realized < spec.minimum_order_area());
    }

    #[test]
    fn test_fractional_area_rounds_up_linear() {
        let spec = RollSpec::default();

        // ceil(2203/15) = 147，與 2200 相同
        let cuts = CutGenerator::generate(Decimal::from(2203), &spec);
        let lengths: Vec<Decimal> = cuts.iter().map(|c| c.length).collect();

        assert_eq!(lengths, vec![Decimal::from(100), Decimal::from(47)]);
    }

    #[test]
    fn test_all_cuts_within_bounds() {
        let spec = RollSpec::default();

        for area in [150u32, 999, 1500, 2200, 4321, 12_000] {
            let cuts = CutGenerator::generate(Decimal::from(area), &spec);

            assert!(!cuts.is_empty());
            for cut in &cuts {
                assert!(cut.is_within_bounds(&spec), "面積 {} 產生越界裁切", area);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_generated_cuts_cover_request_within_tolerance(area in 1u32..100_000) {
            let spec = RollSpec::default();
            let cuts = CutGenerator::generate(Decimal::from(area), &spec);

            prop_assert!(!cuts.is_empty());
            for cut in &cuts {
                prop_assert!(cut.is_within_bounds(&spec));
            }

            // 實際面積一般不低於需求面積；捨棄尾段時的缺口
            // 必定小於一段最小裁切的面積
            let requested = Decimal::from(area).max(spec.minimum_order_area());
            let realized = cut::total_area(&cuts, &spec);
            prop_assert!(realized > requested - spec.minimum_order_area());
        }
    }
}
