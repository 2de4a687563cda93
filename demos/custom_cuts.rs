//! 手動編輯裁切清單示例

use rust_decimal::Decimal;
use turf::{
    Accessory, AccessoryCatalog, AccessoryKind, CoverageRules, CutPlan, RollSpec, TurfCategory,
    TurfEstimator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 手動編輯裁切清單示例 ===\n");

    let catalog = AccessoryCatalog::new()
        .with_accessory(Accessory::new("silica-infill", AccessoryKind::Infill, 2499))
        .with_accessory(Accessory::new("weed-barrier", AccessoryKind::WeedBarrier, 4999))
        .with_accessory(Accessory::new("turf-nails", AccessoryKind::SeamNails, 1999))
        .with_accessory(Accessory::new("gopher-wire", AccessoryKind::GopherWire, 8999))
        .with_accessory(Accessory::new("seam-tape", AccessoryKind::SeamTape, 1299));

    let estimator =
        TurfEstimator::new(RollSpec::default(), CoverageRules::default(), catalog)?;

    // 從 1000 平方呎自動生成
    let mut plan = CutPlan::from_area(Decimal::from(1000), RollSpec::default());
    println!("自動生成（{} 平方呎）:", plan.requested_area());
    for cut in plan.cuts() {
        println!("  - 長度 {} 呎", cut.length);
    }

    // 顧客的院子有兩條走道：改成三段各 25 呎
    let first = plan.cuts()[0].id;
    plan.edit_cut(first, Decimal::from(25));
    plan.add_cut(Decimal::from(25));
    plan.add_cut(Decimal::from(25));

    println!("\n手動編輯後（手動模式: {}）:", plan.is_custom());
    for cut in plan.cuts() {
        println!("  - 長度 {} 呎", cut.length);
    }
    println!("需求面積已同步為 {} 平方呎", plan.requested_area());

    // 以編輯後的清單重新估算
    let estimate =
        estimator.estimate_cuts(plan.cuts().to_vec(), TurfCategory::Landscape, 299)?;

    println!("\n估算結果:");
    println!("  所需卷數: {}", estimate.result.rolls_needed);
    println!(
        "  浪費: {} 呎（{}%）",
        estimate.result.waste_length,
        estimate.result.waste_percentage_display()
    );
    println!("  接縫數: {}", estimate.result.seam_count);
    println!("  總計: {} 分", estimate.pricing.grand_total_cents);

    Ok(())
}
