//! 後院草皮估算示例

use rust_decimal::Decimal;
use turf::{
    Accessory, AccessoryCatalog, AccessoryKind, CoverageRules, RollSpec, TurfCategory,
    TurfEstimator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 後院草皮估算示例 ===\n");

    // 配件目錄（實際來自商店目錄服務）
    let catalog = AccessoryCatalog::new()
        .with_accessory(Accessory::new("silica-infill", AccessoryKind::Infill, 2499))
        .with_accessory(Accessory::new("zeofill-infill", AccessoryKind::PetInfill, 3499))
        .with_accessory(Accessory::new("weed-barrier", AccessoryKind::WeedBarrier, 4999))
        .with_accessory(Accessory::new("turf-nails", AccessoryKind::SeamNails, 1999))
        .with_accessory(Accessory::new("gopher-wire", AccessoryKind::GopherWire, 8999))
        .with_accessory(Accessory::new("seam-tape", AccessoryKind::SeamTape, 1299));

    let estimator = TurfEstimator::new(RollSpec::default(), CoverageRules::default(), catalog)?;

    // 2200 平方呎的寵物草皮，單價 $3.99/平方呎
    let estimate = estimator.estimate_area(Decimal::from(2200), TurfCategory::Pet, 399)?;

    println!("裁切清單:");
    for cut in &estimate.cuts {
        println!("  - 長度 {} 呎（佔滿 15 呎卷寬）", cut.length);
    }

    println!("\n估算指標:");
    println!("  需求面積: {} 平方呎", estimate.result.requested_area);
    println!("  實際面積: {} 平方呎", estimate.result.realized_area);
    println!("  所需卷數: {}", estimate.result.rolls_needed);
    println!(
        "  浪費: {} 呎（{}%）",
        estimate.result.waste_length,
        estimate.result.waste_percentage_display()
    );
    println!("  接縫數: {}", estimate.result.seam_count);

    println!("\n配件建議:");
    for item in &estimate.supplies {
        println!(
            "  - {} × {}（單價 {} 分）",
            item.accessory.handle,
            item.effective_quantity(),
            item.accessory.unit_price_cents
        );
    }

    println!("\n價格明細:");
    println!("  草皮小計: {} 分", estimate.pricing.turf_subtotal_cents);
    println!("  配件小計: {} 分", estimate.pricing.supplies_subtotal_cents);
    println!("  總計: {} 分", estimate.pricing.grand_total_cents);

    println!("\n完整結果 (JSON):");
    println!("{}", serde_json::to_string_pretty(&estimate.result)?);

    Ok(())
}
