//! 配件目錄模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 草皮用途類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurfCategory {
    /// 寵物草皮
    Pet,
    /// 景觀草皮
    Landscape,
    /// 推桿果嶺
    Putting,
}

impl TurfCategory {
    /// 檢查是否為寵物草皮（影響填充砂款式）
    pub fn is_pet(&self) -> bool {
        *self == TurfCategory::Pet
    }
}

/// 配件類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessoryKind {
    /// 標準填充砂
    Infill,
    /// 除臭填充砂（寵物草皮用）
    PetInfill,
    /// 防草布
    WeedBarrier,
    /// 邊緣/接縫固定釘
    SeamNails,
    /// 防鼠網
    GopherWire,
    /// 接縫膠帶
    SeamTape,
}

/// 配件（外部目錄資料，引擎只讀不寫）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    /// 配件ID
    pub id: Uuid,

    /// 目錄識別碼
    pub handle: String,

    /// 配件類型
    pub kind: AccessoryKind,

    /// 單價（分）
    pub unit_price_cents: i64,
}

impl Accessory {
    /// 創建新的配件
    pub fn new(handle: impl Into<String>, kind: AccessoryKind, unit_price_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            handle: handle.into(),
            kind,
            unit_price_cents,
        }
    }
}

/// 配件目錄
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessoryCatalog {
    accessories: Vec<Accessory>,
}

impl AccessoryCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：加入配件
    pub fn with_accessory(mut self, accessory: Accessory) -> Self {
        self.accessories.push(accessory);
        self
    }

    /// 加入配件
    pub fn add(&mut self, accessory: Accessory) {
        self.accessories.push(accessory);
    }

    /// 依類型查找配件
    pub fn find(&self, kind: AccessoryKind) -> Option<&Accessory> {
        self.accessories.iter().find(|a| a.kind == kind)
    }

    /// 目錄配件數
    pub fn len(&self) -> usize {
        self.accessories.len()
    }

    /// 檢查目錄是否為空
    pub fn is_empty(&self) -> bool {
        self.accessories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_infill_variant() {
        assert!(TurfCategory::Pet.is_pet());
        assert!(!TurfCategory::Landscape.is_pet());
        assert!(!TurfCategory::Putting.is_pet());
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = AccessoryCatalog::new()
            .with_accessory(Accessory::new("silica-infill", AccessoryKind::Infill, 2499))
            .with_accessory(Accessory::new("seam-tape-15ft", AccessoryKind::SeamTape, 1299));

        assert_eq!(catalog.len(), 2);

        let infill = catalog.find(AccessoryKind::Infill).unwrap();
        assert_eq!(infill.handle, "silica-infill");
        assert_eq!(infill.unit_price_cents, 2499);

        assert!(catalog.find(AccessoryKind::GopherWire).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = AccessoryCatalog::new();

        assert!(catalog.is_empty());
        assert!(catalog.find(AccessoryKind::SeamTape).is_none());
    }
}
