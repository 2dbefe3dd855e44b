use serde::{Deserialize, Serialize};

use crate::domain::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    pub min_stock: u32,
    pub unit_price: f64,
    pub supplier: String,
    pub last_updated: String,
}

impl InventoryItem {
    /// At or below the reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

impl Resource for InventoryItem {
    fn collection_name() -> &'static str {
        "inventory"
    }

    fn list_name() -> &'static str {
        "Inventory"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
