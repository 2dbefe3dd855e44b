use serde::{Deserialize, Serialize};

use crate::domain::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub license_plate: String,
    pub vin: String,
    pub color: String,
    /// Customer name; not linked to a customer record
    pub owner: String,
    #[serde(default)]
    pub last_service: Option<String>,
    #[serde(default)]
    pub total_services: u32,
}

impl Vehicle {
    /// "Toyota Camry 2022"
    pub fn title(&self) -> String {
        format!("{} {} {}", self.make, self.model, self.year)
    }
}

impl Resource for Vehicle {
    fn collection_name() -> &'static str {
        "vehicles"
    }

    fn list_name() -> &'static str {
        "Vehicles"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
