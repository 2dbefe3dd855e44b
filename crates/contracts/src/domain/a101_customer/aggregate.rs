use serde::{Deserialize, Serialize};

use crate::domain::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub vehicle_count: u32,
    #[serde(default)]
    pub total_spent: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Resource for Customer {
    fn collection_name() -> &'static str {
        "customers"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
