//! Business records served by the garage REST backend.
//!
//! Field names follow the backend's camelCase JSON.

pub mod a101_customer;
pub mod a102_vehicle;
pub mod a103_job_card;
pub mod a104_inventory_item;
pub mod a105_invoice;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Record listed under `/api/{collection_name}`.
pub trait Resource: Serialize + DeserializeOwned + Clone + 'static {
    fn collection_name() -> &'static str;

    /// Heading of the list in the UI
    fn list_name() -> &'static str;

    fn id(&self) -> &str;
}
