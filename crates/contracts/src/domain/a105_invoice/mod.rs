pub mod aggregate;
pub mod summary;
pub mod totals;
