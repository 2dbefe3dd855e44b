pub mod location;
pub mod policy;
