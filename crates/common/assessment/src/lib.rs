pub mod policy;
pub mod resolution;
