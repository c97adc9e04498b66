pub mod dir;
pub mod eligible_set;
pub mod errors;
pub mod frames;
