pub mod errors;
pub mod ipfs;
pub mod local;
pub mod retry;
