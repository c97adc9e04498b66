pub mod document;
pub mod error;
pub mod frame;
pub mod operator;
pub mod report;
pub mod verdict;
pub mod version;
