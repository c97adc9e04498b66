pub mod cli;
pub mod reports;
pub mod startup_message;
