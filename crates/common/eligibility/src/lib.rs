pub mod frames;
pub mod window;

pub use window::{EligibilityWindow, OperatorProgress, evaluate_eligibility_window};
