//! Existence controls and the results they produce.

mod control_result;
mod existence_control;
mod outcome;

pub use control_result::ControlResult;
pub use existence_control::{AKS_CONTROL_ID, AKS_CONTROL_TITLE, DEFAULT_TIMEOUT, ExistenceControl};
pub use outcome::Outcome;
