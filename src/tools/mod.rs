//! QuickCheck Tools module
//!
//! MCP tool implementations for the BMI & Calorie QuickCheck.

pub mod calculate;
pub mod session;
pub mod status;
