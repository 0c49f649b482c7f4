//! BMI & Calorie QuickCheck Library
//!
//! BMI and daily calorie calculation, plus the MCP tools that expose it.

pub mod build_info;
pub mod calculator;
pub mod mcp;
pub mod tools;
