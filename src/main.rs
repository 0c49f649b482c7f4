//! BMI & Calorie QuickCheck
//!
//! An MCP server for BMI and daily calorie estimates.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod calculator;
mod mcp;
mod tools;

use calculator::UnitSystem;
use mcp::QuickCheckService;

/// Get the default unit system from environment or use metric
fn get_default_units() -> UnitSystem {
    match std::env::var("QUICKCHECK_DEFAULT_UNITS") {
        Ok(value) => UnitSystem::from_str(&value).unwrap_or_else(|| {
            tracing::warn!(value = %value, "Unrecognized QUICKCHECK_DEFAULT_UNITS, using metric");
            UnitSystem::Metric
        }),
        Err(_) => UnitSystem::Metric,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bmi_quickcheck=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let default_units = get_default_units();
    tracing::info!(unit_system = default_units.as_str(), "Default unit system");

    let service = QuickCheckService::new(default_units);

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
