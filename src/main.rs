//! Binary entrypoint.
//!
//! This crate is intentionally split into Clean Architecture layers:
//! - domain: pure, synchronous business rules
//! - usecase: orchestration + progress events
//! - infrastructure: serde + async IO + implementations of ports
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    airline_route_coverage_planner::interface::cli::run().await
}
