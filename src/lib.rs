//! Minimum-new-routes planner for airline networks.
//!
//! Given a set of airports, one-way routes between them and a starting
//! airport, the planner condenses every strongly-connected cluster of the
//! route graph into an aggregate node and suggests one new route per
//! aggregate that no other aggregate can reach.
//!
//! The crate is split into Clean Architecture layers:
//! - domain: pure, synchronous business rules
//! - usecase: orchestration + progress events
//! - infrastructure: serde + async IO + implementations of ports
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
