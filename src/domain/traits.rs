use crate::domain::graph::{CondenseSummary, RouteGraph};
use crate::domain::model::AirportCode;
use std::collections::BTreeSet;

/// Collapses every cycle of the graph into a single aggregate node,
/// in place, until the graph is a DAG.
pub trait CycleCondenser {
    fn condense(&self, graph: &mut RouteGraph) -> CondenseSummary;
}

/// Picks the representative airport of a rootless aggregate. Any member is
/// an equally valid target; policies only pin which one.
pub trait RepresentativePicker {
    fn pick<'a>(&self, airports: &'a BTreeSet<AirportCode>) -> Option<&'a AirportCode>;
}
