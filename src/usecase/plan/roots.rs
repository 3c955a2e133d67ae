use crate::domain::error::ConfigError;
use crate::domain::graph::RouteGraph;
use crate::domain::model::{AirportCode, NewRoute};
use crate::domain::traits::RepresentativePicker;

/// Scans the condensed graph for rootless aggregates and suggests one new
/// route from `start` into each. Read-only; the scan order is arena order,
/// so the result is deterministic for a deterministic picker.
pub fn find_new_routes(
    graph: &RouteGraph,
    start: &AirportCode,
    picker: &dyn RepresentativePicker,
) -> Result<Vec<NewRoute>, ConfigError> {
    let Some(start_node) = graph.handle_of(start) else {
        return Err(ConfigError::UnknownStart(start.clone()));
    };

    let mut routes = Vec::new();
    for h in graph.live_handles() {
        // The start's own aggregate is reachable by definition; a route into
        // it would never break reachability when removed.
        if h == start_node {
            continue;
        }
        let node = &graph.nodes[h.0];
        if !node.heads.is_empty() {
            continue;
        }
        if let Some(representative) = picker.pick(&node.airports) {
            routes.push(NewRoute {
                from: start.clone(),
                to: representative.clone(),
            });
        }
    }

    Ok(routes)
}
