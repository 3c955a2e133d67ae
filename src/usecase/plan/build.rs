use crate::domain::error::ValidationError;
use crate::domain::graph::RouteGraph;
use crate::domain::model::{Airport, Route};
use crate::usecase::stats::PlanStats;

/// Builds the directed route graph: one singleton node per airport, one
/// edge per consecutive route pair.
pub fn build_graph(
    airports: &[Airport],
    routes: &[Route],
    stats: &mut PlanStats,
) -> Result<RouteGraph, ValidationError> {
    let mut graph = RouteGraph::default();

    // Register every airport up front so isolated airports still form
    // singleton nodes and take part in the rootless scan later.
    for airport in airports {
        if graph.handle_of(&airport.code).is_some() {
            return Err(ValidationError::DuplicateAirport(airport.code.clone()));
        }
        graph.get_or_create(&airport.code);
        stats.airports_seen += 1;
    }

    for route in routes {
        if route.airports.len() < 2 {
            return Err(ValidationError::RouteTooShort(route.airports.len()));
        }
        for code in route.airports.iter() {
            if graph.handle_of(code).is_none() {
                return Err(ValidationError::UnknownAirport(code.clone()));
            }
        }

        for (u, v) in route.legs() {
            if u == v {
                // An airport routed to itself must never surface as a cycle
                // to the condenser.
                stats.self_loops_dropped += 1;
                continue;
            }
            let from = graph.get_or_create(u);
            let to = graph.get_or_create(v);
            if graph.add_edge(from, to) {
                stats.edges_added += 1;
            }
        }
        stats.routes_seen += 1;
    }

    Ok(graph)
}
