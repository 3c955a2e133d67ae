mod build;
mod roots;

use crate::domain::model::{Airport, AirportCode, Plane, Route};
use crate::domain::traits::{CycleCondenser, RepresentativePicker};
use crate::infrastructure::serde_json_adapter::{NetworkFileDto, NewRouteDto, PlanFileDto};
use crate::usecase::event::AppEvent;
use crate::usecase::stats::PlanStats;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Runs the full planning pipeline: build the route graph, condense its
/// cycles, scan for rootless aggregates, and assemble the suggested routes
/// with distances (and flight times when a plane is configured).
pub async fn plan_network(
    input: NetworkFileDto,
    condenser: &dyn CycleCondenser,
    picker: &dyn RepresentativePicker,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(PlanFileDto, PlanStats)> {
    let mut stats = PlanStats::default();

    let airports: Vec<Airport> = input
        .airports
        .iter()
        .map(|a| Airport {
            code: AirportCode::new(a.code.clone()),
            latitude: a.latitude,
            longitude: a.longitude,
        })
        .collect();
    let routes: Vec<Route> = input
        .routes
        .iter()
        .map(|codes| Route::new(codes.iter().map(|c| AirportCode::new(c.clone())).collect()))
        .collect();
    let start = input
        .start
        .clone()
        .map(AirportCode::new)
        .ok_or_else(|| anyhow!("network file does not name a starting airport"))?;
    let plane = input.plane.as_ref().map(|p| Plane {
        speed_kmh: p.speed_kmh,
    });

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "build_graph".into(),
        },
    )
    .await;
    let mut graph = build::build_graph(&airports, &routes, &mut stats)?;
    emit(
        &sink,
        AppEvent::GraphBuilt {
            airports: stats.airports_seen,
            nodes: graph.live_node_count(),
            edges: graph.edge_count(),
            self_loops_dropped: stats.self_loops_dropped,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "build_graph".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "condense".into(),
        },
    )
    .await;
    let summary = condenser.condense(&mut graph);
    for merged in summary.merges.iter() {
        emit(
            &sink,
            AppEvent::CycleCondensed {
                airports: merged.airports.iter().map(|c| c.0.clone()).collect(),
                absorbed: merged.absorbed,
            },
        )
        .await;
    }
    stats.cycles_merged = summary.merges.len();
    stats.nodes_after_condense = summary.live_nodes;
    emit(
        &sink,
        AppEvent::CondensationFinished {
            live_nodes: summary.live_nodes,
            merges: summary.merges.len(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "condense".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "find_roots".into(),
        },
    )
    .await;
    let new_routes = roots::find_new_routes(&graph, &start, picker)?;
    stats.new_routes = new_routes.len();

    let by_code: HashMap<&AirportCode, &Airport> =
        airports.iter().map(|a| (&a.code, a)).collect();

    let mut route_dtos = Vec::with_capacity(new_routes.len());
    for suggested in new_routes.iter() {
        let aggregate: Vec<String> = graph
            .handle_of(&suggested.to)
            .map(|h| {
                graph.nodes[h.0]
                    .airports
                    .iter()
                    .map(|c| c.0.clone())
                    .collect()
            })
            .unwrap_or_default();
        emit(
            &sink,
            AppEvent::NewRouteSuggested {
                from: suggested.from.0.clone(),
                to: suggested.to.0.clone(),
                aggregate,
            },
        )
        .await;

        let from_airport = by_code
            .get(&suggested.from)
            .ok_or_else(|| anyhow!("suggested route leaves unknown airport: {}", suggested.from))?;
        let to_airport = by_code
            .get(&suggested.to)
            .ok_or_else(|| anyhow!("suggested route reaches unknown airport: {}", suggested.to))?;
        let distance_km = from_airport.distance_km(to_airport);

        route_dtos.push(NewRouteDto {
            from: suggested.from.0.clone(),
            to: suggested.to.0.clone(),
            distance_km,
            flight_time_hours: plane.map(|p| p.flight_time_hours(distance_km)),
        });
    }
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "find_roots".into(),
        },
    )
    .await;

    let out = PlanFileDto {
        start: start.0.clone(),
        new_routes: route_dtos,
        stats: stats.clone(),
    };
    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((out, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
