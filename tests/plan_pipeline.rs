use airline_route_coverage_planner::infrastructure::cycle_condenser::InPlaceDfsCondenser;
use airline_route_coverage_planner::infrastructure::representative::LexicographicPicker;
use airline_route_coverage_planner::infrastructure::serde_json_adapter::{
    AirportDto, NetworkFileDto, PlaneDto,
};
use airline_route_coverage_planner::usecase::event::AppEvent;
use airline_route_coverage_planner::usecase::plan::plan_network;
use std::collections::{BTreeSet, HashMap, VecDeque};
use tokio::sync::mpsc;

fn airport(code: &str) -> AirportDto {
    AirportDto {
        code: code.to_string(),
        latitude: 0.0,
        longitude: 0.0,
        ..AirportDto::default()
    }
}

fn route(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// The 18-airport scenario: two cycles ({SIN, CDG} and {EYW, LHR, SFO, SAN})
/// and exactly three rootless aggregates seen from LGA.
fn hub_scenario() -> NetworkFileDto {
    let airports = [
        "BGI", "CDG", "DEL", "DOH", "DSM", "EWR", "EYW", "HND", "ICN", "JFK", "LGA", "LHR",
        "ORD", "SAN", "SFO", "SIN", "TLV", "BUD",
    ];
    let routes = vec![
        route(&["DSM", "ORD"]),
        route(&["ORD", "BGI"]),
        route(&["BGI", "LGA"]),
        route(&["SIN", "CDG"]),
        route(&["CDG", "SIN"]),
        route(&["CDG", "BUD"]),
        route(&["DEL", "DOH"]),
        route(&["DEL", "CDG"]),
        route(&["TLV", "DEL"]),
        route(&["EWR", "HND"]),
        route(&["HND", "ICN"]),
        route(&["HND", "JFK"]),
        route(&["ICN", "JFK"]),
        route(&["JFK", "LGA"]),
        route(&["EYW", "LHR"]),
        route(&["LHR", "SFO"]),
        route(&["SFO", "SAN"]),
        route(&["SFO", "DSM"]),
        route(&["SAN", "EYW"]),
    ];

    NetworkFileDto {
        airports: airports.iter().map(|c| airport(c)).collect(),
        routes,
        start: Some("LGA".to_string()),
        ..NetworkFileDto::default()
    }
}

/// Airports reachable from `start` over the given directed edges.
fn reachable(edges: &[(String, String)], start: &str) -> BTreeSet<String> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for (u, v) in edges {
        adjacency.entry(u.as_str()).or_default().push(v.as_str());
    }

    let mut seen: BTreeSet<String> = BTreeSet::from([start.to_string()]);
    let mut queue: VecDeque<&str> = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for v in adjacency.get(u).into_iter().flatten() {
            if seen.insert(v.to_string()) {
                queue.push_back(v);
            }
        }
    }
    seen
}

fn input_edges(dto: &NetworkFileDto) -> Vec<(String, String)> {
    let mut edges = Vec::new();
    for r in dto.routes.iter() {
        for pair in r.windows(2) {
            edges.push((pair[0].clone(), pair[1].clone()));
        }
    }
    edges
}

#[tokio::test]
async fn hub_scenario_needs_exactly_three_new_routes() {
    let (plan, stats) = plan_network(
        hub_scenario(),
        &InPlaceDfsCondenser,
        &LexicographicPicker,
        None,
    )
    .await
    .expect("plan");

    assert_eq!(stats.airports_seen, 18);
    assert_eq!(stats.cycles_merged, 2);
    assert_eq!(stats.nodes_after_condense, 14);
    assert_eq!(stats.new_routes, 3);

    let targets: Vec<(&str, &str)> = plan
        .new_routes
        .iter()
        .map(|r| (r.from.as_str(), r.to.as_str()))
        .collect();
    // EYW is the lexicographic pick of the {EYW, LHR, SAN, SFO} aggregate.
    assert_eq!(
        targets,
        vec![("LGA", "EWR"), ("LGA", "EYW"), ("LGA", "TLV")]
    );
}

#[tokio::test]
async fn hub_scenario_emits_cycle_and_route_events() {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(1024);

    plan_network(
        hub_scenario(),
        &InPlaceDfsCondenser,
        &LexicographicPicker,
        Some(tx),
    )
    .await
    .expect("plan");

    let mut condensed: Vec<Vec<String>> = Vec::new();
    let mut suggested: Vec<(String, Vec<String>)> = Vec::new();
    let mut finished = false;
    while let Some(ev) = rx.recv().await {
        match ev {
            AppEvent::CycleCondensed { airports, .. } => condensed.push(airports),
            AppEvent::NewRouteSuggested { to, aggregate, .. } => {
                suggested.push((to, aggregate))
            }
            AppEvent::Finished { .. } => finished = true,
            _ => {}
        }
    }

    assert!(finished);
    assert!(condensed.contains(&vec!["CDG".to_string(), "SIN".to_string()]));
    assert!(condensed.contains(&vec![
        "EYW".to_string(),
        "LHR".to_string(),
        "SAN".to_string(),
        "SFO".to_string(),
    ]));

    let eyw = suggested
        .iter()
        .find(|(to, _)| to == "EYW")
        .expect("EYW route suggested");
    assert_eq!(
        eyw.1,
        vec![
            "EYW".to_string(),
            "LHR".to_string(),
            "SAN".to_string(),
            "SFO".to_string(),
        ]
    );
}

#[tokio::test]
async fn suggested_routes_close_reachability_and_are_minimal() {
    let dto = hub_scenario();
    let (plan, _) = plan_network(
        dto.clone(),
        &InPlaceDfsCondenser,
        &LexicographicPicker,
        None,
    )
    .await
    .expect("plan");

    let all: BTreeSet<String> = dto.airports.iter().map(|a| a.code.clone()).collect();

    // With every suggested route added, the whole network is reachable.
    let mut edges = input_edges(&dto);
    for r in plan.new_routes.iter() {
        edges.push((r.from.clone(), r.to.clone()));
    }
    assert_eq!(reachable(&edges, "LGA"), all);

    // Dropping any single suggested route strands at least one airport.
    for skipped in 0..plan.new_routes.len() {
        let mut edges = input_edges(&dto);
        for (i, r) in plan.new_routes.iter().enumerate() {
            if i != skipped {
                edges.push((r.from.clone(), r.to.clone()));
            }
        }
        assert_ne!(
            reachable(&edges, "LGA"),
            all,
            "route {skipped} is redundant"
        );
    }
}

#[tokio::test]
async fn route_count_is_deterministic_across_runs() {
    for _ in 0..3 {
        let (plan, stats) = plan_network(
            hub_scenario(),
            &InPlaceDfsCondenser,
            &LexicographicPicker,
            None,
        )
        .await
        .expect("plan");
        assert_eq!(stats.new_routes, 3);
        assert_eq!(plan.new_routes.len(), 3);
    }
}

#[tokio::test]
async fn empty_route_list_suggests_one_route_per_other_airport() {
    let dto = NetworkFileDto {
        airports: vec![airport("AAA"), airport("BBB"), airport("CCC")],
        routes: vec![],
        start: Some("AAA".to_string()),
        ..NetworkFileDto::default()
    };

    let (plan, stats) = plan_network(dto, &InPlaceDfsCondenser, &LexicographicPicker, None)
        .await
        .expect("plan");

    assert_eq!(stats.new_routes, 2);
    let targets: Vec<&str> = plan.new_routes.iter().map(|r| r.to.as_str()).collect();
    assert_eq!(targets, vec!["BBB", "CCC"]);
}

#[tokio::test]
async fn self_loop_routes_are_dropped_not_condensed() {
    let dto = NetworkFileDto {
        airports: vec![airport("AAA"), airport("BBB")],
        routes: vec![route(&["AAA", "AAA"]), route(&["AAA", "BBB"])],
        start: Some("AAA".to_string()),
        ..NetworkFileDto::default()
    };

    let (_, stats) = plan_network(dto, &InPlaceDfsCondenser, &LexicographicPicker, None)
        .await
        .expect("plan");

    assert_eq!(stats.self_loops_dropped, 1);
    assert_eq!(stats.cycles_merged, 0);
    assert_eq!(stats.new_routes, 0);
}

#[tokio::test]
async fn plane_adds_flight_time_estimates() {
    let mut dto = NetworkFileDto {
        airports: vec![
            AirportDto {
                code: "LGA".to_string(),
                latitude: 40.7769,
                longitude: -73.8740,
                ..AirportDto::default()
            },
            AirportDto {
                code: "TLV".to_string(),
                latitude: 32.0114,
                longitude: 34.8867,
                ..AirportDto::default()
            },
        ],
        routes: vec![],
        start: Some("LGA".to_string()),
        ..NetworkFileDto::default()
    };
    dto.plane = Some(PlaneDto { speed_kmh: 900.0 });

    let (plan, _) = plan_network(dto, &InPlaceDfsCondenser, &LexicographicPicker, None)
        .await
        .expect("plan");

    assert_eq!(plan.new_routes.len(), 1);
    let leg = &plan.new_routes[0];
    assert!(leg.distance_km > 8000.0 && leg.distance_km < 10000.0, "got {}", leg.distance_km);
    let hours = leg.flight_time_hours.expect("plane configured");
    assert!((hours - leg.distance_km / 900.0).abs() < 1e-9);
}

#[tokio::test]
async fn unknown_route_airport_fails_the_plan() {
    let dto = NetworkFileDto {
        airports: vec![airport("AAA")],
        routes: vec![route(&["AAA", "ZZZ"])],
        start: Some("AAA".to_string()),
        ..NetworkFileDto::default()
    };

    let err = plan_network(dto, &InPlaceDfsCondenser, &LexicographicPicker, None)
        .await
        .unwrap_err()
        .to_string();
    assert!(err.contains("unknown airport"));
}

#[tokio::test]
async fn missing_start_fails_the_plan() {
    let dto = NetworkFileDto {
        airports: vec![airport("AAA")],
        routes: vec![],
        start: None,
        ..NetworkFileDto::default()
    };

    let err = plan_network(dto, &InPlaceDfsCondenser, &LexicographicPicker, None)
        .await
        .unwrap_err()
        .to_string();
    assert!(err.contains("starting airport"));
}
