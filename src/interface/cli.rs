use crate::infrastructure::cycle_condenser::InPlaceDfsCondenser;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::representative::LexicographicPicker;
use crate::infrastructure::serde_json_adapter::{read_network_file, write_plan_file, PlaneDto};
use crate::usecase::event::AppEvent;
use crate::usecase::plan::plan_network;
use crate::usecase::validate::validate_network;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::NetworkPlan {
            input,
            output,
            emit_events,
            dry_run,
            start,
            plane_speed,
        } => {
            let output = if dry_run {
                output.unwrap_or_default()
            } else {
                let output =
                    output.ok_or_else(|| anyhow!(format!("missing --out/--output\n\n{}", usage())))?;
                if is_same_file(&input, &output) {
                    return Err(anyhow!(
                        "refusing to overwrite the network file with a plan: {input}"
                    ));
                }
                output
            };

            let mut dto = read_network_file(&input)
                .await
                .with_context(|| format!("reading input network JSON: {input}"))?;

            if let Some(code) = start {
                dto.start = Some(code);
            }
            if let Some(speed_kmh) = plane_speed {
                dto.plane = Some(PlaneDto { speed_kmh });
            }

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let condenser = InPlaceDfsCondenser;
            let picker = LexicographicPicker;

            let (plan, stats) = plan_network(dto, &condenser, &picker, Some(tx)).await?;

            if !dry_run {
                write_plan_file(&output, &plan)
                    .await
                    .with_context(|| format!("writing output plan JSON: {output}"))?;
            }

            if let Some(handle) = printer {
                handle.await.ok();
            }

            eprintln!(
                "summary: airports_seen={} routes_seen={} edges_added={} self_loops_dropped={} cycles_merged={} nodes_after_condense={} new_routes={}",
                stats.airports_seen,
                stats.routes_seen,
                stats.edges_added,
                stats.self_loops_dropped,
                stats.cycles_merged,
                stats.nodes_after_condense,
                stats.new_routes
            );

            Ok(())
        }

        Cli::NetworkValidate { input } => {
            let dto = read_network_file(&input)
                .await
                .with_context(|| format!("reading input network JSON: {input}"))?;

            validate_network(&dto).with_context(|| format!("validating network: {input}"))?;

            // Emit an explicit schema validation success message for e2e tests.
            eprintln!("schema validation passed");
            eprintln!("ok: invariants validated");
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Cli {
    NetworkPlan {
        input: String,
        output: Option<String>,
        emit_events: bool,
        dry_run: bool,
        start: Option<String>,
        plane_speed: Option<f64>,
    },
    NetworkValidate {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> network plan --in/--input <network.json> --out/--output <plan.json>
        //       [--emit-events] [--dry-run] [--start <CODE>] [--plane-speed <KMH>]
        // <bin> network validate --in/--input <network.json>
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "network" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "plan" => Self::parse_plan(args),
            "validate" => Self::parse_validate(args),
            "-h" | "--help" => Err(anyhow!(usage())),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_plan(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut emit_events = false;
        let mut dry_run = false;
        let mut start: Option<String> = None;
        let mut plane_speed: Option<f64> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--dry-run" => {
                    dry_run = true;
                }
                "--start" => {
                    i += 1;
                    start = args.get(i).cloned();
                }
                "--plane-speed" => {
                    i += 1;
                    let raw = args
                        .get(i)
                        .ok_or_else(|| anyhow!(format!("missing value for --plane-speed\n\n{}", usage())))?;
                    let speed: f64 = raw
                        .parse()
                        .map_err(|_| anyhow!(format!("invalid --plane-speed: {raw}")))?;
                    plane_speed = Some(speed);
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::NetworkPlan {
            input,
            output,
            emit_events,
            dry_run,
            start,
            plane_speed,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::NetworkValidate { input })
    }
}

fn usage() -> &'static str {
    "Usage:\n  network plan --in/--input <network.json> --out/--output <plan.json> [--emit-events] [--dry-run] [--start <CODE>] [--plane-speed <KMH>]\n  network validate --in/--input <network.json>\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr.\n\nSafety:\n  The plan is never written over the input network file. --dry-run skips writing entirely."
}

fn is_same_file(a: &str, b: &str) -> bool {
    let a = std::fs::canonicalize(a).unwrap_or_else(|_| PathBuf::from(a));
    let b = std::fs::canonicalize(b).unwrap_or_else(|_| PathBuf::from(b));
    a == b
}
