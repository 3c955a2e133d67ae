use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphBuilt {
            airports,
            nodes,
            edges,
            self_loops_dropped,
        } => {
            json!({"type":"graph_built","airports":airports,"nodes":nodes,"edges":edges,"self_loops_dropped":self_loops_dropped})
        }
        AppEvent::CycleCondensed { airports, absorbed } => {
            json!({"type":"cycle_condensed","airports":airports,"absorbed":absorbed})
        }
        AppEvent::CondensationFinished { live_nodes, merges } => {
            json!({"type":"condensation_finished","live_nodes":live_nodes,"merges":merges})
        }
        AppEvent::NewRouteSuggested {
            from,
            to,
            aggregate,
        } => {
            json!({"type":"new_route_suggested","from":from,"to":to,"aggregate":aggregate})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
