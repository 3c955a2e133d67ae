use crate::usecase::stats::PlanStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphBuilt {
        airports: usize,
        nodes: usize,
        edges: usize,
        self_loops_dropped: usize,
    },

    CycleCondensed {
        airports: Vec<String>,
        absorbed: usize,
    },

    CondensationFinished {
        live_nodes: usize,
        merges: usize,
    },

    NewRouteSuggested {
        from: String,
        to: String,
        aggregate: Vec<String>,
    },

    Finished {
        stats: PlanStats,
    },
}
