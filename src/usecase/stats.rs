use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    pub airports_seen: usize,
    pub routes_seen: usize,
    pub edges_added: usize,
    pub self_loops_dropped: usize,
    pub cycles_merged: usize,
    pub nodes_after_condense: usize,
    pub new_routes: usize,
}
