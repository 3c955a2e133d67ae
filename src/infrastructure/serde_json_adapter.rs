use crate::usecase::stats::PlanStats;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkFileDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(default)]
    pub airports: Vec<AirportDto>,

    /// Each route is an ordered sequence of at least two airport codes.
    #[serde(default)]
    pub routes: Vec<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane: Option<PlaneDto>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AirportDto {
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlaneDto {
    pub speed_kmh: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlanFileDto {
    pub start: String,
    pub new_routes: Vec<NewRouteDto>,
    pub stats: PlanStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewRouteDto {
    pub from: String,
    pub to: String,
    pub distance_km: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_time_hours: Option<f64>,
}

pub async fn read_network_file(path: &str) -> Result<NetworkFileDto> {
    let raw = fs::read_to_string(path).await?;
    let dto: NetworkFileDto = serde_json::from_str(&raw)?;
    Ok(dto)
}

pub async fn write_plan_file(path: &str, dto: &PlanFileDto) -> Result<()> {
    let pretty = serde_json::to_string_pretty(dto)?;
    fs::write(path, pretty).await?;
    Ok(())
}
