use crate::infrastructure::schema_validator::{validate_all_network_items, validate_network_file};
use crate::infrastructure::serde_json_adapter::NetworkFileDto;
use anyhow::{anyhow, Result};
use std::collections::BTreeSet;

/// Checks a network file: JSON schemas first, then the business invariants
/// the planner relies on (unique airport codes, routes over known airports,
/// a known starting airport).
pub fn validate_network(dto: &NetworkFileDto) -> Result<()> {
    // First, validate against JSON schemas
    let network_value = serde_json::to_value(dto)?;
    validate_network_file(&network_value)?;
    validate_all_network_items(&network_value)?;

    let mut known: BTreeSet<&str> = BTreeSet::new();
    for airport in dto.airports.iter() {
        if !known.insert(airport.code.as_str()) {
            return Err(anyhow!("duplicate airport code: {}", airport.code));
        }
        if !airport.latitude.is_finite() || !airport.longitude.is_finite() {
            return Err(anyhow!(
                "airport {} has non-finite coordinates",
                airport.code
            ));
        }
    }

    for (idx, route) in dto.routes.iter().enumerate() {
        if route.len() < 2 {
            return Err(anyhow!(
                "route[{idx}] must list at least two airports, got {}",
                route.len()
            ));
        }
        for code in route.iter() {
            if !known.contains(code.as_str()) {
                return Err(anyhow!("route[{idx}] references unknown airport: {code}"));
            }
        }
    }

    if let Some(start) = dto.start.as_deref() {
        if !known.contains(start) {
            return Err(anyhow!("starting airport is not part of the network: {start}"));
        }
    }

    Ok(())
}
