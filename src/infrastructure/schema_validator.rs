use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static NETWORK_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/network_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid network schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile network schema")
});

static AIRPORT_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/airport_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid airport schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile airport schema")
});

static ROUTE_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/route_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid route schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile route schema")
});

/// Validate the entire network file against the network schema
pub fn validate_network_file(network: &Value) -> Result<()> {
    match NETWORK_SCHEMA.validate(network) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Network file validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate an airport entry against the airport schema
pub fn validate_airport_item(airport: &Value) -> Result<()> {
    match AIRPORT_SCHEMA.validate(airport) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Airport item validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate a route entry against the route schema
pub fn validate_route_item(route: &Value) -> Result<()> {
    match ROUTE_SCHEMA.validate(route) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Route item validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate every airport and route entry in the network document
pub fn validate_all_network_items(network: &Value) -> Result<()> {
    if let Some(airports) = network.get("airports").and_then(|a| a.as_array()) {
        for airport in airports {
            validate_airport_item(airport)?;
        }
    }

    if let Some(routes) = network.get("routes").and_then(|r| r.as_array()) {
        for route in routes {
            validate_route_item(route)?;
        }
    }

    Ok(())
}
