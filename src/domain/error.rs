use crate::domain::model::AirportCode;

/// Rejected at build time: the route list does not fit the airport list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("route references unknown airport: {0}")]
    UnknownAirport(AirportCode),

    #[error("route must list at least two airports, got {0}")]
    RouteTooShort(usize),

    #[error("duplicate airport code: {0}")]
    DuplicateAirport(AirportCode),
}

/// Rejected before the root scan runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("starting airport is not part of the network: {0}")]
    UnknownStart(AirportCode),
}
