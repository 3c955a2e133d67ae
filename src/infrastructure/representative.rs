use crate::domain::model::AirportCode;
use crate::domain::traits::RepresentativePicker;
use std::collections::BTreeSet;

/// Deterministic default policy: the lexicographically smallest code of the
/// aggregate. Any member would be a valid target; pinning the smallest one
/// keeps plan output stable across runs.
pub struct LexicographicPicker;

impl RepresentativePicker for LexicographicPicker {
    fn pick<'a>(&self, airports: &'a BTreeSet<AirportCode>) -> Option<&'a AirportCode> {
        airports.iter().next()
    }
}
