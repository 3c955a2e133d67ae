//! Usecase layer: application workflows + events.

pub mod event;
pub mod plan;
pub mod stats;
pub mod validate;
