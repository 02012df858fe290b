//! Mock telemetry models: pure types and samplers, no DOM access.

pub mod arrivals;
pub mod topology;
pub mod weather;
