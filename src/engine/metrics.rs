//! Engine run metrics.
//!
//! Timings are collected unconditionally: a run costs two extra `Instant`
//! subtractions, so there is no opt-in switch. Callers that do not care read
//! nothing; the debug CLI prints all three fields.

use std::time::Duration;

/// Timing measurements for one scan of an input string.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunMetrics {
    /// Total elapsed wall time for the run.
    pub total: Duration,
    /// Time spent splitting the input into atoms.
    pub lex: Duration,
    /// Time spent walking the atoms and matching grammars.
    pub scan: Duration,
}
