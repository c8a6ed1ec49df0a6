use thiserror::Error;

/// Domain-specific errors for the scheduling engine.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("{kind} id must be non-zero")]
    ZeroId { kind: &'static str },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("no sessions were generated from the supplied groups and courses")]
    NoSessionsGenerated,

    #[error("backtracking solver timed out after {elapsed_ms}ms with no assignment made")]
    SolverTimeout { elapsed_ms: u64 },

    #[error("internal fault: {0}")]
    InternalFault(String),
}

/// Use anyhow::Result at application boundaries, matching the rest of the crate.
pub type Result<T> = anyhow::Result<T>;
