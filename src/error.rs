pub use crate::json::ParseError;

/// Errors surfaced by the schedule core.
///
/// The codec and persistence layers propagate these to the caller; the
/// tracking and template components log and swallow them instead (stats and
/// templates are advisory, never a reason to take the schedule down).
#[derive(Debug, thiserror::Error)]
pub enum RoutineError {
    /// Malformed text-format input; carries the offset of the violation.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A native snapshot written by a different engine version or with an
    /// unexpected shape.
    #[error("incompatible snapshot: {0}")]
    IncompatibleSnapshot(String),

    /// Underlying storage failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A time string that is not HH:MM.
    #[error("invalid time {value:?}: expected HH:MM")]
    InvalidTime { value: String },

    /// An end time lexicographically before its start time.
    #[error("end time {end:?} is before start time {start:?}")]
    EndBeforeStart { start: String, end: String },

    /// A completion-ledger date key that is not an ISO date.
    #[error("invalid ledger date {0:?}")]
    InvalidDate(String),

    /// A completion-ledger document whose nesting is not date/day/task maps.
    #[error("completion ledger is malformed")]
    MalformedLedger,
}
