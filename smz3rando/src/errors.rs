use thiserror::Error;

/// Stage of a generation attempt, reported with failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillPhase {
    Preferences,
    InitialFill,
    Dungeon,
    GanonsTower,
    Progression,
    Nice,
    Junk,
    Playthrough,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The attempt could not be completed; a fresh attempt with a new seed may succeed.
    #[error("generation failed in {phase:?} phase with {unplaced} unplaced: {detail}")]
    GenerationFailure {
        phase: FillPhase,
        unplaced: usize,
        detail: String,
    },
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    #[error("generation cancelled")]
    Cancelled,
}

impl GenerationError {
    pub fn failure(phase: FillPhase, unplaced: usize, detail: impl Into<String>) -> Self {
        GenerationError::GenerationFailure {
            phase,
            unplaced,
            detail: detail.into(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::GenerationFailure { .. })
    }
}
