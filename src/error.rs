use thiserror::Error;

/// Errors reported by the optimization engine.
///
/// All of these are caller-input problems. The pipeline is deterministic
/// given a seed, so nothing here is transient and nothing is retried.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The two objective value sequences must describe the same population.
    #[error("objective value sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A candidate needs at least one feature.
    #[error("candidate has no features")]
    EmptyCandidate,

    /// Features are real numbers; NaN and infinities are rejected up front.
    #[error("feature at position {position} is not a finite number")]
    NonFiniteFeature { position: usize },

    /// An objective evaluator returned NaN or an infinity. Rankings over
    /// such values would be silently wrong, so this fails fast instead.
    #[error("objective {objective} produced a non-finite value for candidate {index}")]
    NonFiniteObjective { objective: usize, index: usize },

    /// A front referenced a population index past the end of the value slices.
    #[error("front member index {index} out of range for population of {len}")]
    MemberOutOfRange { index: usize, len: usize },
}
