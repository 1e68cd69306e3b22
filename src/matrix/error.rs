use thiserror::Error;

/// Errors raised by [`ScoreMatrix`](super::ScoreMatrix) operations.
///
/// All failures are synchronous and fail-fast: an erroring call never leaves
/// the matrix half-updated, with the one documented exception of
/// [`ScoreMatrix::set_scores`](super::ScoreMatrix::set_scores).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The referenced option was not part of the option set frozen at
    /// construction.
    #[error("no such option: {0}")]
    InvalidOption(String),

    /// The referenced criterion has never been scored on this matrix.
    #[error("no such criterion: {0}")]
    InvalidCriterion(String),

    /// Extrema are undefined until at least one criterion exists.
    #[error("matrix has no criteria yet")]
    NoCriteria,

    /// Every score in the matrix is equal, so a global rescale would divide
    /// by zero.
    #[error("degenerate score range: max equals min")]
    DegenerateRange,

    /// Every score in one criterion's column is equal, so a per-criterion
    /// rescale would divide by zero for that column.
    #[error("degenerate score range in criterion '{0}': max equals min")]
    DegenerateColumn(String),
}
