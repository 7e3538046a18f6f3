use thiserror::Error;

use super::{BracketError, ConfigError};

/// Errors that can occur when starting a quadratic line search.
///
/// These all fire before the first iteration. Once the search is running,
/// failure to locate a minimum is reported through [`Status`] on the
/// solution, not through an error.
///
/// [`Status`]: super::Status
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error<T> {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError<T>),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The configured starting estimate is not strictly inside the bracket.
    #[error("initial estimate {estimate} is not strictly inside the bracket")]
    EstimateOutsideBracket { estimate: T },

    /// The cost at an initial bracket point is non-finite.
    ///
    /// Mid-search non-finite costs end the search gracefully with the best
    /// point so far; at initialization there is no best point yet, so a
    /// non-finite cost is an error instead.
    #[error("non-finite cost at initial bracket point x = {x}")]
    NonFiniteInit { x: T },
}
