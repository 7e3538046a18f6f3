use super::Point;

/// Indicates how the search finished.
///
/// Every path out of the search sets a terminal status; there is no
/// "still running" state a caller could observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    ///
    /// This covers the bracket width dropping below the value tolerance, an
    /// interpolated candidate landing exactly on the current midpoint, and a
    /// chord-test failure already within tolerance of a flat region.
    Converged,

    /// An interpolated candidate landed outside the bracket while expansion
    /// was disabled.
    OutsideBracket,

    /// The sampled costs are not convex across the bracket, beyond what the
    /// tolerances explain.
    Nonconvex,

    /// A cost evaluation returned a non-finite value mid-search.
    ///
    /// The solution keeps the best point found before the bad evaluation.
    NonFiniteCost,

    /// Reached the iteration limit without converging.
    MaxIters,
}

/// The result of a quadratic line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the minimum, if the search produced one.
    ///
    /// `Some` for [`Status::Converged`] and [`Status::NonFiniteCost`];
    /// `None` for [`Status::OutsideBracket`], [`Status::Nonconvex`], and
    /// [`Status::MaxIters`].
    pub best: Option<Point<T>>,

    /// Iteration count when the search finished.
    pub iters: usize,

    /// Number of cost evaluations performed, including the three initial
    /// bracket points.
    pub evals: usize,
}
