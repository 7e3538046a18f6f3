use super::{Bracket, Point, Solution};

/// Events emitted by the quadratic line search.
///
/// Events describe the search as it runs: the initial bracket, each
/// candidate evaluation, each bracket update, and the final solution.
/// [`Event::Stepped`] fires exactly once per completed iteration, which
/// makes it the natural hook for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<T> {
    /// The three initial bracket points have been evaluated.
    Started {
        /// The bracket formed from the bounds and the starting estimate.
        bracket: Bracket<T>,
    },

    /// An interpolated candidate has been evaluated.
    ///
    /// Emitted before the bracket decides what to do with the candidate, so
    /// candidates that end the search (outside the bracket, non-finite cost)
    /// are still observed.
    Evaluated {
        /// Iteration counter (1-based within the search loop).
        iter: usize,

        /// The candidate point (x and cost).
        candidate: Point<T>,
    },

    /// The bracket has absorbed or chased a candidate.
    ///
    /// A candidate landing exactly on a bound collapses one bracket pair,
    /// so the reported points are not guaranteed distinct.
    Stepped {
        /// Iteration counter (1-based within the search loop).
        iter: usize,

        /// The bracket after the update.
        bracket: Bracket<T>,
    },

    /// The search has finished.
    Finished {
        /// The solution about to be returned.
        solution: Solution<T>,
    },
}
