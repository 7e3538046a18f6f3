//! Quadratic line search for single-variable minimization.
//!
//! # Algorithm
//!
//! The search maintains a bracket of three points — lower bound, interior
//! midpoint, upper bound — whose midpoint is the current best estimate of
//! the minimum. Each iteration fits a parabola through the three points,
//! evaluates the cost at the parabola's vertex, and absorbs that candidate
//! into the bracket, tightening one side. A candidate that lands outside
//! the bracket either ends the search or slides the bracket toward it,
//! depending on [`Config::expand`].
//!
//! Before interpolating, each iteration checks that the midpoint still lies
//! below the chord connecting the bracket bounds. A midpoint above the chord
//! means the sampled costs are not convex, and the search ends with
//! [`Status::Nonconvex`] unless the bracket is already within tolerance.
//!
//! # When to Use
//!
//! The quadratic line search is appropriate when:
//! - The cost function is smooth and convex (or nearly so) on the bracket
//! - Derivative information is unavailable or expensive
//! - Fewer evaluations matter more than guaranteed convergence
//!
//! # Limitations
//!
//! - **Single variable only**: minimizes over a scalar abscissa
//! - **No subdivision fallback**: a non-convex sample ends the search rather
//!   than triggering a slower but safer bracketing strategy
//! - **Convexity assumption**: costs that are flat, noisy, or multi-modal on
//!   the bracket may end with [`Status::Nonconvex`] or [`Status::MaxIters`]
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] at each point of interest:
//!
//! - [`Event::Started`] — the initial bracket has been evaluated
//! - [`Event::Evaluated`] — an interpolated candidate has been evaluated,
//!   before the bracket decides what to do with it
//! - [`Event::Stepped`] — the bracket absorbed or chased a candidate;
//!   exactly one per completed iteration
//! - [`Event::Finished`] — the search is about to return, with its solution
//!
//! Observers are notify-only; there is no way to steer or cancel the search
//! beyond [`Config::max_iters`].

mod bracket;
mod config;
mod error;
mod event;
mod point;
mod search;
mod solution;


pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use linemin_core::{CostFunction, Observer};
use num_traits::Float;

use search::search;

/// Finds the minimum of the cost function using quadratic interpolation.
///
/// The bracket bounds may be given in either order; reversed bounds are
/// swapped. The observer receives an [`Event`] at each point of interest —
/// see the [module docs](self) for event timing.
///
/// The returned [`Solution`] carries the outcome in its `status` field and
/// the best point (if any) in `best`; failure to locate a minimum is not an
/// `Err`, it is a solution without a best point.
///
/// # Errors
///
/// Returns an error if the bracket or config fails validation, or if the
/// cost at one of the three initial bracket points is non-finite.
pub fn minimize<T, C, Obs>(
    cost: &mut C,
    bracket: [T; 2],
    config: &Config<T>,
    observer: Obs,
) -> Result<Solution<T>, Error<T>>
where
    T: Float,
    C: CostFunction<T>,
    Obs: Observer<Event<T>>,
{
    search(cost, bracket, config, observer)
}

/// Finds the minimum of the cost function without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns an error if the bracket or config fails validation, or if the
/// cost at one of the three initial bracket points is non-finite.
pub fn minimize_unobserved<T, C>(
    cost: &mut C,
    bracket: [T; 2],
    config: &Config<T>,
) -> Result<Solution<T>, Error<T>>
where
    T: Float,
    C: CostFunction<T>,
{
    minimize(cost, bracket, config, ())
}
