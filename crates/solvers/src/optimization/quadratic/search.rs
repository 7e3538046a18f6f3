use linemin_core::{CostFunction, Observer};
use num_traits::Float;

use super::{
    Config, Error, Event, Point, Solution,
    bracket::{self, Bracket, BracketError, Placement},
    solution::Status,
};

/// Core quadratic line search implementation.
///
/// Every return path, success or failure, flows through [`finish`] so the
/// observer always sees the solution the caller is about to receive.
pub(super) fn search<T, C, Obs>(
    cost: &mut C,
    bounds: [T; 2],
    config: &Config<T>,
    mut observer: Obs,
) -> Result<Solution<T>, Error<T>>
where
    T: Float,
    C: CostFunction<T>,
    Obs: Observer<Event<T>>,
{
    let (lower, upper) = bracket::validate(bounds)?;
    config.validate()?;

    let two = T::one() + T::one();
    let mid = match config.estimate {
        Some(estimate) => {
            if !(lower < estimate && estimate < upper) {
                return Err(Error::EstimateOutsideBracket { estimate });
            }
            estimate
        }
        None => {
            // A bracket one ULP wide passes validation, but its midpoint
            // rounds onto a bound and leaves no interior point to sample.
            let mid = (lower + upper) / two;
            if !(lower < mid && mid < upper) {
                return Err(Error::InvalidBracket(BracketError::DegenerateWidth { lower, upper }));
            }
            mid
        }
    };

    // Default tolerance is 0.1% of the initial width.
    // 0.001 converts into any real float type, unwrap is safe.
    let value_tol = config
        .value_tol
        .unwrap_or_else(|| T::from(0.001).unwrap() * (upper - lower));

    let mut evals = 0;
    let lower = init_eval(cost, lower, &mut evals)?;
    let mid = init_eval(cost, mid, &mut evals)?;
    let upper = init_eval(cost, upper, &mut evals)?;

    let mut bracket = Bracket::new(lower, mid, upper);
    observer.observe(&Event::Started { bracket });

    for iter in 1..=config.max_iters {
        // A midpoint above the chord breaks the convexity assumption the
        // interpolation relies on. Treat it as convergence if the bracket
        // is already within tolerance of a flat region, otherwise fail.
        if bracket.mid_above_chord() {
            let within_tolerance = bracket.inner_margin() < value_tol
                || bracket.relative_spread() < config.function_tol;
            let solution = if within_tolerance {
                finish(Status::Converged, Some(bracket.mid()), iter, evals, &mut observer)
            } else {
                finish(Status::Nonconvex, None, iter, evals, &mut observer)
            };
            return Ok(solution);
        }

        let x = bracket.interpolate();
        evals += 1;
        let candidate = Point::new(x, cost.cost(x));
        observer.observe(&Event::Evaluated { iter, candidate });

        if !candidate.cost.is_finite() {
            let solution = finish(
                Status::NonFiniteCost,
                Some(bracket.mid()),
                iter,
                evals,
                &mut observer,
            );
            return Ok(solution);
        }

        match bracket.place(candidate.x) {
            Placement::BelowLower => {
                if config.expand {
                    bracket.slide_down(candidate);
                } else {
                    let solution =
                        finish(Status::OutsideBracket, None, iter, evals, &mut observer);
                    return Ok(solution);
                }
            }
            Placement::LowerHalf => bracket.absorb_low(candidate),
            Placement::AtMid => {
                // The interpolation reproduced the current midpoint exactly,
                // so there is nothing left to refine.
                let solution =
                    finish(Status::Converged, Some(candidate), iter, evals, &mut observer);
                return Ok(solution);
            }
            Placement::UpperHalf => bracket.absorb_high(candidate),
            Placement::AboveUpper => {
                if config.expand {
                    bracket.slide_up(candidate);
                } else {
                    let solution =
                        finish(Status::OutsideBracket, None, iter, evals, &mut observer);
                    return Ok(solution);
                }
            }
        }

        observer.observe(&Event::Stepped { iter, bracket });

        if bracket.width() < value_tol {
            let solution =
                finish(Status::Converged, Some(bracket.mid()), iter, evals, &mut observer);
            return Ok(solution);
        }
    }

    Ok(finish(
        Status::MaxIters,
        None,
        config.max_iters,
        evals,
        &mut observer,
    ))
}

// ============================================================================
// Init + finish helpers
// ============================================================================

/// Evaluates the cost at an initial bracket point, rejecting non-finite values.
fn init_eval<T, C>(cost: &mut C, x: T, evals: &mut usize) -> Result<Point<T>, Error<T>>
where
    T: Float,
    C: CostFunction<T>,
{
    *evals += 1;
    let value = cost.cost(x);
    if value.is_finite() {
        Ok(Point::new(x, value))
    } else {
        Err(Error::NonFiniteInit { x })
    }
}

/// Builds the solution and announces it before handing it back.
fn finish<T, Obs>(
    status: Status,
    best: Option<Point<T>>,
    iters: usize,
    evals: usize,
    observer: &mut Obs,
) -> Solution<T>
where
    T: Float,
    Obs: Observer<Event<T>>,
{
    let solution = Solution {
        status,
        best,
        iters,
        evals,
    };
    observer.observe(&Event::Finished { solution });
    solution
}
