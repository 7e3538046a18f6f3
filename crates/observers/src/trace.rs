//! Text trace of a quadratic line search.

use std::fmt::Display;
use std::io::{self, Write};

use num_traits::Float;

use linemin_core::{CostFunction, Observer};
use linemin_solvers::optimization::quadratic::{
    self, Bracket, Config, Error, Event, Solution, Status,
};

/// An observer that writes a human-readable log of the search.
///
/// The initial bracket is written as a small position/value table, each
/// candidate evaluation as a one-liner, each bracket update as a fresh
/// table, and the outcome as a closing line naming the final status.
///
/// Write failures are swallowed; tracing is best-effort and never disturbs
/// the search.
///
/// # Example
///
/// ```
/// use linemin_observers::TraceObserver;
/// use linemin_solvers::optimization::quadratic::{self, Config};
///
/// let mut cost = |x: f64| (x - 2.0) * (x - 2.0);
/// let mut trace = TraceObserver::new(Vec::new());
///
/// quadratic::minimize(&mut cost, [0.0, 4.0], &Config::default(), &mut trace)?;
///
/// let log = String::from_utf8(trace.into_writer()).unwrap();
/// assert!(log.starts_with("Initialising quadratic line search"));
/// # Ok::<(), quadratic::Error<f64>>(())
/// ```
pub struct TraceObserver<W> {
    writer: W,
}

impl<W: Write> TraceObserver<W> {
    /// Creates a trace observer writing to the given destination.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the observer and returns the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_event<T: Float + Display>(&mut self, event: &Event<T>) -> io::Result<()> {
        match event {
            Event::Started { bracket } => {
                writeln!(self.writer, "Initialising quadratic line search")?;
                writeln!(
                    self.writer,
                    "{:<8}{:<14}{:<14}{:<14}",
                    "", "Lower", "Mid", "Upper"
                )?;
                self.write_rows(bracket)
            }
            Event::Evaluated { candidate, .. } => {
                writeln!(
                    self.writer,
                    "  New point {}, value {}",
                    candidate.x, candidate.cost
                )
            }
            Event::Stepped { bracket, .. } => {
                writeln!(self.writer)?;
                self.write_rows(bracket)
            }
            Event::Finished { solution } => {
                writeln!(self.writer, "{}", status_line(solution.status))
            }
        }
    }

    fn write_rows<T: Float + Display>(&mut self, bracket: &Bracket<T>) -> io::Result<()> {
        writeln!(
            self.writer,
            "{:<8}{:<14}{:<14}{:<14}",
            "Pos",
            bracket.lower().x,
            bracket.mid().x,
            bracket.upper().x
        )?;
        writeln!(
            self.writer,
            "{:<8}{:<14}{:<14}{:<14}",
            "Value",
            bracket.lower().cost,
            bracket.mid().cost,
            bracket.upper().cost
        )
    }
}

impl TraceObserver<io::Stderr> {
    /// Creates a trace observer writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

fn status_line(status: Status) -> &'static str {
    match status {
        Status::Converged => "Returning successfully",
        Status::OutsideBracket => "Returning due to candidate outside bracket",
        Status::Nonconvex => "Returning due to nonconvexity",
        Status::NonFiniteCost => "Returning due to non-finite cost value",
        Status::MaxIters => "Returning due to too many iterations",
    }
}

impl<T, W> Observer<Event<T>> for TraceObserver<W>
where
    T: Float + Display,
    W: Write,
{
    fn observe(&mut self, event: &Event<T>) {
        // Best-effort: a closed pipe should not end the search.
        let _ = self.write_event(event);
    }
}

/// Allows `&mut TraceObserver<W>` to be passed to solvers that take an
/// observer by value, so the writer can be recovered after the search.
impl<T, W> Observer<Event<T>> for &mut TraceObserver<W>
where
    T: Float + Display,
    W: Write,
{
    fn observe(&mut self, event: &Event<T>) {
        (*self).observe(event);
    }
}

/// Runs a quadratic line search with a trace written to the given destination.
///
/// This is a convenience wrapper that pairs [`quadratic::minimize`] with a
/// [`TraceObserver`]. Pass [`std::io::stderr()`] (or a lock on it) to watch a
/// search live.
///
/// # Errors
///
/// Returns an error if the bracket or config fails validation, or if the
/// cost at one of the three initial bracket points is non-finite.
pub fn minimize_traced<T, C, W>(
    cost: &mut C,
    bracket: [T; 2],
    config: &Config<T>,
    writer: W,
) -> Result<Solution<T>, Error<T>>
where
    T: Float + Display,
    C: CostFunction<T>,
    W: Write,
{
    quadratic::minimize(cost, bracket, config, TraceObserver::new(writer))
}
