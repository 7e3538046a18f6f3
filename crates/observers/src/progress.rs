//! Iteration progress reporting.

use linemin_core::Observer;
use linemin_solvers::optimization::quadratic::Event;

/// An observer that reports iteration progress through a callback.
///
/// The callback receives the 1-based iteration count each time the search
/// completes an iteration, which makes it easy to wire into a progress bar
/// or a spinner. Events that do not complete an iteration (the initial
/// bracket, candidate evaluations, the final solution) are ignored.
///
/// # Example
///
/// ```
/// use linemin_observers::ProgressObserver;
/// use linemin_solvers::optimization::quadratic::{self, Config};
///
/// let mut cost = |x: f64| x.exp() - 2.0 * x;
/// let config = Config {
///     value_tol: Some(0.5),
///     ..Config::default()
/// };
///
/// let mut progress = ProgressObserver::new(|iter| eprintln!("iteration {iter}"));
/// quadratic::minimize(&mut cost, [0.0, 2.0], &config, &mut progress)?;
///
/// assert_eq!(progress.steps(), 2);
/// # Ok::<(), quadratic::Error<f64>>(())
/// ```
pub struct ProgressObserver<F> {
    on_step: F,
    steps: usize,
}

impl<F: FnMut(usize)> ProgressObserver<F> {
    /// Creates a progress observer that calls `on_step` once per completed
    /// iteration.
    pub fn new(on_step: F) -> Self {
        Self { on_step, steps: 0 }
    }

    /// Returns the number of completed iterations seen so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<T, F> Observer<Event<T>> for ProgressObserver<F>
where
    F: FnMut(usize),
{
    fn observe(&mut self, event: &Event<T>) {
        if let Event::Stepped { iter, .. } = event {
            self.steps += 1;
            (self.on_step)(*iter);
        }
    }
}

/// Allows `&mut ProgressObserver<F>` to be passed to solvers that take an
/// observer by value, so the step count can be read after the search.
impl<T, F> Observer<Event<T>> for &mut ProgressObserver<F>
where
    F: FnMut(usize),
{
    fn observe(&mut self, event: &Event<T>) {
        (*self).observe(event);
    }
}
