/// A scalar cost function: the subject of a minimization.
///
/// Implementors map an abscissa `x` to the cost of the function at `x`.
/// Solvers query the cost at arbitrary points within or near the bracket
/// they are given, so implementors should be prepared for inputs anywhere
/// in that neighborhood.
///
/// The receiver is `&mut self` so cost functions may carry state, such as
/// caches or evaluation counters.
///
/// There is no error channel. A cost function signals that a point cannot
/// be evaluated by returning a non-finite value (NaN or infinity), which
/// solvers treat as a stop signal rather than an error to propagate.
///
/// Closures automatically implement `CostFunction`:
///
/// ```
/// use linemin_core::CostFunction;
///
/// let mut cost = |x: f64| (x - 2.0).powi(2);
/// assert_eq!(cost.cost(3.0), 1.0);
/// ```
pub trait CostFunction<T> {
    /// Evaluates the cost at `x`.
    fn cost(&mut self, x: T) -> T;
}

/// Blanket implementation for cost closures.
impl<T, F> CostFunction<T> for F
where
    F: FnMut(T) -> T,
{
    fn cost(&mut self, x: T) -> T {
        self(x)
    }
}
