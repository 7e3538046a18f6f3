use linemin_core::CostFunction;

/// Parabola with its minimum at `center`: f(x) = (x - center)².
pub struct ShiftedParabola {
    pub center: f64,
}

impl CostFunction<f64> for ShiftedParabola {
    fn cost(&mut self, x: f64) -> f64 {
        (x - self.center).powi(2)
    }
}

/// Wraps a cost function and counts how many times it is evaluated.
pub struct CountingCost<C> {
    inner: C,
    calls: usize,
}

impl<C> CountingCost<C> {
    pub fn new(inner: C) -> Self {
        Self { inner, calls: 0 }
    }

    /// Returns the number of evaluations so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl<T, C: CostFunction<T>> CostFunction<T> for CountingCost<C> {
    fn cost(&mut self, x: T) -> T {
        self.calls += 1;
        self.inner.cost(x)
    }
}
