/// Receives solver events.
///
/// Observers let callers monitor a solver without changing its API, enabling
/// diagnostic traces, progress reporting, or custom bookkeeping. Solvers call
/// `observe` with each event as it happens; observers cannot steer the solver,
/// they only watch it.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes a solver event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event)
    }
}

/// A no-op observer that ignores every event.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        let mut observer = |event: &u32| seen.push(*event);

        observer.observe(&1);
        observer.observe(&2);

        assert_eq!(seen, [1, 2]);
    }

    #[test]
    fn unit_observer_ignores_events() {
        let mut observer = ();
        observer.observe(&"anything");
    }
}
