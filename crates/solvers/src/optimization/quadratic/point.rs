/// A point with its evaluated cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    /// The x value.
    pub x: T,

    /// The cost at x.
    pub cost: T,
}

impl<T> Point<T> {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: T, cost: T) -> Self {
        Self { x, cost }
    }
}
