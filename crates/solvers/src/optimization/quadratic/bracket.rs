use num_traits::Float;
use thiserror::Error;

use super::Point;

/// Errors that can occur when validating a search bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError<T> {
    /// A bound is NaN or infinite.
    #[error("non-finite bound: {value}")]
    NonFiniteBound { value: T },

    /// The bounds are equal.
    #[error("zero width: both bounds are {value}")]
    ZeroWidth { value: T },

    /// The bounds are distinct but so close that the midpoint rounds onto
    /// one of them.
    #[error("degenerate width: no midpoint strictly between {lower} and {upper}")]
    DegenerateWidth { lower: T, upper: T },
}

/// Validates bracket bounds and returns them in normalized (lower < upper) order.
pub(super) fn validate<T: Float>(bracket: [T; 2]) -> Result<(T, T), BracketError<T>> {
    let [a, b] = bracket;

    if !a.is_finite() {
        return Err(BracketError::NonFiniteBound { value: a });
    }

    if !b.is_finite() {
        return Err(BracketError::NonFiniteBound { value: b });
    }

    #[allow(clippy::float_cmp)]
    if a == b {
        return Err(BracketError::ZeroWidth { value: a });
    }

    if a < b { Ok((a, b)) } else { Ok((b, a)) }
}

/// Where an interpolated candidate landed relative to the bracket.
///
/// The cases are checked in order, so a candidate that compares false to
/// everything (NaN) lands in [`Placement::AboveUpper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Placement {
    /// Below the lower bound.
    BelowLower,

    /// In `[lower, mid)`.
    LowerHalf,

    /// Exactly at the midpoint.
    AtMid,

    /// In `(mid, upper)`.
    UpperHalf,

    /// At or above the upper bound, or not comparable to it.
    AboveUpper,
}

/// Quadratic line search bracket.
///
/// Holds the evaluated points at the lower bound, the interior midpoint, and
/// the upper bound, in ascending x order. The ordering is strict at
/// construction, but an update may collapse one pair to equality when a
/// candidate lands exactly on a bound. The midpoint is the best interior
/// estimate of the minimum so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    lower: Point<T>,
    mid: Point<T>,
    upper: Point<T>,
}

impl<T: Float> Bracket<T> {
    /// Creates a bracket from three evaluated points in ascending x order.
    pub(super) fn new(lower: Point<T>, mid: Point<T>, upper: Point<T>) -> Self {
        debug_assert!(lower.x < mid.x && mid.x < upper.x);
        Self { lower, mid, upper }
    }

    /// Returns the point at the lower bound.
    #[must_use]
    pub fn lower(&self) -> Point<T> {
        self.lower
    }

    /// Returns the interior midpoint.
    #[must_use]
    pub fn mid(&self) -> Point<T> {
        self.mid
    }

    /// Returns the point at the upper bound.
    #[must_use]
    pub fn upper(&self) -> Point<T> {
        self.upper
    }

    /// Returns the width of the current bounds.
    #[must_use]
    pub fn width(&self) -> T {
        self.upper.x - self.lower.x
    }

    /// Returns true if the midpoint cost lies above the chord connecting the
    /// bound costs.
    ///
    /// A midpoint above the chord means the three samples are not convex,
    /// and the parabola fitted through them would open downward.
    pub(super) fn mid_above_chord(&self) -> bool {
        let chord = self.lower.cost
            + (self.upper.cost - self.lower.cost) * (self.mid.x - self.lower.x) / self.width();
        self.mid.cost > chord
    }

    /// Returns the smaller of the two interior gaps, `min(m - l, u - m)`.
    pub(super) fn inner_margin(&self) -> T {
        (self.mid.x - self.lower.x).min(self.upper.x - self.mid.x)
    }

    /// Returns the spread in bound costs relative to their mean,
    /// `|(fu - fl) / ((fu + fl) / 2)|`.
    pub(super) fn relative_spread(&self) -> T {
        let two = T::one() + T::one();
        ((self.upper.cost - self.lower.cost) / ((self.upper.cost + self.lower.cost) / two)).abs()
    }

    /// Returns the abscissa of the vertex of the parabola fitted through the
    /// three bracket points, via the secant slopes on each side.
    ///
    /// Degenerate geometry (equal slopes, coincident points) yields a
    /// non-finite result, which placement and the cost evaluation guard
    /// resolve downstream.
    pub(super) fn interpolate(&self) -> T {
        let two = T::one() + T::one();
        let sl = (self.mid.cost - self.lower.cost) / (self.mid.x - self.lower.x);
        let su = (self.upper.cost - self.mid.cost) / (self.upper.x - self.mid.x);
        (self.lower.x + self.mid.x) / two - sl * self.width() / (two * (su - sl))
    }

    /// Classifies where a candidate abscissa landed relative to the bracket.
    #[allow(clippy::float_cmp)]
    pub(super) fn place(&self, x: T) -> Placement {
        if x < self.lower.x {
            Placement::BelowLower
        } else if x < self.mid.x {
            Placement::LowerHalf
        } else if x == self.mid.x {
            Placement::AtMid
        } else if x < self.upper.x {
            Placement::UpperHalf
        } else {
            Placement::AboveUpper
        }
    }

    /// Absorbs a candidate from the lower half of the bracket.
    ///
    /// A candidate worse than the midpoint tightens the lower bound.
    /// Otherwise the candidate becomes the new midpoint and the old midpoint
    /// becomes the upper bound.
    pub(super) fn absorb_low(&mut self, candidate: Point<T>) {
        if candidate.cost > self.mid.cost {
            self.lower = candidate;
        } else {
            self.upper = self.mid;
            self.mid = candidate;
        }
    }

    /// Absorbs a candidate from the upper half of the bracket.
    ///
    /// A candidate worse than the midpoint tightens the upper bound.
    /// Otherwise the candidate becomes the new midpoint and the old midpoint
    /// becomes the lower bound.
    pub(super) fn absorb_high(&mut self, candidate: Point<T>) {
        if candidate.cost > self.mid.cost {
            self.upper = candidate;
        } else {
            self.lower = self.mid;
            self.mid = candidate;
        }
    }

    /// Slides the bracket down to chase a candidate below the lower bound.
    pub(super) fn slide_down(&mut self, candidate: Point<T>) {
        self.upper = self.mid;
        self.mid = self.lower;
        self.lower = candidate;
    }

    /// Slides the bracket up to chase a candidate above the upper bound.
    pub(super) fn slide_up(&mut self, candidate: Point<T>) {
        self.lower = self.mid;
        self.mid = self.upper;
        self.upper = candidate;
    }
}
