//! Core traits for the Linemin toolkit.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`CostFunction`] — a callable that maps a scalar abscissa to a scalar
//!   cost
//! - [`Observer`] — receives solver events for diagnostics or progress
//!   reporting

mod cost;
mod observer;

pub use cost::CostFunction;
pub use observer::Observer;
