//! Reusable observers for the Linemin solvers.
//!
//! This crate provides [`Observer`] implementations for the event streams
//! emitted by the solvers in `linemin-solvers`.
//!
//! # Observers
//!
//! - [`TraceObserver`] — writes a human-readable log of the search to any
//!   [`std::io::Write`] destination
//! - [`ProgressObserver`] — invokes a callback once per completed iteration,
//!   for wiring into progress bars
//!
//! [`minimize_traced`] bundles a search and a trace into one call for quick
//! diagnostics.
//!
//! [`Observer`]: linemin_core::Observer

mod progress;
mod trace;

pub use progress::ProgressObserver;
pub use trace::{TraceObserver, minimize_traced};
