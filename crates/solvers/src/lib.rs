//! Numerical solvers for the Linemin toolkit.
//!
//! Each solver is a free function that takes a cost function, a bracket, a
//! config, and an observer, and returns a typed solution. Cost functions and
//! observers are defined by the traits in [`linemin_core`].
//!
//! # Modules
//!
//! - [`optimization`] — minimizers for scalar cost functions

pub mod optimization;
