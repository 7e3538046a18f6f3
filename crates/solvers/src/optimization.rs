//! Solvers for optimization problems — minimizing a scalar cost.
//!
//! A [`CostFunction`] maps a scalar abscissa to a scalar cost. Solvers in
//! this module search a bracketed interval for the abscissa that minimizes
//! that cost.
//!
//! # Solvers
//!
//! - [`quadratic`] — successive quadratic interpolation over a bracketed
//!   interval, fast for smooth convex costs
//!
//! [`CostFunction`]: linemin_core::CostFunction

pub mod quadratic;
