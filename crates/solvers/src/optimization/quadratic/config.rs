use num_traits::Float;
use thiserror::Error;

/// Configuration for the quadratic line search.
///
/// Two knobs default from the bracket rather than from fixed numbers: a
/// `None` estimate starts at the bracket midpoint, and a `None` value
/// tolerance resolves to 0.1% of the initial bracket width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<T> {
    /// Starting interior estimate. `None` uses the bracket midpoint.
    ///
    /// When set, the estimate must lie strictly inside the bracket.
    pub estimate: Option<T>,

    /// Bracket width below which the search has converged.
    ///
    /// `None` uses 0.1% of the initial bracket width.
    pub value_tol: Option<T>,

    /// Relative spread in bound costs below which a chord-test failure is
    /// still treated as converged. Zero disables the check.
    pub function_tol: T,

    /// Whether a candidate outside the bracket slides the bracket toward it
    /// instead of ending the search with [`Status::OutsideBracket`].
    ///
    /// Expansion has no convergence guarantee; the iteration cap is the only
    /// backstop when chasing a minimum that keeps moving away.
    ///
    /// [`Status::OutsideBracket`]: super::Status::OutsideBracket
    pub expand: bool,

    /// Maximum number of interpolation iterations.
    pub max_iters: usize,
}

impl<T: Float> Default for Config<T> {
    fn default() -> Self {
        Self {
            estimate: None,
            value_tol: None,
            function_tol: T::zero(),
            expand: false,
            max_iters: 50,
        }
    }
}

/// Errors that can occur when validating a quadratic line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("value_tol must be finite and non-negative")]
    ValueTol,

    #[error("function_tol must be finite and non-negative")]
    FunctionTol,
}

impl<T: Float> Config<T> {
    /// Validates that the configured tolerances are finite and non-negative.
    ///
    /// The estimate is not checked here; whether it lies inside the bracket
    /// depends on the bracket the search is invoked with.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(tol) = self.value_tol
            && (!tol.is_finite() || tol < T::zero())
        {
            return Err(ConfigError::ValueTol);
        }
        if !self.function_tol.is_finite() || self.function_tol < T::zero() {
            return Err(ConfigError::FunctionTol);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config: Config<f64> = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_iters, 50);
        assert!(!config.expand);
    }

    #[test]
    fn rejects_bad_value_tol() {
        let config = Config {
            value_tol: Some(-1.0),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ValueTol));

        let config = Config {
            value_tol: Some(f64::NAN),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ValueTol));
    }

    #[test]
    fn rejects_bad_function_tol() {
        let config = Config {
            function_tol: f64::INFINITY,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FunctionTol));
    }

    #[test]
    fn zero_tolerances_are_allowed() {
        let config = Config {
            value_tol: Some(0.0),
            function_tol: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
