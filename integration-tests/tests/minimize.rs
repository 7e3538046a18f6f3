use approx::assert_relative_eq;

use integration_tests::cost_models::{CountingCost, ShiftedParabola};
use linemin_solvers::optimization::quadratic::{self, Config, Status};

#[test]
fn counted_evaluations_match_the_reported_evals() {
    let mut cost = CountingCost::new(ShiftedParabola { center: 2.0 });
    let config = Config {
        estimate: Some(1.0),
        ..Config::default()
    };

    let solution =
        quadratic::minimize_unobserved(&mut cost, [0.0, 4.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.evals, cost.calls());
    assert_eq!(cost.calls(), 5);
}

#[test]
fn tight_tolerance_still_converges_on_a_parabola() {
    // A parabola converges by hitting the vertex exactly, not by shrinking
    // the bracket, so the tight tolerance never comes into play.
    let mut cost = ShiftedParabola { center: 3.0 };
    let config = Config {
        value_tol: Some(1e-9),
        ..Config::default()
    };

    let solution =
        quadratic::minimize_unobserved(&mut cost, [0.0, 10.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    let best = solution.best.expect("converged searches carry a best point");
    assert_relative_eq!(best.x, 3.0);
    assert_relative_eq!(best.cost, 0.0);
    assert_eq!(solution.iters, 2);
}

#[test]
fn expansion_can_converge_after_sliding() {
    // The minimum at x = 6 lies above [0, 4]. One slide moves the bracket
    // to (2, 4, 6), and the wide tolerance accepts its midpoint.
    let mut cost = CountingCost::new(ShiftedParabola { center: 6.0 });
    let config = Config {
        expand: true,
        value_tol: Some(8.0),
        ..Config::default()
    };

    let solution =
        quadratic::minimize_unobserved(&mut cost, [0.0, 4.0], &config).expect("entry is valid");

    assert_eq!(solution.status, Status::Converged);
    let best = solution.best.expect("converged searches carry a best point");
    assert_relative_eq!(best.x, 4.0);
    assert_relative_eq!(best.cost, 4.0);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.evals, cost.calls());
}

#[test]
fn failures_report_their_evaluations_too() {
    // Bounded search with the minimum below the bracket: the candidate
    // escapes on the first pass, after four evaluations.
    let mut cost = CountingCost::new(ShiftedParabola { center: 2.0 });

    let solution = quadratic::minimize_unobserved(&mut cost, [4.0, 8.0], &Config::default())
        .expect("entry is valid");

    assert_eq!(solution.status, Status::OutsideBracket);
    assert_eq!(solution.best, None);
    assert_eq!(solution.evals, cost.calls());
    assert_eq!(cost.calls(), 4);
}
