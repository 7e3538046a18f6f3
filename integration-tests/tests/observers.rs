use integration_tests::cost_models::ShiftedParabola;
use linemin_observers::{ProgressObserver, TraceObserver, minimize_traced};
use linemin_solvers::optimization::quadratic::{self, Config, Status};

#[test]
fn progress_reports_each_completed_iteration() {
    let mut cost = ShiftedParabola { center: 2.0 };
    let config = Config {
        expand: true,
        ..Config::default()
    };

    // Chasing the minimum below [4, 8] completes two iterations before the
    // collapsed bracket ends the search.
    let mut ticks = Vec::new();
    let mut progress = ProgressObserver::new(|iter| ticks.push(iter));

    let solution =
        quadratic::minimize(&mut cost, [4.0, 8.0], &config, &mut progress).expect("entry is valid");

    assert_eq!(solution.status, Status::NonFiniteCost);
    assert_eq!(progress.steps(), 2);
    assert_eq!(ticks, [1, 2]);
}

#[test]
fn minimize_traced_logs_a_full_search() {
    let mut cost = ShiftedParabola { center: 2.0 };
    let config = Config {
        estimate: Some(1.0),
        ..Config::default()
    };

    let mut log = Vec::new();
    let solution =
        minimize_traced(&mut cost, [0.0, 4.0], &config, &mut log).expect("should converge");

    assert_eq!(solution.status, Status::Converged);

    let log = String::from_utf8(log).expect("trace is UTF-8");
    assert!(log.starts_with("Initialising quadratic line search"));
    assert!(log.contains("New point"));
    assert!(log.trim_end().ends_with("Returning successfully"));
}

#[test]
fn trace_names_a_nonconvex_failure() {
    let mut cost = |x: f64| -(x - 2.0) * (x - 2.0);
    let config = Config {
        estimate: Some(1.0),
        ..Config::default()
    };

    let mut trace = TraceObserver::new(Vec::new());
    let solution =
        quadratic::minimize(&mut cost, [0.0, 4.0], &config, &mut trace).expect("entry is valid");

    assert_eq!(solution.status, Status::Nonconvex);
    assert_eq!(solution.best, None);

    let log = String::from_utf8(trace.into_writer()).expect("trace is UTF-8");
    assert!(log.trim_end().ends_with("Returning due to nonconvexity"));
}

#[test]
fn observers_can_be_combined_through_a_closure() {
    use linemin_core::Observer;
    use linemin_solvers::optimization::quadratic::Event;

    let mut cost = ShiftedParabola { center: 2.0 };
    let config = Config {
        estimate: Some(1.0),
        ..Config::default()
    };

    let mut trace = TraceObserver::new(Vec::new());
    let mut progress = ProgressObserver::new(|_| {});

    let solution = quadratic::minimize(&mut cost, [0.0, 4.0], &config, |event: &Event<f64>| {
        trace.observe(event);
        progress.observe(event);
    })
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(progress.steps(), 1);
    assert!(!trace.into_writer().is_empty());
}
