//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;
use numeric_roots::root_finding::bisection::{bisection, bisection_observed, BisectionCfg, BisectionError};
use numeric_roots::root_finding::errors::RootFindingError;
use numeric_roots::root_finding::event::Event;
use numeric_roots::root_finding::report::{Stencil, TerminationReason};

type TestResult = Result<(), BisectionError>;

fn quiet() -> BisectionCfg {
    BisectionCfg::new().set_verbose(false)
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, quiet())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.iterations, 15);
    assert_eq!(res.errors.len(), res.iterations);
    assert_eq!(res.evaluations, 2 + 15);
    assert_eq!(res.algorithm_name, "bisection");
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-4);
    assert_eq!(res.solution(), Some(res.root));
    Ok(())
}

#[test]
fn width_halves_each_iteration() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, quiet())?;

    for (i, &e) in res.errors.iter().enumerate() {
        assert_eq!(e, 2.0 / 2.0_f64.powi(i as i32 + 1), "iteration {}", i + 1);
    }
    Ok(())
}

#[test]
fn final_bracket_contains_root() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, quiet())?;

    let Stencil::Bracket { bounds: [a, b] } = res.stencil else {
        panic!("expected Bracket stencil");
    };
    assert!(a < 2.0_f64.sqrt() && 2.0_f64.sqrt() < b);
    assert!(f(a) * f(b) < 0.0);
    Ok(())
}

#[test]
fn reversed_bounds_converge() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 2.0, 0.0, quiet())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.iterations, 15);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-4);
    Ok(())
}

#[test]
fn exact_root_on_first_midpoint() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let res = bisection(f, 0.0, 2.0, quiet())?;

    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.f_root, 0.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.errors, vec![1.0]);
    Ok(())
}

#[test]
fn exact_root_stops_that_iteration() -> TestResult {
    let f   = |x: f64| x - 0.75;
    let cfg = quiet().set_tolerance(1e-12)?;
    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    assert_eq!(res.root, 0.75);
    assert_eq!(res.iterations, 3);
    assert_eq!(res.errors, vec![1.0, 0.5, 0.25]);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let mut iterations = 0;
    let mut count = |e: &Event<'_>| if let Event::Iteration { .. } = e { iterations += 1 };

    let err = bisection_observed(f, -1.0, 1.0, quiet(), &mut count).unwrap_err();

    assert!(matches!(err, BisectionError::InvalidBracket { a, b, fa, fb }
        if a == -1.0 && b == 1.0 && fa == 2.0 && fb == 2.0));
    assert_eq!(iterations, 0);
}

#[test]
fn root_at_endpoint_is_not_a_bracket() {
    let f   = |x: f64| x;
    let err = bisection(f, 0.0, 5.0, quiet()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBracket { fa, .. } if fa == 0.0));
}

#[test]
fn uses_max_iter() -> TestResult {
    let f   = |x: f64| x - 1.0 / 3.0;
    let cfg = quiet()
        .set_tolerance(1e-300)?
        .set_max_iter(10)?;

    let res = bisection(f, 0.0, 1.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 10);
    assert_eq!(res.errors.len(), 10);
    assert!(!res.converged());
    assert_eq!(res.solution(), None);
    Ok(())
}

#[test]
fn max_iter_1_hits_limit() -> TestResult {
    let f   = |x: f64| x - 0.3;
    let cfg = quiet().set_max_iter(1)?;
    let res = bisection(f, -5.0, 1.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, -2.0);
    Ok(())
}

#[test]
fn detects_invalid_bounds() {
    let f   = |x: f64| x;
    let err = bisection(f, f64::NAN, 1.0, quiet()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { b, .. } if b == 1.0));

    let err = bisection(f, 0.0, f64::INFINITY, quiet()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { .. }));
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = bisection(f, -1.0, 5.0, quiet()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()));
}

#[test]
fn infinite_function_value() {
    let f   = |x: f64| 1.0 / x;
    let err = bisection(f, -1.0, 1.0, quiet()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()));
}

#[test]
fn invalid_config_is_rejected() {
    assert!(matches!(
        BisectionCfg::new().set_tolerance(0.0),
        Err(RootFindingError::InvalidTolerance { got }) if got == 0.0
    ));
    assert!(matches!(
        BisectionCfg::new().set_tolerance(f64::NAN),
        Err(RootFindingError::InvalidTolerance { .. })
    ));
    assert!(matches!(
        BisectionCfg::new().set_max_iter(0),
        Err(RootFindingError::InvalidMaxIter { got: 0 })
    ));
}

#[test]
fn default_config() {
    let cfg = BisectionCfg::default();
    assert_eq!(cfg.tolerance(), 1e-4);
    assert_eq!(cfg.max_iter(), 50);
    assert!(cfg.verbose());
    assert!(!cfg.trace_errors());
}
