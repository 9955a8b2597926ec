use approx::assert_abs_diff_eq;
use numeric_roots::root_finding::errors::RootFindingError;
use numeric_roots::root_finding::event::Event;
use numeric_roots::root_finding::regula_falsi::{regula_falsi, regula_falsi_observed, RegulaFalsiCfg, RegulaFalsiError};
use numeric_roots::root_finding::report::{RootFindingReport, Stencil, TerminationReason};

type TestResult = Result<(), RegulaFalsiError>;

// real root of x^3 - x - 2
const CUBIC_ROOT: f64 = 1.521_379_706_804_567_6;

fn quiet() -> RegulaFalsiCfg {
    RegulaFalsiCfg::new().set_verbose(false)
}

fn bounds(res: &RootFindingReport) -> (f64, f64) {
    match res.stencil {
        Stencil::Bracket { bounds } => (bounds[0], bounds[1]),
        _ => panic!("expected Bracket stencil"),
    }
}

#[test]
fn cubic_right_endpoint_stagnates() -> TestResult {
    let f   = |x: f64| x.powi(3) - x - 2.0;
    let cfg = quiet().set_max_iter(20)?;
    let res = regula_falsi(f, 1.0, 2.0, cfg)?;

    // b = 2 never moves, so |b - a| tends to 2 - root, not to 0
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 20);
    assert_eq!(bounds(&res).1, 2.0);
    assert!(res.errors.iter().all(|&e| e > 0.47));
    assert_abs_diff_eq!(res.root, CUBIC_ROOT, epsilon = 1e-8);
    Ok(())
}

#[test]
fn cubic_default_config_creeps_to_root() -> TestResult {
    let f   = |x: f64| x.powi(3) - x - 2.0;
    let res = regula_falsi(f, 1.0, 2.0, quiet())?;

    // the width never drops below 2 - root, so only f(p) == 0 can end it
    assert!(res.converged());
    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    assert!(res.iterations > 20, "took {} iterations", res.iterations);
    assert_eq!(bounds(&res).1, 2.0);
    assert_abs_diff_eq!(res.root, CUBIC_ROOT, epsilon = 1e-12);
    assert_eq!(res.f_root, 0.0);
    Ok(())
}

#[test]
fn cubic_first_step_is_false_position() -> TestResult {
    let f   = |x: f64| x.powi(3) - x - 2.0;
    let cfg = quiet().set_max_iter(1)?;
    let res = regula_falsi(f, 1.0, 2.0, cfg)?;

    assert_abs_diff_eq!(res.root, 4.0 / 3.0, epsilon = 1e-15);
    assert_eq!(bounds(&res), (res.root, 2.0));
    Ok(())
}

#[test]
fn sqrt2_width_stalls_at_fixed_endpoint() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = quiet().set_max_iter(10)?;
    let res = regula_falsi(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 10);
    assert_eq!(res.solution(), None);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-6);
    assert_abs_diff_eq!(res.last_error().unwrap(), 2.0 - 2.0_f64.sqrt(), epsilon = 1e-6);
    Ok(())
}

#[test]
fn loose_tolerance_is_reached() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = quiet().set_tolerance(1.0)?;
    let res = regula_falsi(f, 0.0, 2.0, cfg)?;

    // p1 = 1 leaves width 1, p2 = 4/3 leaves width 2/3
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.iterations, 2);
    assert_abs_diff_eq!(res.root, 4.0 / 3.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn linear_function_is_exact_in_one_step() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = regula_falsi(f, 0.0, 10.0, quiet())?;

    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    assert_eq!(res.root, 3.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.errors.len(), 1);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let err = regula_falsi(f, -1.0, 1.0, quiet()).unwrap_err();

    assert!(matches!(err, RegulaFalsiError::InvalidBracket { a, b, .. } if a == -1.0 && b == 1.0));
}

#[test]
fn degenerate_interpolation_is_reported() {
    let f = |x: f64| if x < 0.0 { -f64::MAX } else { f64::MAX };
    let mut iterations = 0;
    let mut failed_errors = None;
    let mut observer = |e: &Event<'_>| match e {
        Event::Iteration { .. }      => iterations += 1,
        Event::Failed { errors, .. } => failed_errors = Some(errors.len()),
        Event::Finished { .. }       => {}
    };

    let err = regula_falsi_observed(f, -1.0, 1.0, quiet(), &mut observer).unwrap_err();

    assert!(matches!(err, RegulaFalsiError::DegenerateInterpolation { a, b, .. } if a == -1.0 && b == 1.0));
    assert_eq!(iterations, 0);
    assert_eq!(failed_errors, Some(0));
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = regula_falsi(f, -1.0, 5.0, quiet()).unwrap_err();

    assert!(matches!(
        err,
        RegulaFalsiError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()
    ));
}

#[test]
fn invalid_bounds() {
    let f   = |x: f64| x;
    let err = regula_falsi(f, f64::NEG_INFINITY, 1.0, quiet()).unwrap_err();
    assert!(matches!(err, RegulaFalsiError::InvalidBounds { .. }));
}
