//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;
use scalar_roots::root_finding::bisection::{bisection, solve, BisectionCfg, BisectionError};
use scalar_roots::root_finding::errors::{BracketError, RootFindingError, ToleranceError};
use scalar_roots::root_finding::report::{Stencil, TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let eps = 1e-7;

    let res = bisection(f, 0.0, 2.0, BisectionCfg::new().set_eps(eps)?)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = eps);
    assert!((0.0..=2.0).contains(&res.root));
    // 2 / 2^25 < 1e-7 <= 2 / 2^24
    assert_eq!(res.iterations, 25);
    assert_eq!(res.evaluations, 27);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn final_bracket_contains_root() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new().set_eps(1e-9)?)?;

    let Stencil::Bracket { bounds: [lo, hi] } = res.stencil else {
        panic!("bisection must report a bracket stencil");
    };
    assert!(lo <= 2.0_f64.sqrt() && 2.0_f64.sqrt() <= hi);
    assert!(hi - lo < 1e-9);
    Ok(())
}

#[test]
fn decreasing_function() -> TestResult {
    let f    = |x: f64| 2.0 - x * x;
    let root = solve(f, 0.0, 2.0, 1e-7)?;

    assert_abs_diff_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-7);
    Ok(())
}

#[test]
fn finds_exp_crossing() -> TestResult {
    let f    = |x: f64| x.abs() - (-x).exp();
    let root = solve(f, 0.0, 2.0, 1e-7)?;

    assert_abs_diff_eq!(root, 0.567_143_290_409_783_8, epsilon = 1e-7);
    Ok(())
}

#[test]
fn exact_root_at_endpoint() -> TestResult {
    let f   = |x: f64| x;
    let res = bisection(f, 0.0, 1.0, BisectionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 2);
    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ExactZero);
    Ok(())
}

#[test]
fn exact_root_at_midpoint() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new().set_eps(1e-12)?)?;

    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.evaluations, 3);
    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    Ok(())
}

#[test]
fn reversed_bracket_is_invalid() {
    let f   = |x: f64| x - 0.5;
    let err = solve(f, 1.0, 0.0, 1e-7).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::InvalidBracket(BracketError::Reversed { xl, xu }) if xl == 1.0 && xu == 0.0
    ));
}

#[test]
fn same_sign_endpoints_are_invalid() {
    let f   = |x: f64| x * x + 1.0;
    let err = solve(f, 0.0, 1.0, 1e-7).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::InvalidBracket(BracketError::NoSignChange { fxl, fxu, .. })
        if fxl == 1.0 && fxu == 2.0
    ));
}

#[test]
fn nan_endpoint_is_invalid() {
    let f   = |x: f64| x.sqrt() - 1.0;
    let err = solve(f, -1.0, 4.0, 1e-7).unwrap_err();

    assert!(matches!(err, BisectionError::InvalidBracket(BracketError::NoSignChange { .. })));
}

#[test]
fn bracket_is_checked_with_two_evaluations() {
    let mut calls = 0;
    let f = |x: f64| { calls += 1; x * x + 1.0 };

    assert!(solve(f, -1.0, 1.0, 1e-7).is_err());
    assert_eq!(calls, 2);
}

#[test]
fn exhausted_bound_returns_nan() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_eps(1e-12)?.set_max_iter(3)?;
    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert!(res.root.is_nan());
    assert!(res.f_root.is_nan());
    assert!(!res.is_converged());
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 3);
    assert_eq!(res.evaluations, 5);
    Ok(())
}

#[test]
fn single_precision() -> Result<(), BisectionError> {
    let f    = |x: f32| x * x - 2.0;
    let root = solve(f, 0.0_f32, 2.0, 1e-3)?;

    assert_abs_diff_eq!(root, 2.0_f32.sqrt(), epsilon = 1e-3);
    Ok(())
}

#[test]
fn invalid_eps() {
    let err = solve(|x: f64| x, -1.0, 1.0, 0.0).unwrap_err();
    assert!(matches!(err, BisectionError::Tolerance(ToleranceError::InvalidEps { got }) if got == 0.0));

    let err = BisectionCfg::<f64>::new().set_eps(f64::NAN).unwrap_err();
    assert!(matches!(err, ToleranceError::InvalidEps { .. }));
}

#[test]
fn zero_max_iter_is_invalid() {
    let err = BisectionCfg::<f64>::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}
