//! tests for the brent root finding algorithm
use approx::assert_abs_diff_eq;
use scalar_roots::root_finding::bisection::{bisection, BisectionCfg};
use scalar_roots::root_finding::brent::{brent, solve, BrentCfg, BrentError};
use scalar_roots::root_finding::errors::BracketError;
use scalar_roots::root_finding::report::{Stencil, TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), BrentError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let eps = 1e-7;

    let res = brent(f, 0.0, 2.0, BrentCfg::new().set_eps(eps)?)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = eps);
    assert!((0.0..=2.0).contains(&res.root));
    assert!(res.iterations > 0);
    assert_eq!(res.algorithm_name, "brent");
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
fn finds_3() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = brent(f, 0.0, 10.0, BrentCfg::new().set_eps(1e-12)?)?;

    assert_abs_diff_eq!(res.root, 3.0, epsilon = 1e-12);
    assert!(res.iterations <= 3);
    Ok(())
}

#[test]
fn fewer_evaluations_than_bisection() -> TestResult {
    let f   = |x: f64| (-x * x).exp() - (-(x - 3.0) * (x - 3.0) / 3.0).exp();
    let eps = 1e-10;

    let br  = brent(f, 0.0, 2.0, BrentCfg::new().set_eps(eps)?)?;
    let bis = bisection(f, 0.0, 2.0, BisectionCfg::new().set_eps(eps).unwrap()).unwrap();

    assert!(br.evaluations < bis.evaluations);
    assert_abs_diff_eq!(br.root, bis.root, epsilon = 1e-9);
    Ok(())
}

#[test]
fn bracket_never_grows_and_keeps_root() -> TestResult {
    let cases: [(fn(f64) -> f64, f64, f64, f64); 3] = [
        (|x| x * x - 2.0,               0.0, 2.0, std::f64::consts::SQRT_2),
        (|x| x.abs() - (-x).exp(),      0.0, 2.0, 0.567_143_290_409_783_8),
        (|x| x * x * x - x - 2.0,       1.0, 2.0, 1.521_379_706_804_567_5),
    ];

    for (f, xl, xu, root) in cases {
        let mut prev_width = xu - xl;
        for cap in 1..=30 {
            let cfg = BrentCfg::new().set_eps(1e-12)?.set_max_iter(cap)?;
            let res = brent(f, xl, xu, cfg)?;

            let Stencil::Bracket { bounds: [lo, hi] } = res.stencil else {
                panic!("brent must report a bracket stencil");
            };
            let width = hi - lo;

            assert!(width <= prev_width, "bracket grew at cap {cap}: {prev_width} -> {width}");
            assert!(lo - 1e-12 <= root && root <= hi + 1e-12, "root left [{lo}, {hi}] at cap {cap}");
            prev_width = width;
        }
    }
    Ok(())
}

#[test]
fn exact_root_at_endpoint() -> TestResult {
    let f   = |x: f64| x * x - x.atan();
    let res = brent(f, 0.0, 0.5, BrentCfg::new().set_eps(1e-7)?)?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 2);
    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    Ok(())
}

#[test]
fn reversed_bracket_is_invalid() {
    let err = solve(|x: f64| x - 0.5, 1.0, 0.0, 1e-7).unwrap_err();
    assert!(matches!(
        err,
        BrentError::InvalidBracket(BracketError::Reversed { xl, xu }) if xl == 1.0 && xu == 0.0
    ));
}

#[test]
fn same_sign_endpoints_are_invalid() {
    let err = solve(|x: f64| x * x + 1.0, 0.0, 1.0, 1e-7).unwrap_err();
    assert!(matches!(err, BrentError::InvalidBracket(BracketError::NoSignChange { .. })));
}

#[test]
fn degenerate_bracket_without_root_is_invalid() {
    let err = solve(|x: f64| x - 0.5, 1.0, 1.0, 1e-7).unwrap_err();
    assert!(matches!(err, BrentError::InvalidBracket(BracketError::NoSignChange { .. })));
}

#[test]
fn exhausted_bound_returns_nan() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BrentCfg::new().set_eps(1e-12)?.set_max_iter(2)?;
    let res = brent(f, 0.0, 2.0, cfg)?;

    assert!(res.root.is_nan());
    assert!(res.root_or_nan().is_nan());
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.evaluations, 4);
    Ok(())
}

#[test]
fn single_precision() -> TestResult {
    let f    = |x: f32| x * x - 2.0;
    let root = solve(f, 0.0_f32, 2.0, 1e-4)?;

    assert_abs_diff_eq!(root, 2.0_f32.sqrt(), epsilon = 1e-3);
    Ok(())
}
