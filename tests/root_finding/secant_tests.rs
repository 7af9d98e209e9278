//! tests for the secant root finding algorithm
use approx::assert_abs_diff_eq;
use scalar_roots::root_finding::errors::ToleranceError;
use scalar_roots::root_finding::report::{TerminationReason, ToleranceSatisfied};
use scalar_roots::root_finding::secant::{secant, solve, SecantCfg, SecantError};

type TestResult = Result<(), SecantError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let eps = 1e-7;

    let res = secant(f, 1.4, 1.5, SecantCfg::new().set_eps(eps)?)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = eps);
    assert_eq!(res.stencil.stencil().len(), 2);
    assert_eq!(res.algorithm_name, "secant");
    Ok(())
}

#[test]
fn finds_exp_crossing() -> TestResult {
    let f    = |x: f64| x.abs() - (-x).exp();
    let root = solve(f, 0.0, 1.0, 1e-7)?;

    assert_abs_diff_eq!(root, 0.567_143_290_409_783_8, epsilon = 1e-7);
    Ok(())
}

#[test]
fn guesses_need_not_bracket() -> TestResult {
    // f(2) and f(3) are both positive
    let f    = |x: f64| x * x - 2.0;
    let root = solve(f, 2.0, 3.0, 1e-7)?;

    assert_abs_diff_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-7);
    Ok(())
}

#[test]
fn may_converge_outside_initial_guesses() -> TestResult {
    let f    = |x: f64| x * x - 2.0;
    let root = solve(f, 3.0, 4.0, 1e-7)?;

    assert!(root < 3.0);
    assert_abs_diff_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-7);
    Ok(())
}

#[test]
fn linear_function_is_exact() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let res = secant(f, 0.0, 3.0, SecantCfg::new().set_eps(1e-7)?)?;

    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.evaluations, 3);
    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    Ok(())
}

#[test]
fn equal_guesses_propagate_nan() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = secant(f, 1.0, 1.0, SecantCfg::new().set_eps(1e-7)?)?;

    assert!(res.root.is_nan());
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 53);
    assert_eq!(res.evaluations, 2 + 53);
    Ok(())
}

#[test]
fn no_real_root_returns_nan() -> TestResult {
    let f    = |x: f64| x * x + 1.0;
    let root = solve(f, 0.5, 1.0, 1e-7)?;

    assert!(root.is_nan());
    Ok(())
}

#[test]
fn explicit_cap() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let cfg = SecantCfg::new().set_eps(1e-7)?.set_max_iter(4)?;
    let res = secant(f, 0.5, 1.0, cfg)?;

    assert!(!res.is_converged());
    assert_eq!(res.iterations, 4);
    assert_eq!(res.evaluations, 6);
    Ok(())
}

#[test]
fn single_precision() -> TestResult {
    let f    = |x: f32| x * x - 2.0;
    let root = solve(f, 1.4_f32, 1.5, 1e-4)?;

    assert_abs_diff_eq!(root, 2.0_f32.sqrt(), epsilon = 1e-4);
    Ok(())
}

#[test]
fn invalid_eps() {
    let err = solve(|x: f64| x, 0.0, 1.0, -1.0).unwrap_err();
    assert!(matches!(err, SecantError::Tolerance(ToleranceError::InvalidEps { got }) if got == -1.0));
}
