//! End-to-end tests for the capm crate
//!
//! Tests complete calculation workflows using only this crate's API.

use std::sync::Mutex;

use capm::{
    expected_return, format_result, validate_inputs, CalculationObserver, CapmCalculator,
    CapmError, CapmInputs, DisplayConfig, ExpectedReturnModel,
};

#[test]
fn e2e_calculate_and_format_workflow() {
    let calc = CapmCalculator::new();
    let display = DisplayConfig::default();

    let inputs = CapmInputs::new(0.03, 1.2, 0.08);
    validate_inputs(&inputs).unwrap();
    let result = calc.expected_return(&inputs);

    assert_eq!(format_result(&display, Some(result)), "Expected Return: 0.09");
}

#[test]
fn e2e_boundary_scenarios() {
    let calc = CapmCalculator::new();
    let display = DisplayConfig::default();

    let low = calc.expected_return(&CapmInputs::new(0.0, 0.0, 1.0));
    assert_eq!(format_result(&display, Some(low)), "Expected Return: 0.00");

    let inverted = calc.expected_return(&CapmInputs::new(1.0, 2.0, 0.0));
    assert_eq!(
        format_result(&display, Some(inverted)),
        "Expected Return: -1.00"
    );
}

#[test]
fn e2e_placeholder_before_first_calculation() {
    let display = DisplayConfig::default();
    assert_eq!(format_result(&display, None), "Expected Return: N/A");
}

#[test]
fn e2e_repeated_calculation_is_idempotent() {
    let calc = CapmCalculator::new();
    let display = DisplayConfig::default();
    let inputs = CapmInputs::new(0.04, 0.9, 0.07);

    let first = format_result(&display, Some(calc.expected_return(&inputs)));
    let second = format_result(&display, Some(calc.expected_return(&inputs)));
    assert_eq!(first, second);
}

#[test]
fn e2e_formula_properties_across_slider_grid() {
    let calc = CapmCalculator::new();

    // Every slider position the surface can produce
    for rf_pos in 0..=100 {
        let rf = rf_pos as f64 * 0.01;
        for beta_pos in (0..=200).step_by(25) {
            let beta = beta_pos as f64 * 0.01;
            for rm_pos in (0..=100).step_by(20) {
                let rm = rm_pos as f64 * 0.01;
                let inputs = CapmInputs::new(rf, beta, rm);
                let result = calc.expected_return(&inputs);
                assert_eq!(result, rf + beta * (rm - rf));
            }
        }
    }
}

#[test]
fn e2e_zero_beta_and_beta_one_properties() {
    for i in 0..=20 {
        let rf = i as f64 * 0.05;
        let rm = 1.0 - i as f64 * 0.04;
        assert_eq!(expected_return(rf, 0.0, rm), rf);
        // Beta-one is exact in real arithmetic but only ulp-close in floats
        assert!((expected_return(rf, 1.0, rm) - rm).abs() < 1e-12);
    }
}

/// Observer that counts invocations, standing in for the shell's log hook.
#[derive(Default)]
struct CountingObserver {
    calculations: Mutex<usize>,
    failures: Mutex<usize>,
}

impl CalculationObserver for CountingObserver {
    fn on_calculation(&self, _inputs: &CapmInputs, _result: f64) {
        *self.calculations.lock().unwrap() += 1;
    }

    fn on_failure(&self, _error: &CapmError) {
        *self.failures.lock().unwrap() += 1;
    }
}

#[test]
fn e2e_observer_injection_workflow() {
    let calc = CapmCalculator::new();
    let observer = CountingObserver::default();
    let inputs = CapmInputs::new(0.02, 1.1, 0.06);

    // The shell's calculation path: validate, compute, notify
    match validate_inputs(&inputs) {
        Ok(()) => {
            let result = calc.expected_return(&inputs);
            observer.on_calculation(&inputs, result);
        }
        Err(err) => observer.on_failure(&err),
    }

    assert_eq!(*observer.calculations.lock().unwrap(), 1);
    assert_eq!(*observer.failures.lock().unwrap(), 0);
}

#[test]
fn e2e_failed_read_reaches_failure_hook() {
    let calc = CapmCalculator::new();
    let observer = CountingObserver::default();
    let inputs = CapmInputs::new(f64::NAN, 1.0, 0.05);

    match validate_inputs(&inputs) {
        Ok(()) => {
            let result = calc.expected_return(&inputs);
            observer.on_calculation(&inputs, result);
        }
        Err(err) => observer.on_failure(&err),
    }

    assert_eq!(*observer.calculations.lock().unwrap(), 0);
    assert_eq!(*observer.failures.lock().unwrap(), 1);
}

#[test]
fn e2e_nan_propagates_when_not_validated() {
    // The raw formula never special-cases non-finite values
    assert!(expected_return(f64::NAN, 1.2, 0.08).is_nan());
}
