//! Integration tests for the backtest pipeline across estimation methods.

use tailrisk_backtest::{
    run_kupiec_backtest, CalibrationVerdict, DEFAULT_SIGNIFICANCE,
};
use tailrisk_core::prelude::*;
use tailrisk_var::{SimulationConfig, VaRMethod};

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

fn generate_series(n: usize, seed: u64) -> ReturnSeries {
    let values: Vec<f64> = (0..n)
        .map(|i| {
            let h = simple_hash(seed, i as u64);
            (h % 10_001) as f64 / 100_000.0 - 0.05 + i as f64 * 1e-9
        })
        .collect();
    ReturnSeries::new(values).unwrap()
}

#[test]
fn backtest_runs_for_every_method() {
    let series = generate_series(400, 3);
    let methods = [
        VaRMethod::Historical,
        VaRMethod::Parametric,
        VaRMethod::MonteCarlo(SimulationConfig::new(2_000, 42)),
    ];

    for method in methods {
        let report = run_kupiec_backtest(
            &series,
            250,
            Confidence::P95,
            &method,
            DEFAULT_SIGNIFICANCE,
        )
        .unwrap();

        assert_eq!(report.records.len(), 150);
        assert_eq!(report.kupiec.observations, 150);
        let breaches = report.records.iter().filter(|r| r.breached).count();
        assert_eq!(report.kupiec.violations, breaches);
    }
}

#[test]
fn monte_carlo_backtest_is_reproducible() {
    let series = generate_series(320, 9);
    let method = VaRMethod::MonteCarlo(SimulationConfig::new(2_000, 7));

    let a = run_kupiec_backtest(&series, 252, Confidence::P99, &method, 0.05).unwrap();
    let b = run_kupiec_backtest(&series, 252, Confidence::P99, &method, 0.05).unwrap();

    assert_eq!(a.records.len(), b.records.len());
    for (left, right) in a.records.iter().zip(&b.records) {
        assert_eq!(
            left.predicted_var.to_bits(),
            right.predicted_var.to_bits(),
            "step {} diverged",
            left.step
        );
    }
}

#[test]
fn window_too_large_for_every_method() {
    let series = generate_series(100, 1);
    let methods = [
        VaRMethod::Historical,
        VaRMethod::Parametric,
        VaRMethod::MonteCarlo(SimulationConfig::new(1_000, 1)),
    ];

    for method in methods {
        let err = run_kupiec_backtest(&series, 100, Confidence::P95, &method, 0.05).unwrap_err();
        assert_eq!(
            err,
            RiskError::WindowTooLarge {
                window: 100,
                observations: 100
            }
        );
    }
}

#[test]
fn calm_series_reports_insufficient_variation() {
    // Alternating small returns: the realized loss never reaches the
    // window's tail quantile, so no step breaches.
    let values: Vec<f64> = (0..200)
        .map(|i| if i % 2 == 0 { 0.001 } else { -0.001 } + i as f64 * 1e-9)
        .collect();
    let series = ReturnSeries::new(values).unwrap();

    let report = run_kupiec_backtest(
        &series,
        100,
        Confidence::P95,
        &VaRMethod::Historical,
        DEFAULT_SIGNIFICANCE,
    )
    .unwrap();

    assert_eq!(report.kupiec.violations, 0);
    assert_eq!(
        report.kupiec.verdict,
        CalibrationVerdict::InsufficientVariation
    );
    assert_eq!(report.kupiec.lr_statistic, None);
    assert_eq!(report.average_exceedance, None);
}

#[test]
fn report_serializes_for_the_dashboard() {
    let series = generate_series(150, 4);
    let report = run_kupiec_backtest(
        &series,
        100,
        Confidence::P95,
        &VaRMethod::Historical,
        DEFAULT_SIGNIFICANCE,
    )
    .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["records"].is_array());
    assert_eq!(json["records"][0]["step"], 0);
    assert!(json["records"][0]["predicted_var"].is_number());
    assert!(json["kupiec"]["observations"].is_number());
    assert!(json["exception_rate"].is_number());
    // Verdict serializes as the enum name the dashboard matches on.
    let verdict = json["kupiec"]["verdict"].as_str().unwrap();
    assert!(["Accept", "Reject", "InsufficientVariation"].contains(&verdict));
}
