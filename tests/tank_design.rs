//! End-to-end checks of both tank topologies through the public API.

use std::thread;

use approx::assert_relative_eq;
use vfo_designer::prelude::*;
use vfo_designer::tank::{parallel, progressive};

// ── Parallel tank ─────────────────────────────────────────────────

#[test]
fn test_eighty_metre_parallel_tank() {
    let solver = ParallelTankSolver::from_values(10.0e-12, 365.0e-12, 100.0e-12, 3.5e6, 4.0e6)
        .expect("valid inputs");
    let design = solver.solve().expect("feasible design");

    assert!(design.parallel_capacitance > 0.0);
    assert!(design.inductance > 0.0);

    let samples: Vec<_> = solver.sweep(&design, 1000).into_iter().collect();
    assert_relative_eq!(samples[0].frequency, 4.0e6, max_relative = 1.0e-6);
    assert_relative_eq!(samples[999].frequency, 3.5e6, max_relative = 1.0e-6);
}

#[test]
fn test_parallel_batch_table_matches_default_sweep() {
    let variable = VariableCapacitor::new(10.0e-12, 365.0e-12).unwrap();
    let band = FrequencyRange::new(3.5e6, 4.0e6).unwrap();
    let batch = solve_batch(variable, band, &BatchConfig::default()).unwrap();

    // 1 pF, 1.67 pF and 2.78 pF of padding leave too little swing for 3.5-4.0 MHz.
    assert_eq!(batch.failures.len(), 3);
    assert_eq!(batch.rows.len(), 7);
    for row in &batch.rows {
        assert_relative_eq!(row.frequency_at(10.0e-12), 4.0e6, max_relative = 1.0e-6);
        assert_relative_eq!(row.frequency_at(365.0e-12), 3.5e6, max_relative = 1.0e-6);
    }

    let mut table = Vec::new();
    write_parallel_table(&batch.rows, &mut table).unwrap();
    let table = String::from_utf8(table).unwrap();
    assert_eq!(table.lines().count(), 2 + batch.rows.len());

    let mut skipped = Vec::new();
    write_failures(&batch.failures, &mut skipped).unwrap();
    assert_eq!(String::from_utf8(skipped).unwrap().lines().count(), 3);
}

#[test]
fn test_parallel_degenerate_inputs() {
    assert!(parallel::solve(10.0e-12, 365.0e-12, 100.0e-12, 4.0e6, 4.0e6)
        .unwrap_err()
        .is_invalid_input());
    assert!(parallel::solve(365.0e-12, 365.0e-12, 100.0e-12, 3.5e6, 4.0e6)
        .unwrap_err()
        .is_invalid_input());
    assert!(parallel::solve(365.0e-12, 10.0e-12, 100.0e-12, 3.5e6, 4.0e6)
        .unwrap_err()
        .is_invalid_input());
}

// ── Progressive tank ──────────────────────────────────────────────

#[test]
fn test_twenty_metre_progressive_tank() {
    let design = progressive::solve(0.784e-6, 15.0e-12, 145.0e-12, 14.225e6, 14.350e6)
        .expect("feasible design");
    assert!(design.c2 > 0.0);
    assert!(design.c3 > 0.0);

    let curve = design.sweep(1000);
    let first = curve.get(0).unwrap();
    let last = curve.get(999).unwrap();
    assert_relative_eq!(first.frequency, 14.350e6, max_relative = 1.0e-6);
    assert_relative_eq!(last.frequency, 14.225e6, max_relative = 1.0e-6);
    assert!(curve
        .iter()
        .zip(curve.iter().skip(1))
        .all(|(a, b)| b.frequency <= a.frequency));
}

#[test]
fn test_progressive_infeasible_is_reported_not_nan() {
    let err = progressive::solve(0.784e-6, 0.5e-12, 145.0e-12, 14.0e6, 14.35e6).unwrap_err();
    assert!(err.is_infeasible());
}

#[test]
fn test_progressive_tank_rings_at_band_edges() {
    let design = progressive::solve(0.784e-6, 15.0e-12, 145.0e-12, 14.225e6, 14.350e6).unwrap();
    let at_edge = design.impedance(0.0, angular_frequency(14.350e6)).norm();
    let off_band = design.impedance(0.0, angular_frequency(13.0e6)).norm();
    assert!(at_edge > 100.0 * off_band);
}

// ── Shared behaviour ──────────────────────────────────────────────

#[test]
fn test_solvers_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let c_s = 47.0e-12 * f64::from(i + 1);
                let p = parallel::solve(10.0e-12, 365.0e-12, c_s, 3.5e6, 4.0e6).unwrap();
                let q = progressive::solve(0.784e-6, 15.0e-12, 145.0e-12, 14.225e6, 14.35e6).unwrap();
                (p, q)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (_, q) in &results {
        assert_eq!(q, &results[0].1);
    }
}

#[test]
fn test_curve_csv_for_plotting() {
    let design = progressive::solve(0.784e-6, 15.0e-12, 145.0e-12, 14.225e6, 14.350e6).unwrap();
    let curves = [LabelledCurve {
        label: None,
        curve: design.sweep(3),
    }];
    let mut csv = Vec::new();
    write_curves_csv(&curves, &mut csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    let rows: Vec<_> = csv.lines().skip(1).collect();
    assert_eq!(rows.len(), 3);
    let fields: Vec<_> = rows[0].split(',').collect();
    assert_eq!(fields[0], "");
    assert_eq!(fields[1], "0");
    let mhz: f64 = fields[2].parse().unwrap();
    assert_relative_eq!(mhz, 14.35, max_relative = 1.0e-6);
}
