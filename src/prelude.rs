//! Convenience re-exports for designing tank circuits.

pub use crate::circuits::{Capacitor, Component, ConnectionKind, Inductor, Network};
pub use crate::constants::*;
pub use crate::errors::TankError;
pub use crate::math::{parallel_capacitance, series_capacitance, Scalar};
pub use crate::report::{
    schematic, write_curves_csv, write_failures, write_parallel_table, write_progressive_table,
    LabelledCurve, Topology,
};
pub use crate::sweep::{linspace, logspace, TuningCurve, TuningCurveIter, TuningSample};
pub use crate::tank::parallel::solve_batch;
pub use crate::tank::{
    BatchConfig, FrequencyRange, ParallelBatch, ParallelTankResult, ParallelTankSolver,
    ProgressiveTankResult, ProgressiveTankSolver, TankNetwork, TankSolver, VariableCapacitor,
};
pub use crate::units::{Capacitance, Farad, Frequency, Henry, Hertz, Inductance, Prefix, Quantity, Unit};
