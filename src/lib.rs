pub mod geometry;
pub mod field;
pub mod numerics;
pub mod simulation;
pub mod analysis;
pub mod config;

pub use geometry::{Body, Grid2, MaterialPoint, SquareBody};
pub use field::{ExpLogField, LinearField, UniformField, VelocityField};
pub use numerics::RungeKutta2;
pub use simulation::{StreamlineCalculator, Trajectory, TrajectorySimulator};
pub use analysis::{
    compute_almansi_and_principal, compute_deformation_gradient, DeformationAnalysis,
    DeformationAnalyzer,
};
pub use config::RunConfig;
