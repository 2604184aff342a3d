/// Integration drivers built on the Runge–Kutta stepper: material-point
/// trajectories through time and instantaneous streamlines at fixed time.

pub mod trajectory;
pub mod streamline;

pub use trajectory::{Trajectory, TrajectorySimulator};
pub use streamline::StreamlineCalculator;
