//! Run configuration for kinematics analyses.
//!
//! Reads TOML configuration files and provides structured parameters for the
//! body geometry, the trajectory window, the strain analysis and the
//! streamline tracing.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main run configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    pub body: BodyConfig,
    pub trajectory: TrajectoryConfig,
    pub strain: StrainConfig,
    pub streamlines: StreamlineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BodyConfig {
    /// Square side length
    pub side: f64,
    /// Square center (x1, x2)
    pub center: [f64; 2],
    /// Material points per side for trajectory plots
    pub n_per_side: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrajectoryConfig {
    /// Initial time (fields with a logarithmic dependency need t0 > 0)
    pub t0: f64,
    /// Final time
    pub t1: f64,
    /// Fixed integration step
    pub dt: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StrainConfig {
    /// Reference-grid nodes per side (>= 3 so interior nodes exist)
    pub n_per_side: usize,
    /// Instant at which strain is evaluated
    pub t_target: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StreamlineConfig {
    /// Fixed physical time the field is frozen at
    pub t_star: f64,
    /// Arc-length extent of each line
    pub s_max: f64,
    /// Arc-length step
    pub ds: f64,
    /// Seed window
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Seeds per side of the window lattice
    pub seeds_per_side: usize,
}

impl StreamlineConfig {
    /// Uniform lattice of seed points covering the window, row-major.
    pub fn seed_points(&self) -> Vec<Vector2<f64>> {
        let n = self.seeds_per_side;
        assert!(n >= 2, "Seed lattice needs at least 2 per side, got {}", n);

        let mut seeds = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let fx = i as f64 / (n - 1) as f64;
                let fy = j as f64 / (n - 1) as f64;
                seeds.push(Vector2::new(
                    self.x_min + fx * (self.x_max - self.x_min),
                    self.y_min + fy * (self.y_max - self.y_min),
                ));
            }
        }
        seeds
    }
}

impl Default for RunConfig {
    /// Parameters of the reference scenario: side-2 square in the third
    /// quadrant, exp/log field, strain at t = 2 on an 11×11 grid.
    fn default() -> Self {
        Self {
            body: BodyConfig {
                side: 2.0,
                center: [-2.0, -2.0],
                n_per_side: 6,
            },
            trajectory: TrajectoryConfig {
                t0: 1.0,
                t1: 2.0,
                dt: 0.01,
            },
            strain: StrainConfig {
                n_per_side: 11,
                t_target: 2.0,
            },
            streamlines: StreamlineConfig {
                t_star: 1.5,
                s_max: 1.0,
                ds: 0.01,
                x_min: -4.0,
                x_max: 0.0,
                y_min: -4.0,
                y_max: 0.0,
                seeds_per_side: 15,
            },
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: RunConfig = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject parameter sets the kinematics core would refuse anyway, with a
    /// message naming the offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.body.side <= 0.0 {
            return Err(format!("body.side must be positive, got {}", self.body.side));
        }
        if self.body.n_per_side < 2 {
            return Err(format!(
                "body.n_per_side must be at least 2, got {}",
                self.body.n_per_side
            ));
        }
        if self.trajectory.t1 <= self.trajectory.t0 {
            return Err(format!(
                "trajectory window must run forward: t0 = {}, t1 = {}",
                self.trajectory.t0, self.trajectory.t1
            ));
        }
        if self.trajectory.dt <= 0.0 {
            return Err(format!(
                "trajectory.dt must be positive, got {}",
                self.trajectory.dt
            ));
        }
        if self.strain.n_per_side < 3 {
            return Err(format!(
                "strain.n_per_side must be at least 3, got {}",
                self.strain.n_per_side
            ));
        }
        if self.strain.t_target <= self.trajectory.t0 {
            return Err(format!(
                "strain.t_target must lie past t0 = {}, got {}",
                self.trajectory.t0, self.strain.t_target
            ));
        }
        if self.streamlines.s_max <= 0.0 || self.streamlines.ds <= 0.0 {
            return Err(format!(
                "streamline extents must be positive: s_max = {}, ds = {}",
                self.streamlines.s_max, self.streamlines.ds
            ));
        }
        Ok(())
    }

    /// Print configuration summary.
    pub fn print_summary(&self) {
        println!("═══════════════════════════════════════════════════════════════");
        println!("  Kinematics Run Configuration");
        println!("═══════════════════════════════════════════════════════════════");
        println!("Body:");
        println!(
            "  Square: side {:.2}, center ({:.2}, {:.2})",
            self.body.side, self.body.center[0], self.body.center[1]
        );
        println!("  Material points: {0} × {0}", self.body.n_per_side);

        println!("\nTrajectories:");
        println!(
            "  Window: t = {:.3} → {:.3}, dt = {:.4}",
            self.trajectory.t0, self.trajectory.t1, self.trajectory.dt
        );

        println!("\nStrain analysis:");
        println!(
            "  Grid: {0} × {0} nodes, target time t = {1:.3}",
            self.strain.n_per_side, self.strain.t_target
        );

        println!("\nStreamlines:");
        println!(
            "  t* = {:.3}, s ∈ [0, {:.2}], ds = {:.4}",
            self.streamlines.t_star, self.streamlines.s_max, self.streamlines.ds
        );
        println!(
            "  Seeds: {0} × {0} over [{1:.1}, {2:.1}] × [{3:.1}, {4:.1}]",
            self.streamlines.seeds_per_side,
            self.streamlines.x_min,
            self.streamlines.x_max,
            self.streamlines.y_min,
            self.streamlines.y_max
        );
        println!("═══════════════════════════════════════════════════════════════\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = RunConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: RunConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.strain.n_per_side, config.strain.n_per_side);
        assert_eq!(parsed.trajectory.dt, config.trajectory.dt);
    }

    #[test]
    fn test_validate_rejects_backward_window() {
        let mut config = RunConfig::default();
        config.trajectory.t1 = config.trajectory.t0;
        let err = config.validate().unwrap_err();
        assert!(err.contains("run forward"));
    }

    #[test]
    fn test_validate_rejects_small_grid() {
        let mut config = RunConfig::default();
        config.strain.n_per_side = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_points_cover_window_corners() {
        let config = RunConfig::default();
        let seeds = config.streamlines.seed_points();
        assert_eq!(seeds.len(), 15 * 15);
        assert_eq!(seeds[0], Vector2::new(-4.0, -4.0));
        assert_eq!(seeds[seeds.len() - 1], Vector2::new(0.0, 0.0));
    }
}
