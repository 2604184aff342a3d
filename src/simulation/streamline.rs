use nalgebra::Vector2;
use rayon::prelude::*;

use crate::field::VelocityField;
use crate::numerics::RungeKutta2;

/// Traces instantaneous flow lines of a velocity field frozen at one time.
///
/// The integration parameter s is an auxiliary arc-length-like coordinate,
/// distinct from physical time: the stepper receives s to keep its signature,
/// but the frozen field ignores it.
pub struct StreamlineCalculator<'a, F: VelocityField> {
    field: &'a F,
}

impl<'a, F: VelocityField> StreamlineCalculator<'a, F> {
    pub fn new(field: &'a F) -> Self {
        Self { field }
    }

    /// Trace one streamline seeded at `x0` for the field at time `t_star`.
    ///
    /// Integrates dx/ds = v(t*, x) for `floor(s_max / ds)` steps and returns
    /// the `steps + 1` line points, seed first.
    pub fn integrate_streamline(
        &self,
        x0: &Vector2<f64>,
        t_star: f64,
        s_max: f64,
        ds: f64,
    ) -> Vec<Vector2<f64>> {
        assert!(
            s_max > 0.0,
            "Streamline length must be positive, got {}",
            s_max
        );
        assert!(ds > 0.0, "Streamline step must be positive, got {}", ds);

        let rhs = |_s: f64, x: &Vector2<f64>| self.field.velocity(t_star, x);

        let steps = (s_max / ds).floor() as usize;
        let mut line = Vec::with_capacity(steps + 1);

        let mut s = 0.0;
        let mut x = *x0;
        line.push(x);

        for _ in 0..steps {
            x = RungeKutta2::step(&rhs, s, &x, ds);
            s += ds;
            line.push(x);
        }

        line
    }

    /// Streamlines for many seeds, output order matching seed order.
    ///
    /// Seeds are independent, so the sweep runs in parallel.
    pub fn multiple_streamlines(
        &self,
        seeds: &[Vector2<f64>],
        t_star: f64,
        s_max: f64,
        ds: f64,
    ) -> Vec<Vec<Vector2<f64>>> {
        assert!(
            s_max > 0.0,
            "Streamline length must be positive, got {}",
            s_max
        );
        assert!(ds > 0.0, "Streamline step must be positive, got {}", ds);

        seeds
            .par_iter()
            .map(|x0| self.integrate_streamline(x0, t_star, s_max, ds))
            .collect()
    }
}
