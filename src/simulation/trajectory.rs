use nalgebra::Vector2;
use rayon::prelude::*;

use crate::field::VelocityField;
use crate::geometry::MaterialPoint;
use crate::numerics::RungeKutta2;

/// Time-ordered samples of one material point's motion.
///
/// Invariants: `times.len() == positions.len() == steps + 1`, `positions[0]`
/// is the point's reference position, and consecutive times differ by the
/// integration step.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub positions: Vec<Vector2<f64>>,
}

impl Trajectory {
    /// Number of samples (steps + 1).
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Position at the last integrated time.
    pub fn final_position(&self) -> Vector2<f64> {
        self.positions[self.positions.len() - 1]
    }

    /// Last integrated time.
    pub fn final_time(&self) -> f64 {
        self.times[self.times.len() - 1]
    }
}

/// Integrates material points through a velocity field with a fixed step.
pub struct TrajectorySimulator<'a, F: VelocityField> {
    field: &'a F,
}

impl<'a, F: VelocityField> TrajectorySimulator<'a, F> {
    pub fn new(field: &'a F) -> Self {
        Self { field }
    }

    /// Integrate one material point from `t0` to `t1` with fixed step `h`.
    ///
    /// `steps = floor((t1 - t0) / h)`; the trajectory carries `steps + 1`
    /// samples. Time labels are produced by the same accumulation that drives
    /// the integration, so a sample's label always equals its integrated
    /// time. When `(t1 - t0)` is not a multiple of `h` the final sample sits
    /// at `t0 + steps·h`, short of `t1` — never past it.
    ///
    /// Non-finite velocity-field output (e.g. a field undefined at t ≤ 0) is
    /// not masked; it shows up as non-finite positions in the result.
    pub fn integrate_point(&self, point: &MaterialPoint, t0: f64, t1: f64, h: f64) -> Trajectory {
        assert!(
            t1 > t0,
            "Integration window must run forward: t0 = {}, t1 = {}",
            t0,
            t1
        );
        assert!(h > 0.0, "Step size must be positive, got {}", h);

        let steps = ((t1 - t0) / h).floor() as usize;
        let rhs = |t: f64, x: &Vector2<f64>| self.field.velocity(t, x);

        let mut times = Vec::with_capacity(steps + 1);
        let mut positions = Vec::with_capacity(steps + 1);

        let mut t = t0;
        let mut x = point.reference_position;
        times.push(t);
        positions.push(x);

        for _ in 0..steps {
            x = RungeKutta2::step(&rhs, t, &x, h);
            t += h;
            times.push(t);
            positions.push(x);
        }

        Trajectory { times, positions }
    }

    /// Integrate a set of points independently; output order matches input
    /// order and each entry keeps the point it belongs to.
    ///
    /// Points never interact (the field is evaluated per point, not as an
    /// n-body problem), so the sweep runs in parallel.
    pub fn integrate_body(
        &self,
        points: &[MaterialPoint],
        t0: f64,
        t1: f64,
        h: f64,
    ) -> Vec<(MaterialPoint, Trajectory)> {
        assert!(
            t1 > t0,
            "Integration window must run forward: t0 = {}, t1 = {}",
            t0,
            t1
        );
        assert!(h > 0.0, "Step size must be positive, got {}", h);

        points
            .par_iter()
            .map(|p| (p.clone(), self.integrate_point(p, t0, t1, h)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ExpLogField, UniformField};
    use approx::assert_relative_eq;

    #[test]
    fn test_rigid_translation_round_trip() {
        // v = (2, -1): exact for RK2, x(t) = x0 + (t - t0) * c
        let field = UniformField::new(2.0, -1.0);
        let sim = TrajectorySimulator::new(&field);
        let point = MaterialPoint::new(Vector2::new(1.0, 1.0));

        let traj = sim.integrate_point(&point, 0.0, 1.0, 0.1);

        assert_eq!(traj.len(), 11);
        assert_eq!(traj.positions[0], point.reference_position);
        assert_relative_eq!(traj.final_time(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(traj.final_position().x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(traj.final_position().y, 0.0, epsilon = 1e-12);

        // Exact at every intermediate sample too
        for (t, x) in traj.times.iter().zip(&traj.positions) {
            assert_relative_eq!(x.x, 1.0 + 2.0 * t, epsilon = 1e-12);
            assert_relative_eq!(x.y, 1.0 - t, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_times_are_strictly_increasing_by_h() {
        let field = UniformField::new(0.0, 0.0);
        let sim = TrajectorySimulator::new(&field);
        let point = MaterialPoint::new(Vector2::zeros());

        let traj = sim.integrate_point(&point, 1.0, 2.0, 0.25);
        assert_eq!(traj.len(), 5);
        for w in traj.times.windows(2) {
            assert_relative_eq!(w[1] - w[0], 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_truncated_window_stops_short_of_t1() {
        // (t1 - t0) = 1 is not a multiple of h = 0.3: 3 steps, last t = 0.9
        let field = UniformField::new(1.0, 0.0);
        let sim = TrajectorySimulator::new(&field);
        let point = MaterialPoint::new(Vector2::zeros());

        let traj = sim.integrate_point(&point, 0.0, 1.0, 0.3);
        assert_eq!(traj.len(), 4);
        assert_relative_eq!(traj.final_time(), 0.9, epsilon = 1e-12);
        // The label equals the integrated time, so position matches it exactly
        assert_relative_eq!(traj.final_position().x, traj.final_time(), epsilon = 1e-12);
    }

    #[test]
    fn test_body_integration_preserves_order() {
        let field = UniformField::new(1.0, 1.0);
        let sim = TrajectorySimulator::new(&field);
        let points = vec![
            MaterialPoint::new(Vector2::new(0.0, 0.0)),
            MaterialPoint::new(Vector2::new(5.0, 0.0)),
            MaterialPoint::new(Vector2::new(0.0, -5.0)),
        ];

        let results = sim.integrate_body(&points, 0.0, 1.0, 0.5);

        assert_eq!(results.len(), 3);
        for (input, (kept, traj)) in points.iter().zip(&results) {
            assert_eq!(input, kept);
            assert_eq!(traj.positions[0], input.reference_position);
        }
        // Independent points: each translated by (1, 1)
        assert_relative_eq!(results[1].1.final_position().x, 6.0, epsilon = 1e-12);
        assert_relative_eq!(results[2].1.final_position().y, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_field_undefined_at_zero_time_propagates() {
        // ln(t) blows up at t = 0; the simulator must not mask it
        let field = ExpLogField;
        let sim = TrajectorySimulator::new(&field);
        let point = MaterialPoint::new(Vector2::new(1.0, 1.0));

        let traj = sim.integrate_point(&point, 0.0, 1.0, 0.5);
        assert!(traj.positions.iter().skip(1).any(|x| !x.y.is_finite()));
    }

    #[test]
    #[should_panic(expected = "must run forward")]
    fn test_backward_window() {
        let field = UniformField::new(0.0, 0.0);
        let sim = TrajectorySimulator::new(&field);
        let point = MaterialPoint::new(Vector2::zeros());
        sim.integrate_point(&point, 1.0, 1.0, 0.1);
    }

    #[test]
    #[should_panic(expected = "Step size must be positive")]
    fn test_nonpositive_step() {
        let field = UniformField::new(0.0, 0.0);
        let sim = TrajectorySimulator::new(&field);
        let point = MaterialPoint::new(Vector2::zeros());
        sim.integrate_point(&point, 0.0, 1.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "must run forward")]
    fn test_body_backward_window_fails_even_for_empty_input() {
        let field = UniformField::new(0.0, 0.0);
        let sim = TrajectorySimulator::new(&field);
        sim.integrate_body(&[], 2.0, 1.0, 0.1);
    }
}
