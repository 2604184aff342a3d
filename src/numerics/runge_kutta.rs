use nalgebra::Vector2;

/// Two-stage explicit Runge–Kutta rule (the explicit trapezoidal method).
///
/// Butcher tableau:
/// ```text
///  0 |  0    0
///  1 |  1    0
/// ---+----------
///    | 1/2  1/2
/// ```
///
/// Second-order accurate, exact for constant right-hand sides. The rule
/// carries no state beyond its tableau, so one `step` call is independent of
/// every other and the same rule serves unrelated integrations.
pub struct RungeKutta2;

impl RungeKutta2 {
    const C2: f64 = 1.0;
    const A21: f64 = 1.0;
    const B1: f64 = 0.5;
    const B2: f64 = 0.5;

    /// Advance `x` from `t` to `t + h` under dx/dt = f(t, x).
    ///
    /// `f` must return a vector of the same shape as `x`. Arithmetic failures
    /// (non-finite values out of `f`) are not detected here; they propagate
    /// into the returned state for the caller to spot.
    pub fn step<F>(f: &F, t: f64, x: &Vector2<f64>, h: f64) -> Vector2<f64>
    where
        F: Fn(f64, &Vector2<f64>) -> Vector2<f64>,
    {
        let k1 = f(t, x);
        let k2 = f(t + Self::C2 * h, &(x + h * Self::A21 * k1));
        x + h * (Self::B1 * k1 + Self::B2 * k2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_for_constant_rhs() {
        // k1 = k2 for a constant derivative, so one step lands exactly
        let f = |_t: f64, _x: &Vector2<f64>| Vector2::new(3.0, -2.0);
        let x = RungeKutta2::step(&f, 0.0, &Vector2::new(1.0, 1.0), 0.25);
        assert_relative_eq!(x.x, 1.75, epsilon = 1e-15);
        assert_relative_eq!(x.y, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_matches_trapezoidal_formula() {
        // dx/dt = -x: one explicit trapezoidal step is x*(1 - h + h^2/2)
        let f = |_t: f64, x: &Vector2<f64>| -x;
        let h = 0.1;
        let x0 = Vector2::new(2.0, -4.0);
        let x1 = RungeKutta2::step(&f, 0.0, &x0, h);
        let factor = 1.0 - h + h * h / 2.0;
        assert_relative_eq!(x1.x, x0.x * factor, epsilon = 1e-14);
        assert_relative_eq!(x1.y, x0.y * factor, epsilon = 1e-14);
    }

    #[test]
    fn test_time_dependence_enters_second_stage() {
        // dx/dt = (t, 0): k1 = t, k2 = t + h, step = x + h*(t + h/2)
        let f = |t: f64, _x: &Vector2<f64>| Vector2::new(t, 0.0);
        let (t, h) = (1.0, 0.5);
        let x1 = RungeKutta2::step(&f, t, &Vector2::zeros(), h);
        assert_relative_eq!(x1.x, h * (t + h / 2.0), epsilon = 1e-14);
    }

    #[test]
    fn test_nonfinite_rhs_propagates() {
        let f = |_t: f64, _x: &Vector2<f64>| Vector2::new(f64::NAN, 0.0);
        let x = RungeKutta2::step(&f, 0.0, &Vector2::zeros(), 0.1);
        assert!(x.x.is_nan());
    }
}
