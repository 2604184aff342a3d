/// Prescribed velocity fields v(t, x).
///
/// Field evaluation is a pure function: implementations must not cache the
/// last-computed components or any other scratch state on themselves, so a
/// single field instance can serve parallel per-point sweeps.

use nalgebra::Vector2;

/// A time-dependent planar velocity field.
///
/// Implementations requiring a restricted time domain (e.g. t > 0 for a
/// logarithmic dependency) document that precondition themselves; the
/// integrators pass t through unchecked and let non-finite values propagate.
pub trait VelocityField: Sync {
    fn velocity(&self, t: f64, x: &Vector2<f64>) -> Vector2<f64>;
}

/// Any `Sync` closure of (t, x) is a velocity field.
impl<F> VelocityField for F
where
    F: Fn(f64, &Vector2<f64>) -> Vector2<f64> + Sync,
{
    fn velocity(&self, t: f64, x: &Vector2<f64>) -> Vector2<f64> {
        self(t, x)
    }
}

/// v = (−eᵗ·x₁, −ln(t)·x₂).
///
/// Defined for t > 0 only; evaluating at t ≤ 0 yields non-finite components
/// which flow through the integration unmasked.
#[derive(Debug, Clone)]
pub struct ExpLogField;

impl VelocityField for ExpLogField {
    fn velocity(&self, t: f64, x: &Vector2<f64>) -> Vector2<f64> {
        Vector2::new(-t.exp() * x.x, -t.ln() * x.y)
    }
}

/// Rigid translation at a constant velocity. RK2 integrates this exactly.
#[derive(Debug, Clone)]
pub struct UniformField {
    pub value: Vector2<f64>,
}

impl UniformField {
    pub fn new(c1: f64, c2: f64) -> Self {
        Self {
            value: Vector2::new(c1, c2),
        }
    }
}

impl VelocityField for UniformField {
    fn velocity(&self, _t: f64, _x: &Vector2<f64>) -> Vector2<f64> {
        self.value
    }
}

/// v = (a·x₁, b·x₂), the axis-aligned linear field.
///
/// Has the closed-form solution x(t) = (x₁₀·e^{a(t−t₀)}, x₂₀·e^{b(t−t₀)}),
/// which makes it the reference case for convergence checks.
#[derive(Debug, Clone)]
pub struct LinearField {
    pub a: f64,
    pub b: f64,
}

impl LinearField {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Analytic solution of dx/dt = v(t, x) from (t0, x0).
    pub fn exact_solution(&self, x0: &Vector2<f64>, t0: f64, t: f64) -> Vector2<f64> {
        Vector2::new(
            x0.x * (self.a * (t - t0)).exp(),
            x0.y * (self.b * (t - t0)).exp(),
        )
    }
}

impl VelocityField for LinearField {
    fn velocity(&self, _t: f64, x: &Vector2<f64>) -> Vector2<f64> {
        Vector2::new(self.a * x.x, self.b * x.y)
    }
}
