use nalgebra::Vector2;

use crate::geometry::{Grid2, MaterialPoint};

/// Planar body able to seed the kinematics pipeline.
///
/// The kinematics core only ever asks a body for its reference lattice and
/// its outline, so new shapes plug in here without touching the integrators
/// or the strain analysis.
pub trait Body: Sync {
    /// Uniform n×n lattice of reference positions covering the body.
    ///
    /// Node `(i, j)` carries coordinate `(X1_i, X2_j)`: index `i` walks axis 1,
    /// index `j` walks axis 2. Spacing along each axis is constant, which the
    /// central-difference gradient relies on.
    fn grid_points(&self, n_per_side: usize) -> Grid2<Vector2<f64>>;

    /// Material points on the same lattice, row-major order.
    fn material_points(&self, n_per_side: usize) -> Vec<MaterialPoint>;

    /// Closed outline polyline (first vertex repeated last).
    fn boundary_vertices(&self) -> Vec<Vector2<f64>>;
}

/// Axis-aligned square of side `side` centered at `center`.
#[derive(Debug, Clone)]
pub struct SquareBody {
    pub side: f64,
    pub center: Vector2<f64>,
}

impl SquareBody {
    pub fn new(side: f64, center: Vector2<f64>) -> Self {
        assert!(side > 0.0, "Square side must be positive, got {}", side);
        Self { side, center }
    }

    /// k-th of n evenly spaced coordinates along `axis`, spanning the square.
    fn lattice_coordinate(&self, axis: usize, k: usize, n: usize) -> f64 {
        let half = self.side / 2.0;
        let lo = self.center[axis] - half;
        lo + self.side * (k as f64) / ((n - 1) as f64)
    }
}

impl Body for SquareBody {
    fn grid_points(&self, n_per_side: usize) -> Grid2<Vector2<f64>> {
        assert!(
            n_per_side >= 2,
            "Lattice needs at least 2 nodes per side, got {}",
            n_per_side
        );
        Grid2::from_fn(n_per_side, |i, j| {
            Vector2::new(
                self.lattice_coordinate(0, i, n_per_side),
                self.lattice_coordinate(1, j, n_per_side),
            )
        })
    }

    fn material_points(&self, n_per_side: usize) -> Vec<MaterialPoint> {
        self.grid_points(n_per_side)
            .as_slice()
            .iter()
            .map(|x| MaterialPoint::new(*x))
            .collect()
    }

    fn boundary_vertices(&self) -> Vec<Vector2<f64>> {
        let half = self.side / 2.0;
        let (x0, y0) = (self.center.x, self.center.y);
        vec![
            Vector2::new(x0 - half, y0 - half),
            Vector2::new(x0 + half, y0 - half),
            Vector2::new(x0 + half, y0 + half),
            Vector2::new(x0 - half, y0 + half),
            Vector2::new(x0 - half, y0 - half),
        ]
    }
}
