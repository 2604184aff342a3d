use nalgebra::{Matrix2, Vector2};
use rayon::prelude::*;

use crate::field::VelocityField;
use crate::geometry::{Body, Grid2, MaterialPoint};
use crate::simulation::TrajectorySimulator;

/// Bundled outputs of one full strain-analysis run.
///
/// All grids share shape and indexing. Gradient, Almansi and principal
/// values are defined on interior nodes only; the boundary ring carries the
/// zero sentinel since central differences need both neighbors.
#[derive(Debug, Clone)]
pub struct DeformationAnalysis {
    /// Reference positions X on the structured lattice.
    pub reference: Grid2<Vector2<f64>>,
    /// Current positions x(X, t_target), one per reference node.
    pub displaced: Grid2<Vector2<f64>>,
    /// Deformation gradient F = ∂x/∂X at interior nodes.
    pub gradient: Grid2<Matrix2<f64>>,
    /// Almansi strain tensor A = ½(I − F⁻ᵀF⁻¹) at interior nodes.
    pub almansi: Grid2<Matrix2<f64>>,
    /// Larger eigenvalue of A at interior nodes.
    pub principal: Grid2<f64>,
}

/// Computes the Lagrangian reference→current mapping for a body and derives
/// finite-strain measures from it.
pub struct DeformationAnalyzer<'a, B: Body, F: VelocityField> {
    body: &'a B,
    field: &'a F,
}

impl<'a, B: Body, F: VelocityField> DeformationAnalyzer<'a, B, F> {
    pub fn new(body: &'a B, field: &'a F) -> Self {
        Self { body, field }
    }

    /// Reference grid and its image at `t_target`.
    ///
    /// Builds the body's n×n reference lattice and integrates every node's
    /// trajectory independently from `t0` to `t_target` with step `h`,
    /// keeping each trajectory's final position. Nodes share no state, so
    /// the sweep runs in parallel.
    pub fn compute_displacement_grid(
        &self,
        n_per_side: usize,
        t0: f64,
        t_target: f64,
        h: f64,
    ) -> (Grid2<Vector2<f64>>, Grid2<Vector2<f64>>) {
        assert!(
            n_per_side >= 3,
            "Grid needs at least one interior node, got n = {}",
            n_per_side
        );
        assert!(
            t_target > t0,
            "Target time must lie past the initial time: t0 = {}, t_target = {}",
            t0,
            t_target
        );
        assert!(h > 0.0, "Step size must be positive, got {}", h);

        let reference = self.body.grid_points(n_per_side);
        let sim = TrajectorySimulator::new(self.field);

        let finals: Vec<Vector2<f64>> = reference
            .as_slice()
            .par_iter()
            .map(|x0| {
                sim.integrate_point(&MaterialPoint::new(*x0), t0, t_target, h)
                    .final_position()
            })
            .collect();

        let displaced = Grid2::from_vec(n_per_side, finals);
        (reference, displaced)
    }

    /// Full pipeline: displacement grid, deformation gradient, Almansi
    /// tensor and principal strains in one call.
    pub fn analyze(
        &self,
        n_per_side: usize,
        t0: f64,
        t_target: f64,
        h: f64,
    ) -> Result<DeformationAnalysis, String> {
        let (reference, displaced) = self.compute_displacement_grid(n_per_side, t0, t_target, h);
        let gradient = compute_deformation_gradient(&reference, &displaced);
        let (almansi, principal) = compute_almansi_and_principal(&gradient)?;
        Ok(DeformationAnalysis {
            reference,
            displaced,
            gradient,
            almansi,
            principal,
        })
    }
}

/// Deformation gradient F = ∂x/∂X by central finite differences.
///
/// Column b of F holds ∂x/∂X_b. Spacings are read off one pair of adjacent
/// reference nodes per axis; the reference grid is uniform by contract.
/// Boundary nodes keep `Matrix2::zeros()`: with only a one-sided neighbor
/// there is no central difference to take, and no one-sided scheme stands in
/// for it.
pub fn compute_deformation_gradient(
    reference: &Grid2<Vector2<f64>>,
    displaced: &Grid2<Vector2<f64>>,
) -> Grid2<Matrix2<f64>> {
    let n = reference.n();
    assert_eq!(
        n,
        displaced.n(),
        "Reference and displaced grids must share a shape"
    );
    assert!(n >= 3, "Grid needs at least one interior node, got n = {}", n);

    let d_x1 = reference[(1, 0)].x - reference[(0, 0)].x;
    let d_x2 = reference[(0, 1)].y - reference[(0, 0)].y;

    let mut gradient = Grid2::filled(n, Matrix2::zeros());
    for i in 1..n - 1 {
        for j in 1..n - 1 {
            let dx_d1 = (displaced[(i + 1, j)] - displaced[(i - 1, j)]) / (2.0 * d_x1);
            let dx_d2 = (displaced[(i, j + 1)] - displaced[(i, j - 1)]) / (2.0 * d_x2);
            gradient[(i, j)] = Matrix2::new(dx_d1.x, dx_d2.x, dx_d1.y, dx_d2.y);
        }
    }
    gradient
}

/// Almansi strain A = ½(I − F⁻ᵀF⁻¹) and its larger principal value.
///
/// Evaluated per interior node; boundary nodes keep the zero tensor and a
/// zero principal strain. A singular gradient (the local mapping collapsed)
/// is reported as an error naming the node. Interior nodes are independent,
/// so one node's failure leaves every other node's computation untouched;
/// the first failure in index order is the one reported.
///
/// The tensor is symmetrized before the eigensolve, which discards the
/// round-off asymmetry of the finite-difference gradient and keeps the
/// eigenvalues real.
pub fn compute_almansi_and_principal(
    gradient: &Grid2<Matrix2<f64>>,
) -> Result<(Grid2<Matrix2<f64>>, Grid2<f64>), String> {
    let n = gradient.n();
    assert!(n >= 3, "Grid needs at least one interior node, got n = {}", n);

    let interior: Vec<(usize, usize)> = gradient.interior_indices().collect();
    let per_node: Vec<((usize, usize), Matrix2<f64>, f64)> = interior
        .par_iter()
        .map(|&(i, j)| {
            let f = gradient[(i, j)];
            let f_inv = f.try_inverse().ok_or_else(|| {
                format!(
                    "Singular deformation gradient at node ({}, {}): \
                     the local mapping is not invertible for these grid/step parameters",
                    i, j
                )
            })?;
            let g = f_inv.transpose() * f_inv;
            let a = 0.5 * (Matrix2::identity() - g);

            let a_sym = 0.5 * (a + a.transpose());
            let eigenvalues = a_sym.symmetric_eigenvalues();
            let principal = eigenvalues[0].max(eigenvalues[1]);

            Ok(((i, j), a, principal))
        })
        .collect::<Result<Vec<_>, String>>()?;

    let mut almansi = Grid2::filled(n, Matrix2::zeros());
    let mut principal = Grid2::filled(n, 0.0);
    for ((i, j), a, p) in per_node {
        almansi[(i, j)] = a;
        principal[(i, j)] = p;
    }
    Ok((almansi, principal))
}
