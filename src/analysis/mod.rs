/// Finite-strain analysis: deformation gradients and Almansi strain over a
/// structured reference grid.

pub mod strain;

pub use strain::{
    compute_almansi_and_principal, compute_deformation_gradient, DeformationAnalysis,
    DeformationAnalyzer,
};
