/// Reference-configuration geometry: material points, planar bodies and the
/// structured node grids every analysis stage runs over.

pub mod grid;
pub mod material_point;
pub mod body;

pub use grid::Grid2;
pub use material_point::MaterialPoint;
pub use body::{Body, SquareBody};
