use nalgebra::Vector2;

/// Identity-bearing position in the reference configuration.
///
/// Immutable after creation: simulators only read it and return trajectories
/// as fresh sequences, the point itself is never moved.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialPoint {
    /// Lagrangian coordinates X of the point in the undeformed body.
    pub reference_position: Vector2<f64>,
}

impl MaterialPoint {
    pub fn new(reference_position: Vector2<f64>) -> Self {
        Self { reference_position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_position_is_stored() {
        let p = MaterialPoint::new(Vector2::new(-2.0, 1.5));
        assert_eq!(p.reference_position, Vector2::new(-2.0, 1.5));
    }
}
