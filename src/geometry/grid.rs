use std::ops::{Index, IndexMut};

/// Owned n×n node storage, row-major, indexed by `(i, j)`.
///
/// Every grid-shaped quantity in the pipeline (reference positions, displaced
/// positions, deformation gradients, strain tensors, principal strains) lives
/// in one of these. Grids are produced once per analysis and handed out by
/// value; no stage mutates another stage's grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2<T> {
    n: usize,
    data: Vec<T>,
}

impl<T> Grid2<T> {
    /// Build a grid by evaluating `f(i, j)` at every node.
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        assert!(n > 0, "Grid side must be positive, got {}", n);
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// Wrap a row-major vector of n·n values.
    pub fn from_vec(n: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            n * n,
            "Grid data length {} does not match {}x{} nodes",
            data.len(),
            n,
            n
        );
        Self { n, data }
    }

    /// Nodes per side.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Row-major view of all nodes.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Indices of interior nodes, the ones with both neighbors along each
    /// axis: `1..n-1` × `1..n-1`.
    pub fn interior_indices(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n;
        (1..n.saturating_sub(1)).flat_map(move |i| (1..n - 1).map(move |j| (i, j)))
    }

    /// True for nodes on the outermost ring.
    pub fn is_boundary(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i == self.n - 1 || j == self.n - 1
    }
}

impl<T: Clone> Grid2<T> {
    /// Grid with every node set to `value`.
    pub fn filled(n: usize, value: T) -> Self {
        assert!(n > 0, "Grid side must be positive, got {}", n);
        Self {
            n,
            data: vec![value; n * n],
        }
    }
}

impl<T> Index<(usize, usize)> for Grid2<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.n && j < self.n,
            "Grid index ({}, {}) out of bounds for {}x{} grid",
            i,
            j,
            self.n,
            self.n
        );
        &self.data[i * self.n + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.n && j < self.n,
            "Grid index ({}, {}) out of bounds for {}x{} grid",
            i,
            j,
            self.n,
            self.n
        );
        &mut self.data[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_layout() {
        let g = Grid2::from_fn(3, |i, j| 10 * i + j);
        assert_eq!(g.n(), 3);
        assert_eq!(g[(0, 0)], 0);
        assert_eq!(g[(0, 2)], 2);
        assert_eq!(g[(2, 1)], 21);
        assert_eq!(g.as_slice(), &[0, 1, 2, 10, 11, 12, 20, 21, 22]);
    }

    #[test]
    fn test_interior_indices() {
        let g = Grid2::filled(4, 0.0);
        let interior: Vec<_> = g.interior_indices().collect();
        assert_eq!(interior, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
        for &(i, j) in &interior {
            assert!(!g.is_boundary(i, j));
        }
        assert!(g.is_boundary(0, 2));
        assert!(g.is_boundary(3, 0));
    }

    #[test]
    fn test_filled_and_mutation() {
        let mut g = Grid2::filled(3, 1.5);
        g[(1, 1)] = 7.0;
        assert_eq!(g[(1, 1)], 7.0);
        assert_eq!(g[(0, 1)], 1.5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let g = Grid2::filled(3, 0.0);
        let _ = g[(3, 0)];
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_from_vec_wrong_length() {
        let _ = Grid2::from_vec(3, vec![0.0; 8]);
    }
}
