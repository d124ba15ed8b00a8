/// The eight (row, col) offsets around a cell, self excluded.
#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// How neighbor coordinates behave at the edge of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Boundary {
    /// Edges wrap around, the grid is a torus
    #[default]
    Wrapping,
    /// Edges are hard; offsets falling outside the grid are dropped
    Clamped,
}

impl Boundary {
    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Wrapping => "wrapping",
            Boundary::Clamped => "clamped",
        }
    }

    /// Coordinates examined when counting the neighbors of `(row, col)`.
    ///
    /// Under `Wrapping` this always yields 8 coordinates; on grids narrower than
    /// 3 cells some of them repeat or point back at the cell itself. Under
    /// `Clamped` it yields between 0 and 8.
    ///
    /// `(row, col)` must already be inside the `height` x `width` grid.
    /// [`LifeGrid::neighbors`](super::LifeGrid::neighbors) is the checked form.
    pub(crate) fn neighbors(
        self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        debug_assert!(row < height && col < width);
        OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| self.resolve(row, col, dr, dc, height, width))
    }

    fn resolve(
        self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        height: usize,
        width: usize,
    ) -> Option<(usize, usize)> {
        match self {
            Boundary::Wrapping => Some((wrap(row, dr, height), wrap(col, dc, width))),
            Boundary::Clamped => {
                let r = row.checked_add_signed(dr).filter(|&r| r < height)?;
                let c = col.checked_add_signed(dc).filter(|&c| c < width)?;
                Some((r, c))
            }
        }
    }
}

/// Step `index` by `delta` (-1..=1) modulo `len`
fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index + len).wrapping_add_signed(delta) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_corner_reaches_opposite_edges() {
        let mut n: Vec<_> = Boundary::Wrapping.neighbors(0, 0, 4, 5).collect();
        n.sort();
        assert_eq!(
            n,
            vec![(0, 1), (0, 4), (1, 0), (1, 1), (1, 4), (3, 0), (3, 1), (3, 4)]
        );
    }

    #[test]
    fn test_clamped_corners_have_three() {
        for (r, c) in [(0, 0), (0, 4), (3, 0), (3, 4)] {
            assert_eq!(Boundary::Clamped.neighbors(r, c, 4, 5).count(), 3);
        }
    }

    #[test]
    fn test_clamped_edge_and_interior() {
        assert_eq!(Boundary::Clamped.neighbors(0, 2, 4, 5).count(), 5);
        assert_eq!(Boundary::Clamped.neighbors(2, 2, 4, 5).count(), 8);
    }

    #[test]
    fn test_single_cell_grid() {
        // Every wrapped offset lands on the only cell
        assert!(Boundary::Wrapping.neighbors(0, 0, 1, 1).all(|p| p == (0, 0)));
        assert_eq!(Boundary::Wrapping.neighbors(0, 0, 1, 1).count(), 8);
        assert_eq!(Boundary::Clamped.neighbors(0, 0, 1, 1).count(), 0);
    }

    #[test]
    fn test_never_includes_self_on_large_grids() {
        for boundary in [Boundary::Wrapping, Boundary::Clamped] {
            for r in 0..6 {
                for c in 0..7 {
                    assert!(boundary.neighbors(r, c, 6, 7).all(|p| p != (r, c)));
                }
            }
        }
    }
}
