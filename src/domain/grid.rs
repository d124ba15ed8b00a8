use std::fmt;

use log::{debug, trace};
use rand::Rng;

use super::{Boundary, Cell, LifeError, LifeResult, Pattern};

/// Births and deaths produced by one generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub births: usize,
    pub deaths: usize,
}

impl StepSummary {
    pub const fn changes(&self) -> usize {
        self.births + self.deaths
    }

    /// True when the generation left every cell as it was
    pub const fn is_stable(&self) -> bool {
        self.changes() == 0
    }
}

/// LifeGrid owns a fixed-size cell matrix and advances it one generation at a time.
///
/// Coordinates are `(row, col)`. Cells are stored row-major. The edge behavior
/// is fixed at construction by a [`Boundary`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    boundary: Boundary,
    cells: Vec<Cell>,
}

impl LifeGrid {
    /// Create a new grid with all cells initially dead.
    ///
    /// Fails when either side is 0 or the cell count does not fit in `usize`.
    pub fn new(width: usize, height: usize, boundary: Boundary) -> LifeResult<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(LifeError::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            boundary,
            cells: vec![Cell::Dead; len],
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn checked_index(&self, row: usize, col: usize) -> LifeResult<usize> {
        if row < self.height && col < self.width {
            Ok(self.get_index(row, col))
        } else {
            Err(LifeError::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.get_index(row, col)])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> LifeResult<bool> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx].is_alive())
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> LifeResult<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip a single cell (editing, e.g. a mouse click in a harness)
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> LifeResult<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        trace!("toggled ({}, {}) to {:?}", row, col, self.cells[idx]);
        Ok(())
    }

    /// Coordinates examined when counting the neighbors of `(row, col)`
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> LifeResult<impl Iterator<Item = (usize, usize)>> {
        self.checked_index(row, col)?;
        Ok(self.boundary.neighbors(row, col, self.height, self.width))
    }

    /// Live neighbor count under the grid's boundary policy
    pub fn live_neighbors(&self, row: usize, col: usize) -> LifeResult<u8> {
        self.checked_index(row, col)?;
        Ok(self.count_live_neighbors(row, col))
    }

    /// Caller guarantees `(row, col)` is in range
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.boundary
            .neighbors(row, col, self.height, self.width)
            .filter(|&(r, c)| self.cells[self.get_index(r, c)].is_alive())
            .count() as u8
    }

    /// Advance one generation and report what changed.
    ///
    /// Every next state is computed from the current generation before any of
    /// them is written, so births and deaths happen simultaneously.
    pub fn advance(&mut self) -> StepSummary {
        let next: Vec<Cell> = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.get_index(row, col)];
                current.evolve(self.count_live_neighbors(row, col))
            })
            .collect();

        let mut summary = StepSummary::default();
        for (before, after) in self.cells.iter().zip(&next) {
            match (before, after) {
                (Cell::Dead, Cell::Alive) => summary.births += 1,
                (Cell::Alive, Cell::Dead) => summary.deaths += 1,
                _ => {}
            }
        }

        self.cells = next;
        debug!(
            "generation advanced: {} births, {} deaths, population {}",
            summary.births,
            summary.deaths,
            self.population()
        );
        summary
    }

    /// Advance one generation in place
    pub fn step(&mut self) -> &mut Self {
        self.advance();
        self
    }

    /// Pure evolution - returns the successor and leaves `self` untouched
    pub fn next_generation(&self) -> Self {
        let mut next = self.clone();
        next.advance();
        next
    }

    /// Copy every cell of `pattern` onto the grid with its top-left corner at
    /// `(offset_row, offset_col)`.
    ///
    /// A pattern that does not fit entirely is rejected with
    /// [`LifeError::PatternOverflow`] and the grid is left unchanged.
    pub fn load_pattern(
        &mut self,
        offset_row: usize,
        offset_col: usize,
        pattern: &Pattern,
    ) -> LifeResult<()> {
        let fits_rows = offset_row
            .checked_add(pattern.height())
            .is_some_and(|end| end <= self.height);
        let fits_cols = offset_col
            .checked_add(pattern.width())
            .is_some_and(|end| end <= self.width);
        if !(fits_rows && fits_cols) {
            return Err(LifeError::PatternOverflow {
                offset_row,
                offset_col,
                pattern_width: pattern.width(),
                pattern_height: pattern.height(),
                width: self.width,
                height: self.height,
            });
        }

        for (r, row) in pattern.rows().iter().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                let idx = self.get_index(offset_row + r, offset_col + c);
                self.cells[idx] = Cell::from(alive);
            }
        }
        debug!(
            "loaded pattern {:?} ({}x{}) at ({}, {})",
            pattern.name,
            pattern.width(),
            pattern.height(),
            offset_row,
            offset_col
        );
        Ok(())
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the grid with random soup, each cell alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) -> LifeResult<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidConfig {
                reason: format!("density must be within [0, 1], got {}", density),
            });
        }
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        Ok(())
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }
}

/// Plaintext dump, `O` for alive and `.` for dead, one line per row
impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_alive() { 'O' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
