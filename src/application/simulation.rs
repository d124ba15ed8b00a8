use log::info;
use rand::Rng;

use super::SimulationConfig;
use crate::domain::{LifeGrid, LifeResult, Pattern, StepSummary};

/// Outcome of [`Simulation::run`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Generations actually advanced
    pub generations: u64,
    pub population: usize,
    /// Generation at which the grid stopped changing, if it did
    pub stable_at: Option<u64>,
}

/// Simulation drives a single grid for whichever loop owns it.
/// It keeps the generation count and the pause flag next to the grid.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub grid: LifeGrid,
    pub is_running: bool,
    pub generation: u64,
}

impl Simulation {
    /// Create a paused simulation with an empty grid sized by `config`
    pub fn new(config: &SimulationConfig) -> LifeResult<Self> {
        Ok(Self::from_grid(config.build_grid()?))
    }

    pub fn from_grid(grid: LifeGrid) -> Self {
        Self {
            grid,
            is_running: false,
            generation: 0,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Advance one generation regardless of the pause flag
    pub fn step(&mut self) -> StepSummary {
        let summary = self.grid.advance();
        self.generation += 1;
        summary
    }

    /// Advance one generation unless paused
    pub fn tick(&mut self) -> Option<StepSummary> {
        if !self.is_running {
            return None;
        }
        Some(self.step())
    }

    /// Advance up to `generations` generations. With `stop_when_stable` the run
    /// ends at the first generation that changes nothing.
    pub fn run(&mut self, generations: u64, stop_when_stable: bool) -> RunReport {
        let start = self.generation;
        let mut stable_at = None;

        for _ in 0..generations {
            if self.step().is_stable() {
                stable_at.get_or_insert(self.generation);
                if stop_when_stable {
                    break;
                }
            }
        }

        let report = RunReport {
            generations: self.generation - start,
            population: self.grid.population(),
            stable_at,
        };
        match report.stable_at {
            Some(generation) => info!(
                "ran {} generations, population {}, stable since generation {}",
                report.generations, report.population, generation
            ),
            None => info!(
                "ran {} generations, population {}",
                report.generations, report.population
            ),
        }
        report
    }

    /// Flip one cell, the editing path for a click in a harness
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> LifeResult<()> {
        self.grid.toggle_cell(row, col)
    }

    pub fn load_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) -> LifeResult<()> {
        self.grid.load_pattern(row, col, pattern)?;
        info!("placed {} at ({}, {})", pattern.name, row, col);
        Ok(())
    }

    /// Place `pattern` in the middle of the grid and return its top-left corner
    pub fn load_centered(&mut self, pattern: &Pattern) -> LifeResult<(usize, usize)> {
        let row = self.grid.height().saturating_sub(pattern.height()) / 2;
        let col = self.grid.width().saturating_sub(pattern.width()) / 2;
        self.load_pattern(pattern, row, col)?;
        Ok((row, col))
    }

    /// Clear grid, reset generation counter and pause
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.is_running = false;
    }

    /// Randomize grid, reset generation counter and pause
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) -> LifeResult<()> {
        self.grid.randomize(rng, density)?;
        self.generation = 0;
        self.is_running = false;
        info!("seeded random soup, population {}", self.grid.population());
        Ok(())
    }
}
