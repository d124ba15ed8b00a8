use crate::domain::{Boundary, LifeError, LifeGrid, LifeResult};

/// Parameters for a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub boundary: Boundary,
    /// Generations to advance before stopping
    pub generations: u64,
    /// Seed for random soup; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Chance of a cell starting alive in random soup
    pub density: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 18,
            boundary: Boundary::Wrapping,
            generations: 100,
            seed: None,
            density: 0.3,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> LifeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidConfig {
                reason: format!("density must be within [0, 1], got {}", self.density),
            });
        }
        Ok(())
    }

    /// Empty grid matching this configuration
    pub fn build_grid(&self) -> LifeResult<LifeGrid> {
        self.validate()?;
        LifeGrid::new(self.width, self.height, self.boundary)
    }
}
