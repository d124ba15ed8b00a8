mod boundary;
mod cell;
mod error;
mod grid;
mod patterns;

pub use boundary::Boundary;
pub use cell::Cell;
pub use error::{LifeError, LifeResult};
pub use grid::{LifeGrid, StepSummary};
pub use patterns::{Pattern, presets};
