// Domain layer - Core simulation logic, no rendering or I/O
pub mod domain;

// Application layer - Configuration and run coordination
pub mod application;

// Re-exports for convenience
pub use domain::{Boundary, Cell, LifeError, LifeGrid, LifeResult, Pattern, StepSummary, presets};
pub use application::{RunReport, Simulation, SimulationConfig};
