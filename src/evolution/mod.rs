pub mod challenge;
pub mod optimizer;
pub mod options;

pub use challenge::Challenge;
pub use optimizer::{optimize, EvolutionResult, Optimizer};
pub use options::{LogLevel, OptimizerOptions, OptimizerOptionsBuilder};
