//! # OptimizerOptions
//!
//! The `OptimizerOptions` struct holds the tuning knobs of the population
//! optimizer: how many generations to run, how large the base population is, how
//! far the pool may grow before it is cut back, how many fresh random chromosomes
//! are injected each generation, how much is logged, and when fitness evaluation
//! switches to parallel.
//!
//! ## Example
//!
//! ```rust
//! use chromosomes::evolution::options::{LogLevel, OptimizerOptions};
//!
//! // Defaults: 40 generations over a base population of 8.
//! let default_options = OptimizerOptions::default();
//! assert_eq!(default_options.get_num_generations(), 40);
//!
//! let custom_options = OptimizerOptions::builder()
//!     .num_generations(100)
//!     .population_size(16)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert_eq!(custom_options.get_truncated_pool_size(), 116);
//! ```
//!
//! ## LogLevel
//!
//! - `Verbose`: one `info` event per generation plus `debug` events for truncation
//!   and breeding.
//! - `Minimal`: one `info` event per generation.
//! - `None`: no per-generation events.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    /// Pool length above which the pool is truncated
    max_pool_size: usize,
    /// Pool length kept after truncation
    truncated_pool_size: usize,
    num_immigrants: usize,
    /// Minimum batch length scored in parallel
    parallel_threshold: usize,
}

impl OptimizerOptions {
    pub const DEFAULT_NUM_GENERATIONS: usize = 40;
    pub const DEFAULT_POPULATION_SIZE: usize = 8;
    pub const DEFAULT_MAX_POOL_SIZE: usize = 233;
    pub const DEFAULT_NUM_IMMIGRANTS: usize = 2;
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

    pub fn new(num_generations: usize, log_level: LogLevel, population_size: usize) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            ..Self::default()
        }
    }

    /// Returns a builder for creating an `OptimizerOptions` instance.
    pub fn builder() -> OptimizerOptionsBuilder {
        OptimizerOptionsBuilder::default()
    }

    /// Checks the pool bounds.
    ///
    /// A zero population size is accepted here; it surfaces as an
    /// `EmptyPopulation` error as soon as the optimizer selects from the pool.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if either pool size is zero or the truncated pool
    /// size exceeds the maximum. Truncating to zero would drop the elite.
    pub fn validate(&self) -> Result<()> {
        if self.max_pool_size == 0 {
            return Err(GeneticError::Configuration(
                "Maximum pool size cannot be zero".to_string(),
            ));
        }
        if self.truncated_pool_size == 0 {
            return Err(GeneticError::Configuration(
                "Truncated pool size cannot be zero".to_string(),
            ));
        }
        if self.truncated_pool_size > self.max_pool_size {
            return Err(GeneticError::Configuration(format!(
                "Truncated pool size ({}) cannot exceed maximum pool size ({})",
                self.truncated_pool_size, self.max_pool_size
            )));
        }
        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_pool_size(&self) -> usize {
        self.max_pool_size
    }

    pub fn get_truncated_pool_size(&self) -> usize {
        self.truncated_pool_size
    }

    pub fn get_num_immigrants(&self) -> usize {
        self.num_immigrants
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the maximum pool size. The truncated size is not adjusted.
    pub fn set_max_pool_size(&mut self, max_pool_size: usize) {
        self.max_pool_size = max_pool_size;
    }

    pub fn set_truncated_pool_size(&mut self, truncated_pool_size: usize) {
        self.truncated_pool_size = truncated_pool_size;
    }

    pub fn set_num_immigrants(&mut self, num_immigrants: usize) {
        self.num_immigrants = num_immigrants;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            num_generations: Self::DEFAULT_NUM_GENERATIONS,
            log_level: LogLevel::None,
            population_size: Self::DEFAULT_POPULATION_SIZE,
            max_pool_size: Self::DEFAULT_MAX_POOL_SIZE,
            truncated_pool_size: Self::DEFAULT_MAX_POOL_SIZE / 2,
            num_immigrants: Self::DEFAULT_NUM_IMMIGRANTS,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `OptimizerOptions`.
///
/// Unset values fall back to the defaults. When only the maximum pool size is
/// given, the truncated size follows it at one half (at least one).
#[derive(Debug, Clone, Default)]
pub struct OptimizerOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    max_pool_size: Option<usize>,
    truncated_pool_size: Option<usize>,
    num_immigrants: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl OptimizerOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn max_pool_size(mut self, value: usize) -> Self {
        self.max_pool_size = Some(value);
        self
    }

    pub fn truncated_pool_size(mut self, value: usize) -> Self {
        self.truncated_pool_size = Some(value);
        self
    }

    pub fn num_immigrants(mut self, value: usize) -> Self {
        self.num_immigrants = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn build(self) -> OptimizerOptions {
        let max_pool_size = self
            .max_pool_size
            .unwrap_or(OptimizerOptions::DEFAULT_MAX_POOL_SIZE);
        OptimizerOptions {
            num_generations: self
                .num_generations
                .unwrap_or(OptimizerOptions::DEFAULT_NUM_GENERATIONS),
            log_level: self.log_level.unwrap_or(LogLevel::None),
            population_size: self
                .population_size
                .unwrap_or(OptimizerOptions::DEFAULT_POPULATION_SIZE),
            max_pool_size,
            truncated_pool_size: self
                .truncated_pool_size
                .unwrap_or((max_pool_size / 2).max(1)),
            num_immigrants: self
                .num_immigrants
                .unwrap_or(OptimizerOptions::DEFAULT_NUM_IMMIGRANTS),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(OptimizerOptions::DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = OptimizerOptions::default();

        assert_eq!(options.get_num_generations(), 40);
        assert_eq!(options.get_population_size(), 8);
        assert_eq!(options.get_max_pool_size(), 233);
        assert_eq!(options.get_truncated_pool_size(), 116);
        assert_eq!(options.get_num_immigrants(), 2);
        assert_eq!(options.get_log_level(), LogLevel::None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_matches_default() {
        assert_eq!(OptimizerOptions::builder().build(), OptimizerOptions::default());
    }

    #[test]
    fn test_builder_derives_truncation_from_max() {
        let options = OptimizerOptions::builder().max_pool_size(50).build();
        assert_eq!(options.get_truncated_pool_size(), 25);

        let options = OptimizerOptions::builder()
            .max_pool_size(50)
            .truncated_pool_size(10)
            .build();
        assert_eq!(options.get_truncated_pool_size(), 10);
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let options = OptimizerOptions::builder()
            .max_pool_size(10)
            .truncated_pool_size(11)
            .build();
        assert!(matches!(
            options.validate(),
            Err(GeneticError::Configuration(_))
        ));

        let mut options = OptimizerOptions::default();
        options.set_max_pool_size(0);
        options.set_truncated_pool_size(0);
        assert!(matches!(
            options.validate(),
            Err(GeneticError::Configuration(msg)) if msg.contains("cannot be zero")
        ));
    }

    #[test]
    fn test_validate_rejects_zero_truncation() {
        let options = OptimizerOptions::builder()
            .max_pool_size(20)
            .truncated_pool_size(0)
            .build();
        assert!(matches!(
            options.validate(),
            Err(GeneticError::Configuration(msg)) if msg.contains("Truncated pool size")
        ));

        // A one-member pool after truncation still holds the elite.
        let options = OptimizerOptions::builder()
            .max_pool_size(20)
            .truncated_pool_size(1)
            .build();
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_population_is_valid_configuration() {
        let options = OptimizerOptions::new(10, LogLevel::None, 0);
        assert!(options.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let options = OptimizerOptions::builder()
            .num_generations(12)
            .log_level(LogLevel::Verbose)
            .build();

        let json = serde_json::to_string(&options).unwrap();
        let restored: OptimizerOptions = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, options);
    }
}
