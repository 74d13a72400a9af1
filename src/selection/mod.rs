//! # Selection
//!
//! Fitness-based selection over a set of chromosomes: the single most fit
//! candidate, and the above-average subset. Each function also comes in an
//! index form working on precomputed scores, which the optimizer uses so that
//! every chromosome is scored only once.
pub mod average;
pub mod fittest;

pub use average::{above_average, above_average_indices};
pub use fittest::{most_fit, most_fit_index};
