//! # TraitSchema
//!
//! The ordered set of trait names a chromosome carries. Names are unique and
//! looked up by name; two schemas are compatible when they hold the same names,
//! whatever their order.
//!
//! ## Example
//!
//! ```rust
//! use chromosomes::TraitSchema;
//!
//! let mut forward = TraitSchema::new();
//! forward.add("x")?;
//! forward.add("y")?;
//!
//! let mut backward = TraitSchema::new();
//! backward.add("y")?;
//! backward.add("x")?;
//!
//! assert_eq!(forward.position("y"), Some(1));
//! assert!(forward.is_compatible(&backward));
//! assert!(forward.add("x").is_err());
//! # Ok::<(), chromosomes::GeneticError>(())
//! ```

use std::collections::HashMap;

use crate::error::{GeneticError, Result};

/// An ordered list of unique trait names.
///
/// The order decides the order in which traits are recombined; it carries no
/// numeric meaning. A schema is shared between a builder and every chromosome
/// it produced through an `Arc`, and is never modified once a chromosome holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitSchema {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl TraitSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a trait name, failing with `DuplicateTrait` if it is already present.
    pub fn add(&mut self, name: &str) -> Result<()> {
        if self.positions.contains_key(name) {
            return Err(GeneticError::DuplicateTrait(name.to_string()));
        }
        self.positions.insert(name.to_string(), self.names.len());
        self.names.push(name.to_string());
        Ok(())
    }

    /// Returns the position of `name` in insertion order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Two schemas are compatible when they hold the same set of names,
    /// regardless of insertion order.
    pub fn is_compatible(&self, other: &TraitSchema) -> bool {
        self.len() == other.len() && self.names.iter().all(|name| other.contains(name))
    }

    /// Checks compatibility, producing `IncompatibleChromosome` on mismatch.
    pub(crate) fn ensure_compatible(&self, other: &TraitSchema) -> Result<()> {
        if self.is_compatible(other) {
            return Ok(());
        }
        Err(GeneticError::IncompatibleChromosome {
            left: self.sorted_names(),
            right: other.sorted_names(),
        })
    }

    fn sorted_names(&self) -> Vec<String> {
        let mut names = self.names.clone();
        names.sort();
        names
    }
}
