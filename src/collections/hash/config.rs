//! Tunable thresholds for the hash tables in this module.
//!
//! Configurations are plain values built with `with_*` setters and are checked once, when a table
//! is created from them:
//! ```
//! # use basic_collections::collections::hash::{OpenTableConfig, Probe};
//! let config = OpenTableConfig::default()
//!     .with_load_factor(0.3)
//!     .with_probe(Probe::Linear);
//! assert!(config.validate().is_ok());
//! assert!(config.with_load_factor(1.5).validate().is_err());
//! ```

use crate::util::error::InvalidLoadFactor;

/// The load factor at which a [`ChainedHashMap`](super::ChainedHashMap) doubles its buckets.
pub const DEFAULT_CHAINED_LOAD_FACTOR: f64 = 0.65;

/// The load factor at which an [`OpenHashMap`](super::OpenHashMap) grows.
pub const DEFAULT_OPEN_LOAD_FACTOR: f64 = 0.45;

/// Configuration for a [`ChainedHashMap`](super::ChainedHashMap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// The ratio of entries to buckets at which the next new key triggers a resize. Chains can
    /// hold any number of entries, so any positive finite value is accepted, including values
    /// above 1.
    pub load_factor: f64,
}

impl TableConfig {
    pub const fn new() -> TableConfig {
        TableConfig {
            load_factor: DEFAULT_CHAINED_LOAD_FACTOR,
        }
    }

    pub const fn with_load_factor(self, load_factor: f64) -> TableConfig {
        TableConfig {
            load_factor,
        }
    }

    /// # Errors
    /// Returns [`InvalidLoadFactor`] unless the load factor is positive and finite.
    pub fn validate(&self) -> Result<(), InvalidLoadFactor> {
        if self.load_factor.is_finite() && self.load_factor > 0.0 {
            Ok(())
        } else {
            Err(InvalidLoadFactor {
                load_factor: self.load_factor,
            })
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The sequence of slots an [`OpenHashMap`](super::OpenHashMap) examines for a key, starting at
/// its home slot `h`. The `i`th slot examined is `(h + offset(i)) % cap`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// `offset(i) = i`. Visits every slot, but lets collisions cluster.
    Linear,
    /// `offset(i) = 2^i - 1`. Spreads colliding keys further apart, but may revisit slots before
    /// it has seen all of them.
    #[default]
    Quadratic,
}

/// Configuration for an [`OpenHashMap`](super::OpenHashMap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenTableConfig {
    /// The ratio of entries to slots at which the next insertion triggers a resize. Must be in
    /// `(0, 1)`, because every entry needs its own slot.
    pub load_factor: f64,
    pub probe: Probe,
}

impl OpenTableConfig {
    pub const fn new() -> OpenTableConfig {
        OpenTableConfig {
            load_factor: DEFAULT_OPEN_LOAD_FACTOR,
            probe: Probe::Quadratic,
        }
    }

    pub const fn with_load_factor(self, load_factor: f64) -> OpenTableConfig {
        OpenTableConfig {
            load_factor,
            ..self
        }
    }

    pub const fn with_probe(self, probe: Probe) -> OpenTableConfig {
        OpenTableConfig {
            probe,
            ..self
        }
    }

    /// # Errors
    /// Returns [`InvalidLoadFactor`] unless the load factor is strictly between 0 and 1.
    pub fn validate(&self) -> Result<(), InvalidLoadFactor> {
        if self.load_factor > 0.0 && self.load_factor < 1.0 {
            Ok(())
        } else {
            Err(InvalidLoadFactor {
                load_factor: self.load_factor,
            })
        }
    }
}

impl Default for OpenTableConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(TableConfig::default().load_factor, 0.65);
        assert_eq!(OpenTableConfig::default().load_factor, 0.45);
        assert_eq!(OpenTableConfig::default().probe, Probe::Quadratic);
    }

    #[test]
    fn test_validate() {
        assert!(TableConfig::new().with_load_factor(2.0).validate().is_ok());
        assert!(TableConfig::new().with_load_factor(0.0).validate().is_err());
        assert!(TableConfig::new().with_load_factor(f64::INFINITY).validate().is_err());
        assert!(TableConfig::new().with_load_factor(f64::NAN).validate().is_err());

        assert!(OpenTableConfig::new().with_load_factor(0.9).validate().is_ok());
        assert!(OpenTableConfig::new().with_load_factor(1.0).validate().is_err());
        assert!(OpenTableConfig::new().with_load_factor(-0.5).validate().is_err());
        assert!(OpenTableConfig::new().with_load_factor(f64::NAN).validate().is_err());
    }
}
