//! Errors reported by the table.

use thiserror::Error;

/// Failures of table construction and insertion.
///
/// A missing key is not an error: lookups report it as `None` or `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Every slot on the key's probe sequence holds some other live entry.
    ///
    /// Quadratic probing only reaches part of the table when the capacity is not prime, so
    /// this can happen below full load. The table is left unchanged.
    #[error("probe sequence for key {key:?} exhausted after {capacity} attempts")]
    ProbeExhausted {
        /// The key that could not be placed
        key: String,
        /// Capacity of the table, which is also the number of attempts made
        capacity: usize,
    },
    /// The table was configured with no slots
    #[error("initial capacity must be at least 1")]
    ZeroCapacity,
    /// The load factor threshold is not in `(0, 1]`
    #[error("load factor threshold {0} is outside (0, 1]")]
    InvalidLoadFactor(f64),
    /// The growth factor would not enlarge the table
    #[error("growth factor {0} must be at least 2")]
    InvalidGrowthFactor(usize),
}
