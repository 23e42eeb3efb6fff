//! Sizing and growth policy of a table.

use crate::TableError;

/// Number of slots a table starts with unless told otherwise
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;
/// Load factor at which an insert grows the table first
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.75;
/// Capacity multiplier applied on every rehash
pub const DEFAULT_GROWTH_FACTOR: usize = 2;
/// Extra growths an insert may spend on saturated probe sequences unless told otherwise
pub const DEFAULT_EXHAUSTION_GROWTHS: usize = 4;

/// Growth policy of an [`OpenAddressTable`](crate::OpenAddressTable).
///
/// An insert first rehashes when `len >= load_factor_threshold * capacity`, multiplying the
/// capacity by `growth_factor`. Tables never shrink.
///
/// Quadratic probing only reaches part of a table whose capacity is not prime, so an insert
/// can find its probe sequence saturated below the threshold. It may then grow the table
/// `max_exhaustion_growths` more times, counting every capacity tried while rehashing, before
/// reporting [`TableError::ProbeExhausted`]. A single insert therefore multiplies the capacity
/// by at most `growth_factor^(max_exhaustion_growths + 1)`. With 0 the error is reported
/// straight away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Number of slots allocated up front
    pub initial_capacity: usize,
    /// Fraction of occupied slots, in `(0, 1]`, that triggers growth
    pub load_factor_threshold: f64,
    /// Capacity multiplier on growth, at least 2
    pub growth_factor: usize,
    /// Extra growths one insert may spend on saturated probe sequences
    pub max_exhaustion_growths: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_exhaustion_growths: DEFAULT_EXHAUSTION_GROWTHS,
        }
    }
}

impl TableConfig {
    /// Sets the initial capacity
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the load factor threshold
    #[must_use]
    pub fn load_factor_threshold(mut self, threshold: f64) -> Self {
        self.load_factor_threshold = threshold;
        self
    }

    /// Sets the growth factor
    #[must_use]
    pub fn growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Sets how many extra growths one insert may spend on saturated probe sequences
    #[must_use]
    pub fn max_exhaustion_growths(mut self, growths: usize) -> Self {
        self.max_exhaustion_growths = growths;
        self
    }

    /// Checks that the policy describes a usable table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroCapacity`], [`TableError::InvalidLoadFactor`] or
    /// [`TableError::InvalidGrowthFactor`] for the first setting that is out of range.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        // NaN fails both comparisons
        if !(self.load_factor_threshold > 0.0 && self.load_factor_threshold <= 1.0) {
            return Err(TableError::InvalidLoadFactor(self.load_factor_threshold));
        }
        if self.growth_factor < 2 {
            return Err(TableError::InvalidGrowthFactor(self.growth_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let config = TableConfig::default();
        assert_eq!(config.initial_capacity, 10);
        assert!((config.load_factor_threshold - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.growth_factor, 2);
        assert_eq!(config.max_exhaustion_growths, 4);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = TableConfig::default().initial_capacity(0);
        assert_eq!(config.validate(), Err(TableError::ZeroCapacity));
    }

    #[test]
    fn test_rejects_out_of_range_load_factor() {
        for threshold in [0.0, -0.5, 1.5] {
            let config = TableConfig::default().load_factor_threshold(threshold);
            assert_eq!(config.validate(), Err(TableError::InvalidLoadFactor(threshold)));
        }
        let nan = TableConfig::default().load_factor_threshold(f64::NAN);
        assert!(matches!(nan.validate(), Err(TableError::InvalidLoadFactor(_))));
        assert_eq!(TableConfig::default().load_factor_threshold(1.0).validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_growing_factor() {
        for factor in [0, 1] {
            let config = TableConfig::default().growth_factor(factor);
            assert_eq!(config.validate(), Err(TableError::InvalidGrowthFactor(factor)));
        }
    }
}
