//! # Quadratic Probing Hash Table
//!
//! A string-to-integer hash table built on open addressing.
//!
//! `OpenAddressTable` keeps every entry directly in one slot array:
//!
//! - keys are hashed with a polynomial rolling hash (multiplier 17)
//! - collisions are resolved by quadratic probing, `(home + i²) mod capacity`
//! - removal leaves a tombstone that later inserts may reuse
//! - the table grows once it reaches its load factor threshold (75% by default), doubling
//!   its capacity and reinserting every live entry
//!
//! ## Basic Usage
//!
//! ```rust
//! use quadtable::{OpenAddressTable, SlotState};
//!
//! # fn main() -> Result<(), quadtable::TableError> {
//! // Create a table with the default 10 slots
//! let mut table = OpenAddressTable::new();
//!
//! // Insert values
//! table.insert("Dars", 25)?;
//! table.insert("Gretta", 10)?;
//!
//! // Retrieve values
//! assert_eq!(table.find("Dars"), Some(25));
//!
//! // Update values
//! assert_eq!(table.insert("Dars", 30)?, Some(25));
//! assert_eq!(table.len(), 2);
//!
//! // Remove values, leaving a tombstone behind
//! assert!(table.remove("Gretta"));
//! assert_eq!(table.find("Gretta"), None);
//! assert_eq!(table.dump().iter().filter(|slot| **slot == SlotState::Deleted).count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Growth Policy
//!
//! ```rust
//! use quadtable::{OpenAddressTable, TableConfig};
//!
//! # fn main() -> Result<(), quadtable::TableError> {
//! let config = TableConfig::default().initial_capacity(4).load_factor_threshold(0.5);
//! let mut table = OpenAddressTable::with_config(config)?;
//!
//! table.insert("a", 1)?;
//! table.insert("b", 2)?;
//! // Half full, so this insert doubles the table first
//! table.insert("c", 3)?;
//! assert_eq!(table.capacity(), 8);
//! # Ok(())
//! # }
//! ```

/// Sizing and growth policy
mod config;
/// Error type of the table
mod error;
/// Rolling hash and quadratic probe sequence
mod hashing;
/// Slot representation and its public snapshot
mod slot;
/// The open addressing table itself
mod table;

pub use config::{
    DEFAULT_EXHAUSTION_GROWTHS, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY,
    DEFAULT_LOAD_FACTOR_THRESHOLD, TableConfig,
};
pub use error::TableError;
pub use slot::SlotState;
pub use table::OpenAddressTable;
