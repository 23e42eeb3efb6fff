//! Slot storage and its read-only diagnostic view.

use std::fmt;

/// A live key-value pair owned by the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    /// The key of the pair
    pub(crate) key: String,
    /// The value associated with the key
    pub(crate) value: i32,
}

/// One cell of the backing array.
///
/// The entry only exists in the `Occupied` variant, so a tombstone can never be read as live data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Never used since the last clear or rehash; ends every probe walk
    #[default]
    Empty,
    /// Holds a live entry
    Occupied(Entry),
    /// Tombstone left by a removal; probing continues past it and inserts may reuse it
    Deleted,
}

impl Slot {
    /// Returns the live entry if the slot holds one
    pub(crate) fn entry(&self) -> Option<&Entry> {
        match self {
            Self::Occupied(entry) => Some(entry),
            Self::Empty | Self::Deleted => None,
        }
    }

    /// Copies the slot out as its public view
    pub(crate) fn state(&self) -> SlotState {
        match self {
            Self::Empty => SlotState::Empty,
            Self::Occupied(Entry { key, value }) => {
                SlotState::Occupied { key: key.clone(), value: *value }
            }
            Self::Deleted => SlotState::Deleted,
        }
    }
}

/// Snapshot of a single slot, as reported by [`OpenAddressTable::dump`].
///
/// [`OpenAddressTable::dump`]: crate::OpenAddressTable::dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    /// The slot has never held an entry since the last clear or rehash
    Empty,
    /// The slot holds a live entry
    Occupied {
        /// Key of the entry
        key: String,
        /// Value of the entry
        value: i32,
    },
    /// The slot held an entry that was removed
    Deleted,
}

impl SlotState {
    /// Returns true for an occupied slot
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "[EMPTY]"),
            Self::Occupied { key, value } => write!(f, "[{key}, {value}]"),
            Self::Deleted => write!(f, "[DELETED]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_is_empty() {
        assert_eq!(Slot::default(), Slot::Empty);
        assert_eq!(Slot::default().entry(), None);
    }

    #[test]
    fn test_only_occupied_slot_exposes_entry() {
        let occupied = Slot::Occupied(Entry { key: "Dars".to_string(), value: 25 });
        assert_eq!(occupied.entry().map(|e| e.value), Some(25));
        assert_eq!(Slot::Deleted.entry(), None);
    }

    #[test]
    fn test_state_copies_slot() {
        let occupied = Slot::Occupied(Entry { key: "Belka".to_string(), value: 5 });
        assert_eq!(occupied.state(), SlotState::Occupied { key: "Belka".to_string(), value: 5 });
        assert!(occupied.state().is_occupied());
        assert_eq!(Slot::Deleted.state(), SlotState::Deleted);
        assert!(!Slot::Empty.state().is_occupied());
    }

    #[test]
    fn test_display() {
        let occupied = SlotState::Occupied { key: "Gaston".to_string(), value: 1 };
        assert_eq!(occupied.to_string(), "[Gaston, 1]");
        assert_eq!(SlotState::Deleted.to_string(), "[DELETED]");
        assert_eq!(SlotState::Empty.to_string(), "[EMPTY]");
    }
}
