use std::{fmt, mem};

use log::{debug, trace, warn};

use crate::{
    TableConfig, TableError,
    config::DEFAULT_INITIAL_CAPACITY,
    hashing::{home_slot, probe},
    slot::{Entry, Slot, SlotState},
};

/// A string-to-integer hash table using open addressing with quadratic probing.
///
/// Entries live directly in one slot array. A key's probe sequence is
/// `(hash(key) + i²) mod capacity` for `i = 0, 1, ...`, bounded by `capacity` attempts.
/// Removal leaves a tombstone so that keys further along the same sequence stay reachable;
/// later inserts reuse tombstones. The table grows by the configured factor once an insert
/// finds it at its load factor threshold, and never shrinks.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct OpenAddressTable {
    /// The backing slot array; its length is the capacity
    slots: Vec<Slot>,
    /// Number of occupied slots
    len: usize,
    /// Growth policy
    config: TableConfig,
}

/// Outcome of a single walk along a key's probe sequence for insertion
enum InsertResult {
    /// The key was placed in a free slot
    Inserted,
    /// The key already existed and its value was replaced
    Updated(i32),
    /// No free slot or matching key on the whole sequence; the key is handed back
    Saturated(String),
}

/// Outcome of a read-only walk along a key's probe sequence
struct Lookup {
    /// Slot of the matching entry, if any
    index: Option<usize>,
    /// Number of slots inspected
    probes: usize,
}

impl Default for OpenAddressTable {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAddressTable {
    /// Creates an empty table with 10 slots and the default growth policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty table with the given number of slots (at least 1)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self::allocate(capacity, TableConfig::default().initial_capacity(capacity))
    }

    /// Creates an empty table following `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config` if it does not describe a usable table.
    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::allocate(config.initial_capacity, config))
    }

    /// Builds an all-empty table of `capacity` slots
    fn allocate(capacity: usize, config: TableConfig) -> Self {
        Self { slots: vec![Slot::Empty; capacity], len: 0, config }
    }

    /// Whether the next insert has to grow the table first
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn needs_growth(&self) -> bool {
        self.len as f64 >= self.config.load_factor_threshold * self.slots.len() as f64
    }

    /// Inserts `value` under `key`, returning the previous value if the key was present.
    ///
    /// An existing key is updated in place and never grows the table. A new key first grows
    /// the table if it has reached its load factor threshold, then takes the first tombstone
    /// on its probe sequence, or the first empty slot if there is none.
    ///
    /// A new key whose probe sequence is saturated grows the table and retries, even below the
    /// load factor threshold, as long as the config's `max_exhaustion_growths` allows. If the
    /// live entries do not all fit at a grown capacity, the table keeps its current slots and
    /// the insert goes ahead there.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ProbeExhausted`] for `key` if no slot on its probe sequence can
    /// take it within the growth budget. The key is not stored in that case.
    pub fn insert(&mut self, key: impl Into<String>, value: i32) -> Result<Option<i32>, TableError> {
        let mut key = key.into();
        if let Some(previous) = self.update(&key, value) {
            return Ok(Some(previous));
        }

        let mut growths_left = self.config.max_exhaustion_growths;
        if self.needs_growth() && !self.grow(&mut growths_left) {
            debug!("inserting {key:?} at capacity {} without growing", self.capacity());
        }

        loop {
            match self.insert_probing(key, value) {
                InsertResult::Inserted => return Ok(None),
                InsertResult::Updated(previous) => return Ok(Some(previous)),
                InsertResult::Saturated(rejected) => {
                    if growths_left == 0 {
                        return Err(self.exhausted(rejected));
                    }
                    debug!(
                        "probe sequence for key {rejected:?} saturated at capacity {}, growing",
                        self.capacity()
                    );
                    growths_left = growths_left.saturating_sub(1);
                    if !self.grow(&mut growths_left) {
                        return Err(self.exhausted(rejected));
                    }
                    key = rejected;
                }
            }
        }
    }

    /// Overwrites the value of `key` in place if it is present
    fn update(&mut self, key: &str, value: i32) -> Option<i32> {
        let index = self.lookup(key).index?;
        match self.slots.get_mut(index)? {
            Slot::Occupied(entry) => Some(mem::replace(&mut entry.value, value)),
            Slot::Empty | Slot::Deleted => None,
        }
    }

    /// Reports that `key` could not be placed at the current capacity
    fn exhausted(&self, key: String) -> TableError {
        warn!("probe sequence for key {key:?} saturated at capacity {}", self.capacity());
        TableError::ProbeExhausted { key, capacity: self.capacity() }
    }

    /// Walks the probe sequence of `key` once and places or updates it
    fn insert_probing(&mut self, key: String, value: i32) -> InsertResult {
        let capacity = self.slots.len();
        let home = home_slot(&key, capacity);
        let mut first_tombstone = None;

        for attempt in 0..capacity {
            let index = probe(home, attempt, capacity);
            let Some(slot) = self.slots.get_mut(index) else { break };
            match slot {
                // The key cannot be further along, so it is new
                Slot::Empty => {
                    self.place(first_tombstone.unwrap_or(index), key, value);
                    return InsertResult::Inserted;
                }
                Slot::Deleted => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Slot::Occupied(entry) if entry.key == key => {
                    return InsertResult::Updated(mem::replace(&mut entry.value, value));
                }
                Slot::Occupied(_) => {}
            }
        }

        match first_tombstone {
            Some(index) => {
                self.place(index, key, value);
                InsertResult::Inserted
            }
            None => InsertResult::Saturated(key),
        }
    }

    /// Writes a new entry into the free slot at `index`
    fn place(&mut self, index: usize, key: String, value: i32) {
        if let Some(slot) = self.slots.get_mut(index) {
            if *slot == Slot::Deleted {
                trace!("reusing tombstone at slot {index} for key {key:?}");
            }
            *slot = Slot::Occupied(Entry { key, value });
            self.len = self.len.saturating_add(1);
        }
    }

    /// Walks the probe sequence of `key` until its entry, an empty slot, or `capacity` probes
    fn lookup(&self, key: &str) -> Lookup {
        let capacity = self.slots.len();
        let home = home_slot(key, capacity);

        for attempt in 0..capacity {
            let index = probe(home, attempt, capacity);
            let probes = attempt.saturating_add(1);
            match self.slots.get(index) {
                None | Some(Slot::Empty) => return Lookup { index: None, probes },
                Some(Slot::Occupied(entry)) if entry.key == key => {
                    return Lookup { index: Some(index), probes };
                }
                // Tombstones do not end the walk
                Some(Slot::Occupied(_) | Slot::Deleted) => {}
            }
        }

        Lookup { index: None, probes: capacity }
    }

    /// Returns the value stored under `key`
    #[must_use]
    pub fn find(&self, key: &str) -> Option<i32> {
        let index = self.lookup(key).index?;
        self.slots.get(index)?.entry().map(|entry| entry.value)
    }

    /// Returns true if `key` is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).index.is_some()
    }

    /// Number of slots a lookup of `key` inspects, whether or not the key is present
    #[must_use]
    pub fn probe_length(&self, key: &str) -> usize {
        self.lookup(key).probes
    }

    /// Removes `key`, leaving a tombstone in its slot. Returns false if the key was absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(index) = self.lookup(key).index else { return false };
        let Some(slot) = self.slots.get_mut(index) else { return false };

        *slot = Slot::Deleted;
        self.len = self.len.saturating_sub(1);
        true
    }

    /// Grows the slot array by the growth factor and reinserts every live entry in slot order.
    ///
    /// If some entry's probe sequence is saturated at the new capacity, the next one up is
    /// tried, spending one of `growths_left`. The grown table replaces this one only once
    /// every entry has been placed; when the budget runs out first the table is left as it
    /// was and false is returned.
    fn grow(&mut self, growths_left: &mut usize) -> bool {
        let old_capacity = self.slots.len();
        let mut new_capacity = old_capacity;
        loop {
            new_capacity = new_capacity.saturating_mul(self.config.growth_factor);
            debug!(
                "growing table from {old_capacity} to {new_capacity} slots with {} live entries",
                self.len
            );

            match self.rehashed(new_capacity) {
                Ok(grown) => {
                    *self = grown;
                    return true;
                }
                Err(rejected) => {
                    if *growths_left == 0 {
                        warn!(
                            "entry {rejected:?} does not fit in {new_capacity} slots, keeping {old_capacity}"
                        );
                        return false;
                    }
                    *growths_left = growths_left.saturating_sub(1);
                }
            }
        }
    }

    /// Builds a table of `capacity` slots holding every live entry, or returns the key of
    /// the first entry whose probe sequence is saturated there
    fn rehashed(&self, capacity: usize) -> Result<Self, String> {
        let mut grown = Self::allocate(capacity, self.config);
        for entry in self.slots.iter().filter_map(Slot::entry) {
            if let InsertResult::Saturated(rejected) =
                grown.insert_probing(entry.key.clone(), entry.value)
            {
                return Err(rejected);
            }
        }
        Ok(grown)
    }

    /// Empties every slot, tombstones included. The capacity is kept.
    pub fn clear(&mut self) {
        debug!("clearing {} entries from {} slots", self.len, self.slots.len());
        self.slots.fill(Slot::Empty);
        self.len = 0;
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the fraction of slots holding a live entry
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Returns the growth policy of the table
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Copies out the state of every slot, in slot order
    #[must_use]
    pub fn dump(&self) -> Vec<SlotState> {
        self.slots.iter().map(Slot::state).collect()
    }
}

impl fmt::Display for OpenAddressTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            writeln!(f, "Slot {index}: {}", slot.state())?;
        }
        Ok(())
    }
}
