//! Home-slot hashing and the quadratic probe sequence.

/// Multiplier of the polynomial rolling hash.
pub(crate) const HASH_MULTIPLIER: u64 = 17;

/// Polynomial rolling hash of `key` (`h = h * 17 + byte`), wrapping on overflow.
#[must_use]
pub(crate) fn rolling_hash(key: &str) -> u64 {
    key.bytes()
        .fold(0_u64, |h, byte| h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(byte)))
}

/// Reduces the hash of `key` to a home slot in `[0, capacity)`.
///
/// A zero `capacity` maps everything to slot 0; the table never has one.
#[must_use]
pub(crate) fn home_slot(key: &str, capacity: usize) -> usize {
    let reduced = rolling_hash(key).checked_rem(capacity as u64).unwrap_or(0);
    // `reduced < capacity`, so it always fits back into `usize`
    usize::try_from(reduced).unwrap_or(0)
}

/// Slot visited on probe attempt `attempt`: `(home + attempt²) mod capacity`.
///
/// Only prime capacities get anything close to full coverage from this sequence, so
/// callers must bound the walk by `capacity` attempts rather than by finding a free slot.
#[must_use]
pub(crate) fn probe(home: usize, attempt: usize, capacity: usize) -> usize {
    home.wrapping_add(attempt.wrapping_mul(attempt)).checked_rem(capacity).unwrap_or(0)
}
