//! Outbound control-id numbering.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generator of outbound control ids.
///
/// One sequence is created at start-up and shared by reference with
/// everything that builds outbound messages. Ids are consecutive decimal
/// integers starting at `1`. Taking an id is a single atomic update, so
/// concurrent callers never receive the same id.
///
/// The sequence never wraps. The last id it hands out is `u64::MAX - 1`;
/// after that [`try_next_value`](Self::try_next_value) returns `None`.
///
/// # Examples
///
/// ```
/// use poct_message::ControlIdSequence;
///
/// let sequence = ControlIdSequence::new();
/// assert_eq!(sequence.next_id(), "1");
/// assert_eq!(sequence.next_id(), "2");
/// ```
#[derive(Debug)]
pub struct ControlIdSequence {
    next: AtomicU64,
}

impl ControlIdSequence {
    /// Creates a sequence whose first id is `1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a sequence whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Takes the next id.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is exhausted.
    pub fn next_id(&self) -> String {
        self.next_value().to_string()
    }

    /// Takes the next id as a number.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is exhausted.
    pub fn next_value(&self) -> u64 {
        match self.try_next_value() {
            Some(value) => value,
            None => panic!("control id sequence exhausted"),
        }
    }

    /// Takes the next id, or returns `None` once the sequence is exhausted.
    pub fn try_next_value(&self) -> Option<u64> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .ok()
    }

    /// Returns true if no more ids can be taken.
    pub fn is_exhausted(&self) -> bool {
        self.peek() == u64::MAX
    }

    /// Returns the id the next call will hand out, without taking it.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for ControlIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_ids() {
        let sequence = ControlIdSequence::new();
        let first: u64 = sequence.next_id().parse().unwrap();
        let second: u64 = sequence.next_id().parse().unwrap();
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_starting_at_and_peek() {
        let sequence = ControlIdSequence::starting_at(500);
        assert_eq!(sequence.peek(), 500);
        assert_eq!(sequence.next_value(), 500);
        assert_eq!(sequence.peek(), 501);
    }

    #[test]
    fn test_exhaustion_does_not_wrap() {
        let sequence = ControlIdSequence::starting_at(u64::MAX - 2);
        assert_eq!(sequence.try_next_value(), Some(u64::MAX - 2));
        assert_eq!(sequence.next_id(), (u64::MAX - 1).to_string());
        assert!(sequence.is_exhausted());
        assert_eq!(sequence.try_next_value(), None);
        assert_eq!(sequence.try_next_value(), None);
        assert_eq!(sequence.peek(), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "control id sequence exhausted")]
    fn test_next_value_panics_when_exhausted() {
        let sequence = ControlIdSequence::starting_at(u64::MAX);
        sequence.next_value();
    }

    #[test]
    fn test_independent_sequences() {
        let a = ControlIdSequence::new();
        let b = ControlIdSequence::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), "1");
    }
}
