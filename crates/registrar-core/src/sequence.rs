//! Monotonic identifier generator.
//!
//! Each aggregate that numbers its own records owns a [`Sequence`] instead of
//! reaching for a process-wide counter. Two sequences never share state.

use serde::Serialize;

/// Hands out `1, 2, 3, ...` in order. Not thread-safe; the owner serializes access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    next: u64,
}

impl Sequence {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the current value and advances.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The value the next call to [`Sequence::next_id`] will return.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let mut seq = Sequence::new();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.peek(), 3);
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut a = Sequence::default();
        let mut b = Sequence::default();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), 1);
        assert_eq!(a.next_id(), 3);
    }
}
