//! Monotonic identifier source used by every [`ResourceActor`](crate::ResourceActor).

/// Issues increasing `u32` identifiers for one resource kind.
///
/// Not synchronized: it lives inside a single actor task, which is the only place
/// that ever touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentitySequencer {
    next: u32,
}

impl IdentitySequencer {
    /// Creates a sequencer whose first issued id is `first`.
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Returns the current value and advances by one.
    pub fn next(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The value the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Moves the counter back (or forward) to `to`.
    pub fn reset(&mut self, to: u32) {
        self.next = to;
    }
}

impl Default for IdentitySequencer {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_increasing_ids_from_one() {
        let mut seq = IdentitySequencer::default();
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
        assert_eq!(seq.next(), 3);
        assert_eq!(seq.peek(), 4);
    }

    #[test]
    fn peek_does_not_advance() {
        let seq = IdentitySequencer::starting_at(10);
        assert_eq!(seq.peek(), 10);
        assert_eq!(seq.peek(), 10);
    }

    #[test]
    fn reset_rewinds_the_counter() {
        let mut seq = IdentitySequencer::default();
        seq.next();
        seq.next();
        seq.next();
        seq.reset(2);
        assert_eq!(seq.next(), 2);
        assert_eq!(seq.next(), 3);
    }
}
