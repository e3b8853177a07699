use std::iter::FusedIterator;

use crate::collections::hash::config::Probe;

/// The indices examined for a key with the given home slot. The sequence stops after `cap - 1`
/// indices, so even a linear probe never examines every slot.
///
/// A quadratic sequence in a prime sized table may return to slots it has already visited before
/// reaching all of them.
pub(crate) struct ProbeSequence {
    probe: Probe,
    home: usize,
    cap: usize,
    limit: usize,
    step: usize,
    /// `2^step % cap`, kept incrementally so the offset never overflows.
    pow: usize,
}

impl ProbeSequence {
    pub const fn new(probe: Probe, home: usize, cap: usize) -> ProbeSequence {
        ProbeSequence {
            probe,
            home,
            cap,
            limit: cap.saturating_sub(1),
            step: 0,
            pow: 1,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.limit {
            return None;
        }

        let offset = match self.probe {
            Probe::Linear => self.step,
            Probe::Quadratic => (self.pow + self.cap - 1) % self.cap,
        };

        self.step += 1;
        self.pow = self.pow * 2 % self.cap;
        Some((self.home + offset) % self.cap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl FusedIterator for ProbeSequence {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        let indices: Vec<_> = ProbeSequence::new(Probe::Linear, 3, 5).collect();
        assert_eq!(indices, [3, 4, 0, 1], "Only cap - 1 slots should be examined.");
    }

    #[test]
    fn test_quadratic() {
        // Offsets 0, 1, 3, 7, 15, 31, 63, ...
        let indices: Vec<_> = ProbeSequence::new(Probe::Quadratic, 0, 11).take(7).collect();
        assert_eq!(indices, [0, 1, 3, 7, 4, 9, 8]);

        let indices: Vec<_> = ProbeSequence::new(Probe::Quadratic, 5, 11).take(4).collect();
        assert_eq!(indices, [5, 6, 8, 1], "Indices should wrap around the table.");

        assert_eq!(ProbeSequence::new(Probe::Quadratic, 0, 11).count(), 10);
        assert_eq!(ProbeSequence::new(Probe::Quadratic, 0, 0).next(), None);
    }
}
