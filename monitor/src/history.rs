use std::collections::VecDeque;

use serde::Serialize;

/// Fixed capacity of the rolling history.
pub const HISTORY_CAPACITY: usize = 10;

/// A validated price and the time it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub price: f64,
    pub ts_ms: u64,
}

/// Bounded FIFO of recently accepted prices.
///
/// Insertion order is arrival order. Once `HISTORY_CAPACITY` entries are
/// held, a push evicts the oldest entry first.
#[derive(Debug, Default)]
pub struct HistoryBuffer {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append an entry, evicting the oldest one when at capacity.
    /// Always succeeds.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Independent copy of the current sequence, oldest first.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(price: f64, ts_ms: u64) -> HistoryEntry {
        HistoryEntry { price, ts_ms }
    }

    #[test]
    fn push_keeps_arrival_order() {
        let mut buf = HistoryBuffer::new();

        buf.push(entry(1.0, 0));
        buf.push(entry(2.0, 1));
        buf.push(entry(3.0, 2));

        let prices: Vec<f64> = buf.snapshot().iter().map(|e| e.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn push_at_capacity_evicts_oldest() {
        let mut buf = HistoryBuffer::new();

        for i in 0..15 {
            buf.push(entry(i as f64, i));
        }

        assert_eq!(buf.len(), HISTORY_CAPACITY);

        let prices: Vec<f64> = buf.snapshot().iter().map(|e| e.price).collect();
        let expected: Vec<f64> = (5..15).map(|i| i as f64).collect();
        assert_eq!(prices, expected);
    }

    #[test]
    fn snapshot_does_not_alias_internal_storage() {
        let mut buf = HistoryBuffer::new();
        buf.push(entry(1.0, 0));

        let mut copy = buf.snapshot();
        copy.clear();
        copy.push(entry(99.0, 99));

        assert_eq!(buf.len(), 1);
        assert_eq!(buf.snapshot()[0].price, 1.0);
    }

    #[test]
    fn latest_tracks_most_recent_push() {
        let mut buf = HistoryBuffer::new();
        assert!(buf.latest().is_none());

        buf.push(entry(1.0, 0));
        buf.push(entry(2.0, 1));

        assert_eq!(buf.latest().unwrap().price, 2.0);
    }
}
