use std::collections::HashMap;

/// Bounded recency cache mapping a generated key to a monotonically
/// increasing access counter.
///
/// Consulted only by the avoid-recent strategy. Not designed for concurrent
/// mutation; wrap in external synchronization if shared across threads.
#[derive(Debug, Clone)]
pub struct HistoryTracker {
    entries: HashMap<String, u64>,
    access_counter: u64,
    capacity: usize,
}

impl HistoryTracker {
    /// A tracker that retains at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            access_counter: 0,
            capacity: capacity.max(1),
        }
    }

    /// The key was recently recorded.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Record a key, evicting the entry with the smallest counter once the
    /// tracker exceeds its capacity. Re-adding an existing key refreshes its
    /// counter without growing the tracker.
    pub fn add(&mut self, key: &str) {
        self.access_counter += 1;
        self.entries.insert(key.to_owned(), self.access_counter);

        if self.entries.len() > self.capacity {
            self.evict_oldest();
        }
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, evicting the oldest entries if the tracker is
    /// over the new bound. Zero is clamped to one.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.entries.len() > self.capacity {
            self.evict_oldest();
        }
    }

    /// Drop all entries and reset the counter to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.access_counter = 0;
    }

    // Linear scan is fine at tracker scale; no ordering index needed.
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, counter)| **counter)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}
