//! Per-client last-call timestamp store.

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Concurrent map of client identifier to the instant of that client's most
/// recent observed call.
///
/// Each store is owned by exactly one rule instance. Updating an entry is an
/// atomic read-and-replace under the key's shard lock: two concurrent calls
/// for the same client serialize, and each observes a distinct predecessor.
/// Different clients hash to different shards and do not contend on a
/// single lock.
pub struct LastCallStore {
    entries: DashMap<String, Instant>,
}

impl LastCallStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Record `now` as the client's most recent call, returning the previous
    /// timestamp if the client was already tracked.
    ///
    /// Reading the old value and writing the new one happen as one
    /// operation; there is no interleaving point between them.
    pub fn record(&self, client_id: &str, now: Instant) -> Option<Instant> {
        self.entries.insert(client_id.to_string(), now)
    }

    /// Look up the client's last recorded call without modifying it.
    pub fn last_call(&self, client_id: &str) -> Option<Instant> {
        self.entries.get(client_id).map(|entry| *entry.value())
    }

    /// Remove entries whose last call is at least `idle_for` in the past,
    /// relative to `now`.
    ///
    /// Returns the number of entries removed.
    pub fn evict_idle(&self, now: Instant, idle_for: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, last| now.saturating_duration_since(*last) < idle_for);
        before.saturating_sub(self.entries.len())
    }

    /// Number of clients currently tracked.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no client is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    ///
    /// This is primarily useful for testing.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for LastCallStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_record_returns_none() {
        let store = LastCallStore::new();

        assert_eq!(store.record("client_a", Instant::now()), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_record_returns_previous_timestamp() {
        let store = LastCallStore::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(250);

        store.record("client_a", t0);

        assert_eq!(store.record("client_a", t1), Some(t0));
        assert_eq!(store.last_call("client_a"), Some(t1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_last_call_for_unknown_client() {
        let store = LastCallStore::new();

        assert_eq!(store.last_call("client_a"), None);
    }

    #[test]
    fn test_evict_idle_removes_only_stale_entries() {
        let store = LastCallStore::new();
        let t0 = Instant::now();

        store.record("stale", t0);
        store.record("fresh", t0 + Duration::from_secs(50));

        let now = t0 + Duration::from_secs(60);
        let removed = store.evict_idle(now, Duration::from_secs(30));

        assert_eq!(removed, 1);
        assert_eq!(store.last_call("stale"), None);
        assert_eq!(store.last_call("fresh"), Some(t0 + Duration::from_secs(50)));
    }

    #[test]
    fn test_evict_idle_with_nothing_stale() {
        let store = LastCallStore::new();
        let t0 = Instant::now();

        store.record("client_a", t0);

        assert_eq!(store.evict_idle(t0, Duration::from_secs(30)), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear() {
        let store = LastCallStore::new();

        store.record("client_a", Instant::now());
        store.record("client_b", Instant::now());
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }
}
