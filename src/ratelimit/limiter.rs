//! Elapsed-time rate limiting rule.

use std::time::{Duration, Instant};
use tracing::{debug, trace};

use super::rule::RateLimitRule;
use super::store::LastCallStore;

/// Admits a request only if at least a configured minimum duration has
/// elapsed since the same client's previous observed request.
///
/// The previous request counts whether it was admitted or rejected: every
/// call stamps the store, so a burst of rejected requests keeps pushing the
/// window forward and the client must stay quiet for a full minimum
/// interval before it is admitted again.
///
/// This struct is thread-safe and can be shared across request-handling
/// threads behind an `Arc`.
pub struct MinIntervalRule {
    /// Minimum spacing enforced between observed calls per client.
    min_interval: Duration,
    /// Last observed call per client, owned exclusively by this rule.
    last_calls: LastCallStore,
}

impl MinIntervalRule {
    /// Create a rule enforcing `min_interval` between calls per client.
    ///
    /// A zero interval admits every request.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_calls: LastCallStore::new(),
        }
    }

    /// The configured minimum interval.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Decide admission for `client_id` as of `now`.
    ///
    /// Stamping `now` into the store and reading the previous stamp is a
    /// single atomic step, so concurrent calls for the same client each
    /// judge a distinct predecessor and at most one of them can find an
    /// open window.
    fn allowed_at(&self, client_id: &str, now: Instant) -> bool {
        let allowed = match self.last_calls.record(client_id, now) {
            None => {
                debug!(client_id = %client_id, "Tracking new client");
                true
            }
            Some(previous) => now.saturating_duration_since(previous) >= self.min_interval,
        };

        trace!(client_id = %client_id, allowed = allowed, "Admission decision");
        if !allowed {
            debug!(client_id = %client_id, "Request rejected, window reset");
        }

        allowed
    }

    /// Remove clients whose last observed call is at least `idle_for` old.
    ///
    /// The decision path never evicts; store growth is bounded only by the
    /// embedding process calling this on a schedule of its choosing. An
    /// evicted client is treated as never seen on its next call, so an
    /// `idle_for` shorter than the configured minimum interval can admit a
    /// request the intact store would have rejected.
    ///
    /// Returns the number of clients removed.
    pub fn evict_idle(&self, idle_for: Duration) -> usize {
        let removed = self.last_calls.evict_idle(Instant::now(), idle_for);
        if removed > 0 {
            debug!(removed = removed, "Evicted idle clients");
        }
        removed
    }

    /// Number of clients currently tracked by this rule.
    pub fn tracked_clients(&self) -> usize {
        self.last_calls.len()
    }
}

impl RateLimitRule for MinIntervalRule {
    fn is_request_allowed(&self, client_id: &str) -> bool {
        self.allowed_at(client_id, Instant::now())
    }
}
