//! Rate limiting rule contract.

/// Trait implemented by every rate limiting policy.
///
/// A rule answers a single question: may this client's request proceed?
/// Implementations may mutate internal state as part of answering (the
/// elapsed-time rule records the call either way). One rule instance is
/// shared across all request-handling threads, so the trait requires
/// `Send + Sync` and decides through `&self`.
pub trait RateLimitRule: Send + Sync {
    /// Decide admission for the given client identifier.
    ///
    /// The identifier is opaque to the rule; the caller defines its scheme
    /// (API key, remote address, tenant id) and is responsible for any
    /// format validation.
    fn is_request_allowed(&self, client_id: &str) -> bool;
}
