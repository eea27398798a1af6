//! Rate limiting rules and state management.

mod limiter;
mod rule;
mod rules;
mod store;

pub use limiter::MinIntervalRule;
pub use rule::RateLimitRule;
pub use rules::{LimiterConfig, RuleSpec};
pub use store::LastCallStore;
