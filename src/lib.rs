//! Pacer - Per-Client Rate Limiting Decision Engine
//!
//! This crate implements an embeddable rate limiting decision engine. A
//! request-handling boundary (an API gateway, RPC server, or middleware
//! layer) hands it a client identifier on every inbound request and receives
//! a boolean admission decision. Policies implement the
//! [`ratelimit::RateLimitRule`] trait; the engine ships one concrete
//! strategy, [`ratelimit::MinIntervalRule`], which admits a request only
//! when a configured minimum duration has elapsed since the same client's
//! previous call.

pub mod error;
pub mod ratelimit;
