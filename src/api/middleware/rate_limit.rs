//! Per-client rate limiting using the token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter keyed by client IP address.
///
/// One slot is replenished every `1000 / per_second` milliseconds, up to
/// `burst` slots. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// Requires the router to be served with
/// `into_make_service_with_connect_info::<SocketAddr>`.
///
/// # Errors
///
/// Fails if either value is zero.
pub fn layer(per_second: u64, burst: u32) -> anyhow::Result<RateLimitLayer> {
    if per_second == 0 {
        anyhow::bail!("rate limit must allow at least one request per second");
    }

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond((1000 / per_second).max(1))
        .burst_size(burst)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("rate limit values must be greater than zero"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
