//! Prometheus metrics for the gallery pipeline.
//!
//! Metrics carry no per-item labels; they expose cache effectiveness and
//! upstream traffic only.

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};
use std::sync::{LazyLock, Once};

/// Global Prometheus registry for all metrics.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

// Image resolution
pub static IMAGE_CACHE_HITS: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "roost_image_cache_hits_total",
        "Total item resolutions served from the image cache",
    )
    .expect("metric creation failed")
});

pub static IMAGE_FETCHES: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "roost_image_fetches_total",
        "Total image fetches issued upstream",
    )
    .expect("metric creation failed")
});

pub static IMAGE_FETCH_FAILURES: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "roost_image_fetch_failures_total",
        "Total image fetches that failed",
    )
    .expect("metric creation failed")
});

// Claim verification
pub static VERIFY_BATCH_CACHE_HITS: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "roost_verify_batch_cache_hits_total",
        "Total verification batches served from the batch cache",
    )
    .expect("metric creation failed")
});

pub static VERIFY_REQUESTS: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "roost_verify_requests_total",
        "Total batch requests sent to the claim registry",
    )
    .expect("metric creation failed")
});

pub static VERIFY_FAILURES: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "roost_verify_failures_total",
        "Total claim registry requests that failed",
    )
    .expect("metric creation failed")
});

// Pages and traits
pub static PAGE_ASSEMBLY_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "roost_page_assembly_duration_seconds",
            "Time taken to assemble one page",
        )
        .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
    )
    .expect("metric creation failed")
});

pub static TRAITS_FETCHES: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "roost_traits_fetches_total",
        "Total fetches of the traits document",
    )
    .expect("metric creation failed")
});

/// Guard to ensure metrics are only registered once.
static REGISTER_ONCE: Once = Once::new();

/// Register all metrics with the global registry.
///
/// Idempotent; safe to call from every test that builds a router.
pub fn register_metrics() {
    REGISTER_ONCE.call_once(|| {
        REGISTRY
            .register(Box::new(IMAGE_CACHE_HITS.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(IMAGE_FETCHES.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(IMAGE_FETCH_FAILURES.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(VERIFY_BATCH_CACHE_HITS.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(VERIFY_REQUESTS.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(VERIFY_FAILURES.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(PAGE_ASSEMBLY_DURATION.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(TRAITS_FETCHES.clone()))
            .expect("metric registration failed");
    });
}
