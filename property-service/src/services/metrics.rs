//! Prometheus metrics for property-service.

use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub static TEXT_GENERATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static TEXT_GENERATION_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static LEAD_SINK_DISPATCHES_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static VIEWINGS_SCHEDULED_TOTAL: OnceLock<IntCounter> = OnceLock::new();
pub static PROPERTY_SEARCH_RESULTS: OnceLock<Histogram> = OnceLock::new();

/// Initialize all metrics. Call once at startup; later calls are no-ops.
pub fn init_metrics() -> Result<(), prometheus::Error> {
    if REGISTRY.get().is_some() {
        return Ok(());
    }

    let registry = Registry::new();

    let text_generations = IntCounterVec::new(
        Opts::new("text_generations_total", "Total text generation requests"),
        &["model", "outcome"],
    )?;

    let text_generation_duration = HistogramVec::new(
        HistogramOpts::new(
            "text_generation_duration_seconds",
            "Text generation provider latency in seconds",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0]),
        &["model"],
    )?;

    let sink_dispatches = IntCounterVec::new(
        Opts::new("lead_sink_dispatches_total", "Lead deliveries by sink and result"),
        &["sink", "result"],
    )?;

    let viewings_scheduled =
        IntCounter::new("viewings_scheduled_total", "Total viewings scheduled")?;

    let search_results = Histogram::with_opts(
        HistogramOpts::new(
            "property_search_results",
            "Number of properties returned per search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 500.0]),
    )?;

    registry.register(Box::new(text_generations.clone()))?;
    registry.register(Box::new(text_generation_duration.clone()))?;
    registry.register(Box::new(sink_dispatches.clone()))?;
    registry.register(Box::new(viewings_scheduled.clone()))?;
    registry.register(Box::new(search_results.clone()))?;

    let _ = REGISTRY.set(registry);
    let _ = TEXT_GENERATIONS_TOTAL.set(text_generations);
    let _ = TEXT_GENERATION_DURATION_SECONDS.set(text_generation_duration);
    let _ = LEAD_SINK_DISPATCHES_TOTAL.set(sink_dispatches);
    let _ = VIEWINGS_SCHEDULED_TOTAL.set(viewings_scheduled);
    let _ = PROPERTY_SEARCH_RESULTS.set(search_results);

    tracing::info!("Prometheus metrics initialized");
    Ok(())
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    let registry = match REGISTRY.get() {
        Some(r) => r,
        None => {
            tracing::error!("Metrics registry not initialized");
            return "# Metrics registry not initialized\n".to_string();
        }
    };

    if let Err(e) = encoder.encode(&registry.gather(), &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
        format!("# Failed to convert metrics to UTF-8: {}\n", e)
    })
}

// Helper functions for recording metrics

/// Record a finished text generation. `outcome` is `ok`, `rejected` or an error kind.
pub fn record_text_generation(model: &str, outcome: &str, duration_secs: Option<f64>) {
    if let Some(counter) = TEXT_GENERATIONS_TOTAL.get() {
        counter.with_label_values(&[model, outcome]).inc();
    }
    if let (Some(histogram), Some(secs)) = (TEXT_GENERATION_DURATION_SECONDS.get(), duration_secs)
    {
        histogram.with_label_values(&[model]).observe(secs);
    }
}

/// Record one delivery attempt to a lead sink.
pub fn record_sink_dispatch(sink: &str, result: &str) {
    if let Some(counter) = LEAD_SINK_DISPATCHES_TOTAL.get() {
        counter.with_label_values(&[sink, result]).inc();
    }
}

pub fn record_viewing_scheduled() {
    if let Some(counter) = VIEWINGS_SCHEDULED_TOTAL.get() {
        counter.inc();
    }
}

pub fn record_search_results(count: usize) {
    if let Some(histogram) = PROPERTY_SEARCH_RESULTS.get() {
        histogram.observe(count as f64);
    }
}
