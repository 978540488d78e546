use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) const CLASSIFICATIONS_METRIC: &str = "risk_classifications_total";

pub(crate) fn record_classification(tier: &'static str) {
    metrics::counter!(CLASSIFICATIONS_METRIC, "tier" => tier).increment(1);
}
