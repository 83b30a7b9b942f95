use metrics::{counter, gauge};
use std::sync::OnceLock;

static METRICS_INIT: OnceLock<()> = OnceLock::new();

pub fn init_metrics() {
    METRICS_INIT.get_or_init(|| {
        // Metrics will be registered automatically when used
    });
}

pub fn record_incident_submitted(incident_type: &str) {
    counter!("incidents_submitted_total", "type" => incident_type.to_string()).increment(1);
}

pub fn record_incident_rejected() {
    counter!("incidents_rejected_total").increment(1);
}

pub fn record_upload_saved() {
    counter!("uploads_saved_total").increment(1);
}

pub fn update_store_size(count: usize) {
    gauge!("incidents_stored").set(count as f64);
}
