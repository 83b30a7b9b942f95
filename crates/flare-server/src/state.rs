use flare_core::store::IncidentStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<IncidentStore>,
    pub uploads_dir: PathBuf,
    pub metrics: PrometheusHandle,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: IncidentStore, uploads_dir: PathBuf, metrics: PrometheusHandle) -> Self {
        Self {
            store: Arc::new(store),
            uploads_dir,
            metrics,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
