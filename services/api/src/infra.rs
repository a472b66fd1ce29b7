use decision_notice::error::AppError;
use decision_notice::workflows::decision_notice::CaseData;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::io;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn invalid_data(err: serde_json::Error) -> AppError {
    AppError::Io(io::Error::new(io::ErrorKind::InvalidData, err))
}

pub(crate) fn load_case(path: &Path) -> Result<CaseData, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(invalid_data)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(invalid_data)?;
    println!("{rendered}");
    Ok(())
}
