use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolves offer text from an inline argument, a file, or stdin, in that order.
pub(crate) fn read_offer_text(
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<String, std::io::Error> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        let bytes = std::fs::read(path)?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
