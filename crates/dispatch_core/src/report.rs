use tracing::{error, info};
use url::Url;

use crate::error::DispatchError;

/// What one dispatch produced: the response body, or what went wrong.
pub type DispatchOutcome = Result<String, DispatchError>;

/// Observer receiving the outcome of every dispatch, successful or not.
/// Injected instead of logging directly so callers can capture outcomes
/// without scraping log output.
pub trait ReportSink: Send + Sync {
    fn record(&self, url: &Url, outcome: &DispatchOutcome);
}

/// Default sink: forwards outcomes to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn record(&self, url: &Url, outcome: &DispatchOutcome) {
        match outcome {
            Ok(body) => info!(%url, response = body.as_str(), "dispatch completed"),
            Err(err) => error!(%url, %err, "http request failed"),
        }
    }
}
