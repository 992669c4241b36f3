use std::{sync::Arc, time::Duration};

use futures::future::join_all;
use reqwest::Client;
use tokio::{task::JoinHandle, time::Instant};
use tracing::debug;
use url::Url;

pub mod commands;
mod encode;
pub mod error;
pub mod report;

pub use commands::{CommandList, PaintCommand};
pub use error::DispatchError;
pub use report::{DispatchOutcome, LogSink, ReportSink};

/// Where requests go unless the caller configures something else.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:17000/";

/// Client for a painter server's `?cmd=` endpoint: encodes command lists
/// into request URLs, fires GET requests, and hands every outcome to the
/// configured report sink.
///
/// Cloning is cheap and dispatches share no mutable state, so any number
/// of them may run concurrently.
#[derive(Clone)]
pub struct Dispatcher {
    http: Client,
    endpoint: Url,
    sink: Arc<dyn ReportSink>,
}

impl Dispatcher {
    pub fn new(endpoint: Url) -> Self {
        Self::with_sink(endpoint, Arc::new(LogSink))
    }

    pub fn with_sink(endpoint: Url, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            sink,
        }
    }

    /// URL for one dispatch: tokens percent-encoded independently, joined
    /// with literal commas, carried in a single `cmd` query parameter.
    /// Decoding the value and splitting on raw commas recovers the tokens.
    pub fn request_url(&self, commands: &CommandList) -> Url {
        let mut url = self.endpoint.clone();
        url.set_query(Some(&format!("cmd={}", commands.to_query_value())));
        url
    }

    /// One complete GET round trip for `commands`. The outcome reaches the
    /// report sink before this returns; failures stop here rather than
    /// propagating as panics, and never affect other dispatches.
    pub async fn dispatch(&self, commands: &CommandList) -> DispatchOutcome {
        self.dispatch_url(self.request_url(commands)).await
    }

    /// Same as [`dispatch`](Self::dispatch) for a pre-built request URL.
    pub async fn dispatch_url(&self, url: Url) -> DispatchOutcome {
        let outcome = self.fetch_text(url.clone()).await;
        self.sink.record(&url, &outcome);
        outcome
    }

    /// Single inbound trigger entry point: obtains the command list from
    /// `source` at trigger time and dispatches it.
    pub async fn on_trigger<F>(&self, source: F) -> DispatchOutcome
    where
        F: FnOnce() -> CommandList,
    {
        self.dispatch(&source()).await
    }

    async fn fetch_text(&self, url: Url) -> DispatchOutcome {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Status { status });
        }
        Ok(response.text().await?)
    }

    /// Issues `steps` as independent timed dispatches: the first
    /// immediately, the i-th no earlier than `i * interval` after this
    /// call. Offsets are measured from scheduling time, not chained to
    /// prior completions, so a slow or failed step never delays the rest.
    ///
    /// Dropping the returned handle detaches the steps (fire-and-forget);
    /// keep it to [`wait`](ScheduledSequence::wait) for or
    /// [`cancel`](ScheduledSequence::cancel) them.
    pub fn schedule_sequence(
        &self,
        steps: Vec<CommandList>,
        interval: Duration,
    ) -> ScheduledSequence {
        let scheduled_at = Instant::now();
        debug!(steps = steps.len(), ?interval, "scheduling dispatch sequence");

        let mut handles = Vec::with_capacity(steps.len());
        for (index, commands) in steps.into_iter().enumerate() {
            let dispatcher = self.clone();
            let fire_at = scheduled_at + interval * index as u32;
            handles.push(tokio::spawn(async move {
                tokio::time::sleep_until(fire_at).await;
                let _ = dispatcher.dispatch(&commands).await;
            }));
        }

        ScheduledSequence { steps: handles }
    }
}

/// Handle to the steps issued by [`Dispatcher::schedule_sequence`].
pub struct ScheduledSequence {
    steps: Vec<JoinHandle<()>>,
}

impl ScheduledSequence {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Aborts every step that has not completed yet. Steps already past
    /// their timer may still finish their request.
    pub fn cancel(self) {
        for step in &self.steps {
            step.abort();
        }
    }

    /// Waits until every step has fired and its dispatch finished.
    pub async fn wait(self) {
        join_all(self.steps).await;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
