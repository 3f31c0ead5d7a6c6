use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    config::Config,
    error::StageError,
    model::{LocationRecord, WeatherRecord},
    present::Rendering,
    transport::{HttpTransport, Transport},
    view::{ViewController, ViewSink},
};

/// How a cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CycleOutcome {
    /// Weather rendered and the content panel shown.
    Content,
    /// A body failed to parse or validate; the failure panel is shown.
    Failure,
    /// A request failed or returned a non-200 status; the view was not touched.
    Stalled,
}

#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    pub completed_at: DateTime<Utc>,
}

/// One location lookup followed by one weather lookup, rendered into the view.
#[derive(Debug)]
pub struct FetchPipeline<S: ViewSink> {
    config: Arc<Config>,
    transport: Arc<dyn Transport>,
    view: ViewController<S>,
    // Held for a whole render so overlapping cycles never interleave their writes.
    render_lock: Mutex<()>,
}

impl<S: ViewSink> FetchPipeline<S> {
    pub fn new(config: Arc<Config>, sink: S) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()), sink)
    }

    pub fn with_transport(config: Arc<Config>, transport: Arc<dyn Transport>, sink: S) -> Self {
        Self {
            config,
            transport,
            view: ViewController::new(sink),
            render_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> &ViewController<S> {
        &self.view
    }

    /// Runs one full cycle. Never cancelled and never timed out; a request that
    /// never completes keeps this future pending.
    pub async fn run_cycle(&self) -> CycleReport {
        tracing::info!("getting latest weather information");

        let outcome = match self.fetch_and_render().await {
            Ok(()) => CycleOutcome::Content,
            Err(err) if err.is_silent() => {
                tracing::debug!(error = %err, "cycle stalled");
                CycleOutcome::Stalled
            }
            Err(err) => {
                tracing::info!(error = %err, "showing failure message");
                let _render = self.lock_render();
                self.view.show_failure();
                CycleOutcome::Failure
            }
        };

        CycleReport {
            outcome,
            completed_at: Utc::now(),
        }
    }

    async fn fetch_and_render(&self) -> Result<(), StageError> {
        let location_body = self.transport.get(&self.config.location_url()).await?;
        let weather_url = self.on_location_response(&location_body)?;

        let weather_body = self.transport.get(&weather_url).await?;
        self.on_weather_response(&weather_body)
    }

    /// Parses and validates the location body, returning the weather URL to fetch next.
    pub fn on_location_response(&self, raw_body: &str) -> Result<String, StageError> {
        tracing::debug!(body = raw_body, "location data received");

        let data: Value = serde_json::from_str(raw_body)?;
        let location = LocationRecord::from_value(&data).ok_or(StageError::Invalid("location"))?;

        Ok(self
            .config
            .weather_url(location.latitude, location.longitude))
    }

    /// Parses and validates the weather body, then renders it and shows the content panel.
    pub fn on_weather_response(&self, raw_body: &str) -> Result<(), StageError> {
        tracing::debug!(body = raw_body, "weather data received");

        let data: Value = serde_json::from_str(raw_body)?;
        let record = WeatherRecord::from_value(&data).ok_or(StageError::Invalid("weather"))?;

        let rendering = Rendering::from_record(&self.config, &record);
        let _render = self.lock_render();
        self.view.apply(&rendering);
        self.view.show_content();

        Ok(())
    }

    fn lock_render(&self) -> MutexGuard<'_, ()> {
        self.render_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
