use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::{
    pipeline::{CycleReport, FetchPipeline},
    view::ViewSink,
};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Runs the pipeline immediately and then once per period, forever.
///
/// Every tick spawns an independent cycle. Cycles are never skipped or
/// cancelled, so slow responses can overlap and the last one to finish wins.
#[derive(Debug)]
pub struct Scheduler<S: ViewSink + 'static> {
    pipeline: Arc<FetchPipeline<S>>,
    period: Duration,
    reporter: Option<UnboundedSender<CycleReport>>,
}

impl<S: ViewSink + 'static> Scheduler<S> {
    /// Uses the pipeline's configured refresh period.
    pub fn new(pipeline: Arc<FetchPipeline<S>>) -> Self {
        let period = pipeline.config().refresh_period();
        Self {
            pipeline,
            period,
            reporter: None,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Sends each finished cycle's report to `reporter`. Stalled cycles that never finish send nothing.
    pub fn with_reporter(mut self, reporter: UnboundedSender<CycleReport>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn start(self) -> SchedulerHandle {
        let Self {
            pipeline,
            period,
            reporter,
        } = self;

        tracing::info!(period_ms = period.as_millis() as u64, "starting weather refresh");

        let ticker = tokio::spawn(async move {
            let mut ticks = interval(period.max(MIN_PERIOD));
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // The first tick completes immediately.
                ticks.tick().await;

                let pipeline = Arc::clone(&pipeline);
                let reporter = reporter.clone();
                tokio::spawn(async move {
                    let report = pipeline.run_cycle().await;
                    if let Some(reporter) = reporter {
                        // Receiver gone just means nobody is listening anymore.
                        let _ = reporter.send(report);
                    }
                });
            }
        });

        SchedulerHandle { ticker }
    }
}

/// Owns the ticking task.
#[derive(Debug)]
pub struct SchedulerHandle {
    ticker: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Stops future ticks. Cycles already in flight run to completion.
    pub fn stop(self) {
        self.ticker.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.ticker.is_finished()
    }
}
