//! The main loop: sample, diff, classify, rank, render, wait.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::SampleError;
use crate::model::{DashboardModel, InterfaceRow};
use crate::system::aggregate::aggregate;
use crate::system::network::{compute_deltas, InterfaceState};
use crate::system::StatsSource;
use crate::ui::Renderer;

/// Pause after a failed tick before sampling again.
pub const FAILURE_BACKOFF: Duration = Duration::from_secs(1);

/// Outcome of waiting between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// The timeout ran out.
    Elapsed,
    /// The user asked to quit.
    Cancelled,
    /// The display needs repainting (terminal resized); keep waiting afterwards.
    Redraw,
}

/// Blocks between ticks until the timeout passes or something interrupts it.
pub trait Ticker {
    fn wait(&mut self, timeout: Duration) -> anyhow::Result<Wait>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns the interface state and drives one tick at a time.
pub struct App<S, R, T> {
    config: Config,
    source: S,
    renderer: R,
    ticker: T,
    state: InterfaceState,
    pub ticks: u64,
    pub failed_ticks: u64,
}

impl<S, R, T> App<S, R, T>
where
    S: StatsSource,
    R: Renderer,
    T: Ticker,
{
    pub fn new(config: Config, source: S, renderer: R, ticker: T) -> Self {
        Self {
            config,
            source,
            renderer,
            ticker,
            state: InterfaceState::new(),
            ticks: 0,
            failed_ticks: 0,
        }
    }

    /// Run until cancelled. Only rendering or input failures end the loop
    /// with an error; sampling failures are retried forever.
    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.step()? == LoopState::Running {}
        tracing::debug!(ticks = self.ticks, failed_ticks = self.failed_ticks, "main loop stopped");
        Ok(())
    }

    /// One tick followed by its wait.
    pub fn step(&mut self) -> anyhow::Result<LoopState> {
        self.ticks += 1;
        match self.tick() {
            Ok(model) => {
                self.renderer.render(&model)?;
                self.pause(self.config.refresh_duration())
            }
            Err(e) => {
                self.failed_ticks += 1;
                self.renderer.notify_failure(&e)?;
                self.pause(FAILURE_BACKOFF)
            }
        }
    }

    /// Sample and build the render model. The interface state is only
    /// replaced once both queries succeeded.
    fn tick(&mut self) -> Result<DashboardModel, SampleError> {
        let sample = self
            .source
            .sample()
            .inspect_err(|e| log_sample_error("sample_interfaces", e))?;
        let connections = self
            .source
            .list_connections()
            .inspect_err(|e| log_sample_error("list_connections", e))?;

        let (deltas, next_state) = compute_deltas(&self.state, &sample, self.config.refresh_interval);
        self.state = next_state;

        let alert = self.config.alert_threshold;
        Ok(DashboardModel {
            interfaces: deltas
                .into_iter()
                .map(|delta| InterfaceRow::classify(delta, alert))
                .collect(),
            remotes: aggregate(&connections, self.config.top),
            top_n: self.config.top,
            alert_threshold: alert,
            refresh_interval: self.config.refresh_interval,
            sampled_at: chrono::Local::now(),
        })
    }

    /// Wait out `duration`, repainting on request. Cancellation is only
    /// observed here, between ticks.
    fn pause(&mut self, duration: Duration) -> anyhow::Result<LoopState> {
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.ticker.wait(remaining)? {
                Wait::Elapsed => return Ok(LoopState::Running),
                Wait::Cancelled => return Ok(LoopState::Stopped),
                Wait::Redraw => self.renderer.redraw()?,
            }
        }
    }

    pub fn interface_state(&self) -> &InterfaceState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }
}

fn log_sample_error(operation: &'static str, e: &SampleError) {
    match std::error::Error::source(e) {
        Some(source) => tracing::error!(operation, error = %e, source = %source, "sampling failed"),
        None => tracing::error!(operation, error = %e, "sampling failed"),
    }
}
