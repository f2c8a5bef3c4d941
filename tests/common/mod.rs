// Shared test doubles for driving the main loop without an OS or terminal

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use cherubin::app::{Ticker, Wait};
use cherubin::error::SampleError;
use cherubin::model::DashboardModel;
use cherubin::system::netstat::{remote_endpoint, Connection};
use cherubin::system::network::{InterfaceSnapshot, Sample};
use cherubin::system::StatsSource;
use cherubin::ui::Renderer;

pub fn snapshot(name: &str, bytes_sent: u64, bytes_recv: u64) -> InterfaceSnapshot {
    InterfaceSnapshot {
        name: name.to_string(),
        bytes_sent,
        bytes_recv,
        packets_sent: bytes_sent / 100,
        packets_recv: bytes_recv / 100,
    }
}

pub fn sample(snaps: &[InterfaceSnapshot]) -> Sample {
    snaps.iter().map(|s| (s.name.clone(), s.clone())).collect()
}

pub fn established(remote: &str) -> Connection {
    Connection {
        remote_addr: Some(remote.parse().unwrap()),
    }
}

pub fn listening() -> Connection {
    // Listeners report an unspecified peer with port 0.
    Connection {
        remote_addr: remote_endpoint("0.0.0.0:0".parse().unwrap()),
    }
}

pub fn table_error() -> SampleError {
    SampleError::socket_table(
        "tcp",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    )
}

/// One scripted tick: what `sample` and `list_connections` return.
pub enum Step {
    Ok(Sample, Vec<Connection>),
    SampleFails,
    ConnectionsFail(Sample),
}

#[derive(Default)]
pub struct ScriptedSource {
    steps: VecDeque<Step>,
    pending_connections: Option<Result<Vec<Connection>, SampleError>>,
    pub sample_calls: usize,
    pub connection_calls: usize,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            ..Self::default()
        }
    }
}

impl StatsSource for ScriptedSource {
    fn sample(&mut self) -> Result<Sample, SampleError> {
        self.sample_calls += 1;
        match self.steps.pop_front().expect("source script exhausted") {
            Step::Ok(s, conns) => {
                self.pending_connections = Some(Ok(conns));
                Ok(s)
            }
            Step::SampleFails => Err(table_error()),
            Step::ConnectionsFail(s) => {
                self.pending_connections = Some(Err(table_error()));
                Ok(s)
            }
        }
    }

    fn list_connections(&mut self) -> Result<Vec<Connection>, SampleError> {
        self.connection_calls += 1;
        self.pending_connections
            .take()
            .expect("list_connections called without a sample")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Rendered(DashboardModel),
    Failed(String),
    Redrawn,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub events: Vec<Event>,
}

impl RecordingRenderer {
    pub fn models(&self) -> Vec<&DashboardModel> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Rendered(m) => Some(m),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, model: &DashboardModel) -> anyhow::Result<()> {
        self.events.push(Event::Rendered(model.clone()));
        Ok(())
    }

    fn notify_failure(&mut self, error: &SampleError) -> anyhow::Result<()> {
        self.events.push(Event::Failed(error.to_string()));
        Ok(())
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        self.events.push(Event::Redrawn);
        Ok(())
    }
}

/// Returns scripted outcomes without sleeping and records every timeout it
/// was asked to wait. Once the script runs out it cancels.
#[derive(Default)]
pub struct ScriptedTicker {
    outcomes: VecDeque<Wait>,
    pub waits: Vec<Duration>,
}

impl ScriptedTicker {
    pub fn new(outcomes: Vec<Wait>) -> Self {
        Self {
            outcomes: outcomes.into(),
            waits: Vec::new(),
        }
    }

    /// Let `ticks` waits elapse, then cancel.
    pub fn elapsing(ticks: usize) -> Self {
        Self::new(vec![Wait::Elapsed; ticks])
    }
}

impl Ticker for ScriptedTicker {
    fn wait(&mut self, timeout: Duration) -> anyhow::Result<Wait> {
        self.waits.push(timeout);
        Ok(self.outcomes.pop_front().unwrap_or(Wait::Cancelled))
    }
}
