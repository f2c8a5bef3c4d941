//! Per-interface counters and the delta/rate computation between ticks.

use std::collections::{BTreeMap, HashMap};

/// Cumulative counters of one interface, read at a single instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceSnapshot {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

/// Every interface visible at sampling time, keyed and ordered by name.
pub type Sample = BTreeMap<String, InterfaceSnapshot>;

/// Last snapshot seen for every interface ever observed.
///
/// Entries are replaced when an interface shows up again and are never
/// removed, so an interface that disappears keeps its stale counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceState {
    last: HashMap<String, InterfaceSnapshot>,
}

impl InterfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceSnapshot> {
        self.last.get(name)
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

/// Traffic of one interface over one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeltaRow {
    pub interface_name: String,
    pub delta_bytes_sent: u64,
    pub delta_bytes_recv: u64,
    pub delta_packets_sent: u64,
    pub delta_packets_recv: u64,
    pub sent_mbps: f64,
    pub recv_mbps: f64,
}

/// Turn a fresh sample into per-interface deltas against `prior`.
///
/// An interface without a prior entry is diffed against zero, so its first
/// row carries the whole counter history since the interface came up. A
/// counter that went backwards (reset, driver reload, wrap) yields 0.
///
/// Returns the rows in sample order together with the state to use on the
/// next tick.
pub fn compute_deltas(
    prior: &InterfaceState,
    sample: &Sample,
    interval_secs: f64,
) -> (Vec<DeltaRow>, InterfaceState) {
    let mut next = prior.clone();
    let mut rows = Vec::with_capacity(sample.len());

    for (name, now) in sample {
        let row = match prior.get(name) {
            Some(before) => delta_row(name, before, now, interval_secs),
            None => delta_row(name, &InterfaceSnapshot::default(), now, interval_secs),
        };
        rows.push(row);
        next.last.insert(name.clone(), now.clone());
    }

    (rows, next)
}

fn delta_row(
    name: &str,
    before: &InterfaceSnapshot,
    now: &InterfaceSnapshot,
    interval_secs: f64,
) -> DeltaRow {
    let delta_bytes_sent = now.bytes_sent.saturating_sub(before.bytes_sent);
    let delta_bytes_recv = now.bytes_recv.saturating_sub(before.bytes_recv);
    DeltaRow {
        interface_name: name.to_string(),
        delta_bytes_sent,
        delta_bytes_recv,
        delta_packets_sent: now.packets_sent.saturating_sub(before.packets_sent),
        delta_packets_recv: now.packets_recv.saturating_sub(before.packets_recv),
        sent_mbps: mbps(delta_bytes_sent, interval_secs),
        recv_mbps: mbps(delta_bytes_recv, interval_secs),
    }
}

/// Megabits per second for `bytes` transferred over `interval_secs`.
pub fn mbps(bytes: u64, interval_secs: f64) -> f64 {
    if interval_secs <= 0.0 {
        return 0.0;
    }
    bytes as f64 * 8.0 / interval_secs / 1_000_000.0
}
