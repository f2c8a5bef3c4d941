//! What the renderer receives each tick: typed rows with their tiers, no
//! presentation markup.

use chrono::{DateTime, Local};

use crate::severity::{threshold_tier, Gauge, Tier};
use crate::system::aggregate::RemoteEndpointCount;
use crate::system::network::DeltaRow;

/// One interface's traffic plus its classification on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceRow {
    pub delta: DeltaRow,
    /// Threshold tier of `sent_mbps`, for the number color.
    pub sent_tier: Tier,
    /// Threshold tier of `recv_mbps`, for the number color.
    pub recv_tier: Tier,
    /// Worse of the two directions; drives the row highlight.
    pub row_tier: Tier,
    pub sent_gauge: Gauge,
    pub recv_gauge: Gauge,
}

impl InterfaceRow {
    pub fn classify(delta: DeltaRow, alert_threshold: f64) -> Self {
        let sent_tier = threshold_tier(delta.sent_mbps, alert_threshold);
        let recv_tier = threshold_tier(delta.recv_mbps, alert_threshold);
        Self {
            sent_gauge: Gauge::for_rate(delta.sent_mbps, alert_threshold),
            recv_gauge: Gauge::for_rate(delta.recv_mbps, alert_threshold),
            sent_tier,
            recv_tier,
            row_tier: sent_tier.max(recv_tier),
            delta,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub interfaces: Vec<InterfaceRow>,
    /// Ranked remote IPs; empty when nothing is connected.
    pub remotes: Vec<RemoteEndpointCount>,
    pub top_n: usize,
    pub alert_threshold: f64,
    pub refresh_interval: f64,
    pub sampled_at: DateTime<Local>,
}
