use sysinfo::Networks;

use crate::error::SampleError;
use crate::system::netstat::{self, Connection};
use crate::system::network::{InterfaceSnapshot, Sample};
use crate::system::StatsSource;

/// Live OS collector: interface counters from `sysinfo`, sockets from the
/// platform tables in [`netstat`].
pub struct Collector {
    networks: Networks,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl StatsSource for Collector {
    fn sample(&mut self) -> Result<Sample, SampleError> {
        // true = drop interfaces that went away, so only what is visible now is reported
        self.networks.refresh(true);

        let sample: Sample = self
            .networks
            .iter()
            .map(|(name, data)| {
                (
                    name.clone(),
                    InterfaceSnapshot {
                        name: name.clone(),
                        bytes_sent: data.total_transmitted(),
                        bytes_recv: data.total_received(),
                        packets_sent: data.total_packets_transmitted(),
                        packets_recv: data.total_packets_received(),
                    },
                )
            })
            .collect();

        tracing::trace!(interfaces = sample.len(), "sampled interface counters");
        Ok(sample)
    }

    fn list_connections(&mut self) -> Result<Vec<Connection>, SampleError> {
        let conns = netstat::fetch_connections()?;
        tracing::trace!(connections = conns.len(), "listed sockets");
        Ok(conns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_never_go_backwards_between_samples() {
        let mut collector = Collector::new();
        let first = collector.sample().expect("first sample");
        let second = collector.sample().expect("second sample");
        for (name, before) in &first {
            if let Some(after) = second.get(name) {
                assert!(after.bytes_sent >= before.bytes_sent, "{name} bytes_sent");
                assert!(after.bytes_recv >= before.bytes_recv, "{name} bytes_recv");
            }
        }
    }

    #[test]
    fn snapshot_name_matches_key() {
        let mut collector = Collector::new();
        for (name, snap) in collector.sample().expect("sample") {
            assert_eq!(name, snap.name);
        }
    }
}
