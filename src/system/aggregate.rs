use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::net::IpAddr;

use crate::system::netstat::Connection;

/// Number of connections open to one remote IP in the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteEndpointCount {
    pub ip: IpAddr,
    pub count: usize,
}

/// Rank remote IPs by how many connections point at them.
///
/// Sockets without a remote side (listeners, unconnected UDP) are skipped and
/// ports are ignored. Ties keep the order in which the IPs were first seen in
/// `connections`. At most `top_n` entries are returned.
pub fn aggregate(connections: &[Connection], top_n: usize) -> Vec<RemoteEndpointCount> {
    let mut slots: HashMap<IpAddr, usize> = HashMap::new();
    let mut counts: Vec<RemoteEndpointCount> = Vec::new();

    for ip in connections.iter().filter_map(Connection::remote_ip) {
        match slots.entry(ip) {
            Entry::Occupied(slot) => counts[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push(RemoteEndpointCount { ip, count: 1 });
            }
        }
    }

    // sort_by is stable, which keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}
