pub mod aggregate;
pub mod collector;
pub mod netstat;
pub mod network;

use crate::error::SampleError;
use crate::system::netstat::Connection;
use crate::system::network::Sample;

/// Where the main loop gets its raw measurements from.
///
/// [`collector::Collector`] reads the live OS; tests script their own.
pub trait StatsSource {
    /// Cumulative counters of every interface visible right now.
    fn sample(&mut self) -> Result<Sample, SampleError>;

    /// Every internet-family socket open right now.
    fn list_connections(&mut self) -> Result<Vec<Connection>, SampleError>;
}
