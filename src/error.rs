use thiserror::Error;

/// A recoverable failure while querying the OS for counters or sockets.
///
/// The main loop logs it, shows a transient notice and retries after a fixed
/// backoff. It never terminates the process.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Reading a kernel socket table failed (permission, missing file, parse).
    #[error("failed to read {table} socket table")]
    SocketTable {
        table: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A Win32 table query returned a non-zero status.
    #[error("{call} ({table}) returned status {status}")]
    Win32 {
        call: &'static str,
        table: &'static str,
        status: u32,
    },
}

impl SampleError {
    pub fn socket_table(table: &'static str, source: std::io::Error) -> Self {
        SampleError::SocketTable { table, source }
    }
}
