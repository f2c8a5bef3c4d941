//! Socket enumeration.
//!
//! Linux reads the kernel tables under /proc/net through `procfs`.
//! Windows uses GetExtendedTcpTable from iphlpapi.dll, the same table
//! `netstat -ano` prints. Other platforms report no sockets.

use std::net::{IpAddr, SocketAddr};

use crate::error::SampleError;

/// One internet-family socket, reduced to what the ranking needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// `None` for listeners and unconnected datagram sockets.
    pub remote_addr: Option<SocketAddr>,
}

impl Connection {
    pub fn remote_ip(&self) -> Option<IpAddr> {
        self.remote_addr.map(|addr| addr.ip())
    }
}

/// Kernel tables report "no peer" as port 0 (usually with an unspecified
/// address); treat any port-0 remote as absent.
pub fn remote_endpoint(addr: SocketAddr) -> Option<SocketAddr> {
    if addr.port() == 0 {
        None
    } else {
        Some(addr)
    }
}

// ─── Fetch all connections ───────────────────────────────────────────────────

/// Enumerate sockets, TCP before UDP and IPv4 before IPv6, in kernel table
/// order.
pub fn fetch_connections() -> Result<Vec<Connection>, SampleError> {
    let mut conns = Vec::with_capacity(256);
    platform::fetch(&mut conns)?;
    Ok(conns)
}

#[cfg(target_os = "linux")]
mod platform {
    use std::net::SocketAddr;

    use procfs::ProcError;

    use super::{remote_endpoint, Connection};
    use crate::error::SampleError;

    pub(super) fn fetch(conns: &mut Vec<Connection>) -> Result<(), SampleError> {
        let tcp = required("tcp", procfs::net::tcp())?;
        let tcp6 = optional("tcp6", procfs::net::tcp6())?;
        conns.extend(tcp.iter().chain(&tcp6).map(|e| connection(e.remote_address)));

        let udp = required("udp", procfs::net::udp())?;
        let udp6 = optional("udp6", procfs::net::udp6())?;
        conns.extend(udp.iter().chain(&udp6).map(|e| connection(e.remote_address)));
        Ok(())
    }

    fn required<T>(table: &'static str, res: Result<Vec<T>, ProcError>) -> Result<Vec<T>, SampleError> {
        res.map_err(|e| SampleError::socket_table(table, std::io::Error::other(e)))
    }

    /// IPv6 tables are missing when the kernel runs without IPv6.
    fn optional<T>(table: &'static str, res: Result<Vec<T>, ProcError>) -> Result<Vec<T>, SampleError> {
        match res {
            Err(ProcError::NotFound(_)) => {
                tracing::debug!(table, "socket table not present, skipping");
                Ok(Vec::new())
            }
            other => required(table, other),
        }
    }

    fn connection(remote: SocketAddr) -> Connection {
        Connection {
            remote_addr: remote_endpoint(remote),
        }
    }
}

/// Only TCP is read here: the Win32 UDP tables carry no remote address, so
/// they could never contribute to the ranking.
#[cfg(windows)]
mod platform {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

    use super::{remote_endpoint, Connection};
    use crate::error::SampleError;

    // ─── Win32 FFI structs ───────────────────────────────────────────────────

    const AF_INET: u32 = 2;
    const AF_INET6: u32 = 23;
    const TCP_TABLE_OWNER_PID_ALL: u32 = 5;
    const NO_ERROR: u32 = 0;
    const ERROR_INSUFFICIENT_BUFFER: u32 = 122;
    /// The table can grow between the size probe and the real call.
    const MAX_ATTEMPTS: usize = 4;

    // Full Win32 row layouts; only the remote side is read.
    #[repr(C)]
    #[allow(non_snake_case, non_camel_case_types, dead_code)]
    struct MIB_TCPROW_OWNER_PID {
        dwState: u32,
        dwLocalAddr: u32,
        dwLocalPort: u32,
        dwRemoteAddr: u32,
        dwRemotePort: u32,
        dwOwningPid: u32,
    }

    #[repr(C)]
    #[allow(non_snake_case, non_camel_case_types, dead_code)]
    struct MIB_TCP6ROW_OWNER_PID {
        ucLocalAddr: [u8; 16],
        dwLocalScopeId: u32,
        dwLocalPort: u32,
        ucRemoteAddr: [u8; 16],
        dwRemoteScopeId: u32,
        dwRemotePort: u32,
        dwState: u32,
        dwOwningPid: u32,
    }

    // ─── FFI declarations ────────────────────────────────────────────────────

    #[link(name = "iphlpapi")]
    extern "system" {
        fn GetExtendedTcpTable(
            pTcpTable: *mut u8,
            pdwSize: *mut u32,
            bOrder: i32,
            ulAf: u32,
            TableClass: u32,
            Reserved: u32,
        ) -> u32;
    }

    fn ntohs(port: u32) -> u16 {
        ((port & 0xFF) << 8 | (port >> 8) & 0xFF) as u16
    }

    pub(super) fn fetch(conns: &mut Vec<Connection>) -> Result<(), SampleError> {
        let buf = read_table("tcp", AF_INET)?;
        for row in unsafe { rows::<MIB_TCPROW_OWNER_PID>(&buf) } {
            let remote = SocketAddr::new(
                IpAddr::V4(Ipv4Addr::from(row.dwRemoteAddr.to_ne_bytes())),
                ntohs(row.dwRemotePort),
            );
            conns.push(Connection {
                remote_addr: remote_endpoint(remote),
            });
        }

        let buf = read_table("tcp6", AF_INET6)?;
        for row in unsafe { rows::<MIB_TCP6ROW_OWNER_PID>(&buf) } {
            let remote = SocketAddr::new(IpAddr::V6(Ipv6Addr::from(row.ucRemoteAddr)), ntohs(row.dwRemotePort));
            conns.push(Connection {
                remote_addr: remote_endpoint(remote),
            });
        }
        Ok(())
    }

    /// Run the two-phase GetExtendedTcpTable query and return the raw table.
    ///
    /// The buffer is u32-backed so the row structs are properly aligned.
    fn read_table(table: &'static str, af: u32) -> Result<Vec<u32>, SampleError> {
        const CALL: &str = "GetExtendedTcpTable";
        let mut size: u32 = 0;
        for _ in 0..MAX_ATTEMPTS {
            let mut buf = vec![0u32; (size as usize).div_ceil(4)];
            let ptr = if buf.is_empty() {
                std::ptr::null_mut()
            } else {
                buf.as_mut_ptr() as *mut u8
            };
            let status = unsafe { GetExtendedTcpTable(ptr, &mut size, 0, af, TCP_TABLE_OWNER_PID_ALL, 0) };
            match status {
                NO_ERROR => return Ok(buf),
                ERROR_INSUFFICIENT_BUFFER => continue,
                status => return Err(SampleError::Win32 { call: CALL, table, status }),
            }
        }
        Err(SampleError::Win32 {
            call: CALL,
            table,
            status: ERROR_INSUFFICIENT_BUFFER,
        })
    }

    /// View the rows following the leading `dwNumEntries` of a table.
    ///
    /// # Safety
    /// `buf` must hold a table whose rows are of type `T`.
    unsafe fn rows<T>(buf: &[u32]) -> &[T] {
        if buf.is_empty() {
            return &[];
        }
        let count = buf[0] as usize;
        // Every row type starts at offset 4 and is 4-byte aligned.
        let first = (buf.as_ptr() as *const u8).add(4) as *const T;
        std::slice::from_raw_parts(first, count)
    }
}

#[cfg(not(any(target_os = "linux", windows)))]
mod platform {
    use super::Connection;
    use crate::error::SampleError;

    pub(super) fn fetch(_conns: &mut Vec<Connection>) -> Result<(), SampleError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_zero_means_no_peer() {
        assert_eq!(remote_endpoint("0.0.0.0:0".parse().unwrap()), None);
        assert_eq!(remote_endpoint("[::]:0".parse().unwrap()), None);
        let peer: SocketAddr = "93.184.216.34:443".parse().unwrap();
        assert_eq!(remote_endpoint(peer), Some(peer));
    }

    #[test]
    fn remote_ip_drops_port() {
        let conn = Connection {
            remote_addr: Some("140.82.112.3:443".parse().unwrap()),
        };
        assert_eq!(conn.remote_ip(), Some("140.82.112.3".parse().unwrap()));
    }

    #[test]
    fn listener_has_no_remote_ip() {
        let conn = Connection {
            remote_addr: remote_endpoint("0.0.0.0:0".parse().unwrap()),
        };
        assert_eq!(conn.remote_ip(), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn live_tables_are_readable() {
        // /proc/net/tcp is world readable, so this only fails on exotic sandboxes.
        if std::path::Path::new("/proc/net/tcp").exists() {
            assert!(fetch_connections().is_ok());
        }
    }
}
