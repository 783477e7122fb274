use crate::config::ConnectivityConfig;
use std::net::{SocketAddr, UdpSocket};

/// Answers "is the network usable right now?".
///
/// Point-in-time snapshot, not a subscription: callers must re-check before
/// each use. Implementations must never block and never fail; anything that
/// goes wrong while querying the platform reads as "unavailable".
pub trait Connectivity: Send + Sync {
    fn is_available(&self) -> bool;
}

/// OS-backed connectivity check.
///
/// Asks the kernel to pick a route to each probe address by `connect()`ing a
/// UDP socket. Connecting a datagram socket performs route selection without
/// sending a single packet, so this is synchronous and traffic-free. A host
/// with no usable network path has no route to any probe.
pub struct SystemConnectivity {
    probe_addrs: Vec<SocketAddr>,
}

impl SystemConnectivity {
    pub fn new(cfg: &ConnectivityConfig) -> Self {
        SystemConnectivity {
            probe_addrs: cfg.probe_addrs.clone(),
        }
    }

    fn has_route(addr: &SocketAddr) -> bool {
        let bind_addr: SocketAddr = if addr.is_ipv4() {
            "0.0.0.0:0".parse().expect("static addr")
        } else {
            "[::]:0".parse().expect("static addr")
        };
        let socket = match UdpSocket::bind(bind_addr) {
            Ok(s) => s,
            Err(_) => return false,
        };
        socket.connect(addr).is_ok()
    }
}

impl Connectivity for SystemConnectivity {
    fn is_available(&self) -> bool {
        for addr in &self.probe_addrs {
            if Self::has_route(addr) {
                tracing::debug!("connectivity check: route to {} found", addr);
                return true;
            }
        }
        tracing::debug!(
            "connectivity check: no route to any of {} probe addrs",
            self.probe_addrs.len()
        );
        false
    }
}
