//! Companion service reachability checks.
//!
//! The agent talks to four local MCP services over TCP. Unreachable
//! companion services are advisory: they can be started on demand, so
//! every failure here is a warning, never an issue.

use std::fmt;
use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::Result;
use crate::report::ReportCollector;

use super::CheckContext;

/// Host the companion services bind to.
pub const SERVICE_HOST: &str = "localhost";

/// Per-port connect timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// A companion service the agent talks to.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDef {
    /// Display name used in report entries.
    pub display: &'static str,
    /// Environment variable overriding the port.
    pub port_var: &'static str,
    /// Port used when the variable is unset.
    pub default_port: u16,
}

/// Companion services, in report order.
pub const COMPANION_SERVICES: &[ServiceDef] = &[
    ServiceDef {
        display: "Math service",
        port_var: "MATH_HTTP_PORT",
        default_port: 8000,
    },
    ServiceDef {
        display: "Search service",
        port_var: "SEARCH_HTTP_PORT",
        default_port: 8001,
    },
    ServiceDef {
        display: "Trade service",
        port_var: "TRADE_HTTP_PORT",
        default_port: 8002,
    },
    ServiceDef {
        display: "Price service",
        port_var: "GETPRICE_HTTP_PORT",
        default_port: 8003,
    },
];

/// Why a connect attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnreachableReason {
    /// Host name did not resolve.
    Dns(String),
    /// No response within [`CONNECT_TIMEOUT`].
    TimedOut,
    /// Nothing listening on the port.
    ConnectionRefused,
    /// Any other socket error.
    Other(String),
}

impl fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreachableReason::Dns(detail) => write!(f, "host resolution failed: {}", detail),
            UnreachableReason::TimedOut => write!(f, "connection timed out"),
            UnreachableReason::ConnectionRefused => write!(f, "connection refused"),
            UnreachableReason::Other(detail) => write!(f, "{}", detail),
        }
    }
}

fn classify_connect_error(e: &io::Error) -> UnreachableReason {
    match e.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => UnreachableReason::TimedOut,
        io::ErrorKind::ConnectionRefused => UnreachableReason::ConnectionRefused,
        _ => UnreachableReason::Other(e.to_string()),
    }
}

/// Attempt a timeout-bounded TCP connect to `localhost:<port>`.
pub fn probe_port(port: u16) -> std::result::Result<(), UnreachableReason> {
    let mut addrs = (SERVICE_HOST, port)
        .to_socket_addrs()
        .map_err(|e| UnreachableReason::Dns(e.to_string()))?;
    let Some(addr) = addrs.next() else {
        return Err(UnreachableReason::Dns("no addresses resolved".to_string()));
    };

    match TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT) {
        Ok(_) => Ok(()),
        Err(e) => Err(classify_connect_error(&e)),
    }
}

/// Companion service check: connect to each declared port. Unreachable
/// services are warnings; the boolean reflects whether all were reachable
/// but is not consulted by the verdict.
pub fn check_companion_services(
    ctx: &CheckContext,
    collector: &mut ReportCollector,
) -> Result<bool> {
    let mut all_reachable = true;

    for svc in COMPANION_SERVICES {
        let port = ctx.env.port(svc.port_var, svc.default_port);
        match probe_port(port) {
            Ok(()) => {
                collector.success(format!("{} reachable on port {}", svc.display, port));
            }
            Err(reason) => {
                all_reachable = false;
                collector.warning(format!(
                    "{} not reachable on port {} ({})",
                    svc.display, port, reason
                ));
            }
        }
    }

    Ok(all_reachable)
}
