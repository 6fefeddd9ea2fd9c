//! Webserver state management
//!
//! Runtime bookkeeping for the HTTP process plus the state handed to every
//! request handler.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use crate::traits::CatalogStore;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub bind_address: SocketAddr,
    pub server_start_time: Instant,
    is_running: AtomicBool,
    requests_served: AtomicU64,
}

impl WebServerState {
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            server_start_time: Instant::now(),
            is_running: AtomicBool::new(true),
            requests_served: AtomicU64::new(0),
        }
    }

    /// Check if the server is running
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Count one API request, returning the new total
    pub fn record_request(&self) -> u64 {
        self.requests_served.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn requests_served(&self) -> u64 {
        self.requests_served.load(Ordering::Relaxed)
    }
}

/// Shared state extracted by the API handlers
pub struct ApiState<S> {
    pub store: Arc<S>,
    pub server: Arc<WebServerState>,
}

impl<S: CatalogStore> ApiState<S> {
    pub fn new(store: Arc<S>, server: Arc<WebServerState>) -> Self {
        Self { store, server }
    }
}

// Manual impl: cloning only bumps the Arcs, S itself need not be Clone.
impl<S> Clone for ApiState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            server: Arc::clone(&self.server),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn test_address() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000)
    }

    #[test]
    fn test_webserver_state_creation() {
        let state = WebServerState::new(test_address());

        assert_eq!(state.bind_address, test_address());
        assert!(state.is_running());
        assert_eq!(state.requests_served(), 0);
        assert!(state.get_uptime_seconds() < 5);
    }

    #[test]
    fn test_request_counting() {
        let state = WebServerState::new(test_address());

        assert_eq!(state.record_request(), 1);
        assert_eq!(state.record_request(), 2);
        assert_eq!(state.requests_served(), 2);
    }

    #[test]
    fn test_running_flag() {
        let state = WebServerState::new(test_address());

        state.set_running(false);
        assert!(!state.is_running());
        state.set_running(true);
        assert!(state.is_running());
    }
}
