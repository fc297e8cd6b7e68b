/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use service_kit::{MonotonicClock, ServiceIdentity, SystemZone};

use crate::services::hostname::{HostnameSource, SystemHostname};

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<ServiceIdentity>,
    pub zone: SystemZone,
    pub clock: MonotonicClock,
    pub hostname: Arc<dyn HostnameSource>,
}

impl AppState {
    pub fn new(
        identity: ServiceIdentity,
        zone: SystemZone,
        clock: MonotonicClock,
        hostname: Arc<dyn HostnameSource>,
    ) -> Self {
        Self {
            identity: Arc::new(identity),
            zone,
            clock,
            hostname,
        }
    }

    /// State backed by the system clock and the OS hostname.
    pub fn system(identity: ServiceIdentity, zone: SystemZone) -> Self {
        Self::new(
            identity,
            zone,
            MonotonicClock::system(),
            Arc::new(SystemHostname),
        )
    }
}
