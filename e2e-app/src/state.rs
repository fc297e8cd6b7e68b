use std::sync::Arc;

use service_kit::{MonotonicClock, ServiceIdentity};

#[derive(Clone, Debug)]
pub struct AppState {
    pub identity: Arc<ServiceIdentity>,
    pub clock: MonotonicClock,
}

impl AppState {
    pub fn new(identity: ServiceIdentity, clock: MonotonicClock) -> Self {
        Self {
            identity: Arc::new(identity),
            clock,
        }
    }
}
