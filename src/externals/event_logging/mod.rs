use std::sync::Arc;

use self::adapters::EventLoggingDisplay;

pub mod adapters;

pub struct EventLoggingModule {
    pub display_adapter: Arc<EventLoggingDisplay>,
}

impl EventLoggingModule {
    pub fn initialize() -> Self {
        Self {
            display_adapter: Arc::new(EventLoggingDisplay::default()),
        }
    }
}
