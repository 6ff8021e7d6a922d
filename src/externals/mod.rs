pub mod device_api;
pub mod event_logging;
pub mod terminal;
pub mod user_input;
