pub mod notifier;
pub mod ports;
pub mod render;
pub mod sequencer;
pub mod system;
