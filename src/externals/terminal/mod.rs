use std::{
    io::{stdout, Stdout},
    sync::Arc,
};

use self::adapters::TerminalPanel;

pub mod adapters;

pub struct TerminalModule {
    /// Serves both the display rows and the notification line.
    pub panel_adapter: Arc<TerminalPanel<Stdout>>,
}

impl TerminalModule {
    pub fn initialize(styled: bool) -> Self {
        Self {
            panel_adapter: Arc::new(TerminalPanel::new(stdout(), styled)),
        }
    }
}
