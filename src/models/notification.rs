use std::fmt::Display;

/// Title shown on every failure notification.
pub const ERROR_TITLE: &str = "Error";

/// The one notification slot of the panel. A hidden notification keeps its
/// content until the next one replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub title: String,
    pub body: String,
    pub visible: bool,
}

impl NotificationState {
    pub fn shown(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            visible: true,
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Display for NotificationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.title, self.body)
    }
}
