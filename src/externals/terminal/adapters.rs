use std::{
    io::{self, Write},
    sync::Mutex,
};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tracing::warn;

use crate::{
    internals::core::{
        ports::{DisplayPort, NotificationPort},
        render::NOT_AVAILABLE,
    },
    models::{
        field_view::{DisplayField, FieldView},
        notification::NotificationState,
    },
};

const HELP_LINE: &str = "off | heat [N] | isave [N] | raw <name> [N] | refresh | quit";

/// Everything the terminal shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub external_temperature: FieldView,
    pub internal_temperature: FieldView,
    pub wifi_signal: FieldView,
    pub last_command: FieldView,
    pub notification: NotificationState,
}

impl Default for PanelState {
    fn default() -> Self {
        let empty = FieldView {
            text: NOT_AVAILABLE.to_string(),
            warning: false,
        };
        Self {
            external_temperature: empty.clone(),
            internal_temperature: empty.clone(),
            wifi_signal: empty.clone(),
            last_command: empty,
            notification: NotificationState::default(),
        }
    }
}

impl PanelState {
    pub fn row(&self, field: DisplayField) -> &FieldView {
        match field {
            DisplayField::ExternalTemperature => &self.external_temperature,
            DisplayField::InternalTemperature => &self.internal_temperature,
            DisplayField::WifiSignal => &self.wifi_signal,
            DisplayField::LastCommand => &self.last_command,
        }
    }
}

struct Inner<W: Write> {
    state: PanelState,
    out: W,
}

/// Draws the panel on a terminal. With `styled` the screen is cleared before
/// each draw and warnings are red; without it every draw is appended as
/// plain text and warnings are marked with `!`.
pub struct TerminalPanel<W: Write + Send> {
    inner: Mutex<Inner<W>>,
    styled: bool,
}

impl<W: Write + Send> TerminalPanel<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: PanelState::default(),
                out,
            }),
            styled,
        }
    }

    pub fn snapshot(&self) -> PanelState {
        self.lock().state.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<W>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update(&self, change: impl FnOnce(&mut PanelState), redraw: bool) {
        let mut inner = self.lock();
        change(&mut inner.state);
        if !redraw {
            return;
        }
        let Inner { state, out } = &mut *inner;
        let result = if self.styled {
            draw_styled(state, out)
        } else {
            draw_plain(state, out)
        };
        if let Err(e) = result.and_then(|_| out.flush()) {
            warn!("Failed to draw panel. Error: {}", e);
        }
    }
}

fn draw_plain(state: &PanelState, out: &mut impl Write) -> io::Result<()> {
    for field in DisplayField::ALL {
        let row = state.row(field);
        let marker = if row.warning { "!" } else { " " };
        writeln!(out, "{} {:<22}{}", marker, field.label(), row.text)?;
    }
    if state.notification.visible {
        writeln!(out, "  {}", state.notification)?;
    }
    writeln!(out)
}

fn draw_styled(state: &PanelState, out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for field in DisplayField::ALL {
        let row = state.row(field);
        queue!(out, Print(format!("{:<22}", field.label())))?;
        if row.warning {
            queue!(
                out,
                SetForegroundColor(Color::Red),
                SetAttribute(Attribute::Bold),
                Print(&row.text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        } else {
            queue!(out, Print(&row.text))?;
        }
        queue!(out, Print("\r\n"))?;
    }
    queue!(out, Print("\r\n"))?;
    if state.notification.visible {
        queue!(
            out,
            SetForegroundColor(Color::Yellow),
            Print(format!("{}\r\n", state.notification)),
            ResetColor
        )?;
    } else {
        queue!(out, Print("\r\n"))?;
    }
    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print(format!("{}\r\n", HELP_LINE)),
        ResetColor
    )
}

impl<W: Write + Send> DisplayPort for TerminalPanel<W> {
    fn set_external_temperature(&self, view: &FieldView) {
        self.update(|state| state.external_temperature = view.clone(), false);
    }

    fn set_internal_temperature(&self, view: &FieldView) {
        self.update(|state| state.internal_temperature = view.clone(), false);
    }

    fn set_wifi_signal(&self, view: &FieldView) {
        self.update(|state| state.wifi_signal = view.clone(), false);
    }

    fn set_last_command(&self, view: &FieldView) {
        self.update(|state| state.last_command = view.clone(), false);
    }

    fn flush(&self) {
        self.update(|_| {}, true);
    }
}

impl<W: Write + Send> NotificationPort for TerminalPanel<W> {
    fn show(&self, title: &str, body: &str) {
        self.update(
            |state| state.notification = NotificationState::shown(title, body),
            true,
        );
    }

    fn hide(&self) {
        self.update(|state| state.notification.hide(), true);
    }
}
