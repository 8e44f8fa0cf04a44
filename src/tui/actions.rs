use serde::{Deserialize, Serialize};

use crate::manager::operations::{KillOutcome, ProcessKiller};
use crate::tui::row::DisplayRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Line shown under the table after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// Which action `enter` triggers, as named in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnterAction {
    #[default]
    Kill,
    Announce,
}

/// What happens when the operator presses `enter` on a row.
pub trait RowAction {
    fn on_enter(&mut self, row: &DisplayRow) -> StatusMessage;
}

/// Terminates every process sharing the selected row's name.
///
/// The table is not re-sampled afterwards, so the row stays on screen.
pub struct KillByName<K: ProcessKiller> {
    killer: K,
}

impl<K: ProcessKiller> KillByName<K> {
    pub fn new(killer: K) -> Self {
        KillByName { killer }
    }
}

impl<K: ProcessKiller> RowAction for KillByName<K> {
    fn on_enter(&mut self, row: &DisplayRow) -> StatusMessage {
        tracing::info!("terminate requested for \"{}\" (selected PID {})", row.name, row.pid);
        match self.killer.terminate(&row.name) {
            Ok(KillOutcome { signalled: 1, denied: 0 }) => {
                StatusMessage::info(format!("process {} killed!", row.name))
            }
            Ok(KillOutcome { signalled, denied: 0 }) => StatusMessage::info(format!(
                "process {} killed! ({} processes signalled)",
                row.name, signalled
            )),
            Ok(KillOutcome { signalled, denied }) => {
                tracing::warn!(
                    "{} processes named \"{}\" refused the signal",
                    denied,
                    row.name
                );
                StatusMessage::error(format!(
                    "process {} killed! ({} signalled, {} permission denied)",
                    row.name, signalled, denied
                ))
            }
            Err(e) => {
                tracing::warn!("terminate failed: {}", e);
                StatusMessage::error(format!("could not kill {}: {}", row.name, e))
            }
        }
    }
}

/// Names the selected row without touching any process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Announce;

impl RowAction for Announce {
    fn on_enter(&mut self, row: &DisplayRow) -> StatusMessage {
        StatusMessage::info(format!("process {} selected", row.name))
    }
}
