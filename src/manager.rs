use crate::config::Config;
use crate::error::MonitorError;
use crate::process::MetricsProvider;
use crate::tui::actions::{Announce, EnterAction, KillByName, RowAction};

pub mod monitoring;
pub mod operations;

use monitoring::{Limit, RankedList};
use operations::SignalKiller;

/// The knobs that separate the full kill-enabled monitor from the compact
/// top-five viewer.
pub struct Policy {
    pub limit: Limit,
    pub on_enter: Box<dyn RowAction>,
}

impl Policy {
    pub fn from_config(config: &Config) -> Self {
        let on_enter: Box<dyn RowAction> = match config.action.on_enter {
            EnterAction::Kill => Box::new(KillByName::new(SignalKiller::new(
                config.action.signal,
                config.action.match_mode,
            ))),
            EnterAction::Announce => Box::new(Announce),
        };
        Policy {
            limit: config.ranking.limit(),
            on_enter,
        }
    }
}

//Manager struct declaration
#[derive(Debug)]
pub struct Manager {
    pub processes: RankedList,
}

impl Manager {
    /// Takes the one and only snapshot of the session, leaving out this process.
    pub fn new(provider: &dyn MetricsProvider, limit: Limit) -> Result<Self, MonitorError> {
        Self::with_pid(provider, std::process::id(), limit)
    }

    pub fn with_pid(
        provider: &dyn MetricsProvider,
        self_pid: u32,
        limit: Limit,
    ) -> Result<Self, MonitorError> {
        let candidates = monitoring::sample(provider, self_pid)?;
        let processes = monitoring::rank(candidates, limit);
        tracing::info!("ranked {} processes for display ({:?})", processes.len(), limit);

        Ok(Manager { processes })
    }

    pub fn processes(&self) -> &RankedList {
        &self.processes
    }
}
