use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use serde::{Deserialize, Serialize};

use crate::error::TerminateError;

/// Signal sent by a terminate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KillSignal {
    #[default]
    Term,
    Kill,
    Int,
    Hup,
}

impl From<KillSignal> for Signal {
    fn from(signal: KillSignal) -> Self {
        match signal {
            KillSignal::Term => Signal::SIGTERM,
            KillSignal::Kill => Signal::SIGKILL,
            KillSignal::Int => Signal::SIGINT,
            KillSignal::Hup => Signal::SIGHUP,
        }
    }
}

/// How a process name is compared against running processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Kernel process name equals the requested name.
    #[default]
    Exact,
    /// Requested name occurs anywhere in the full command line (`pkill -f`).
    CommandLine,
}

impl MatchMode {
    pub fn matches(self, name: &str, comm: &str, cmdline: &[String]) -> bool {
        if name.is_empty() {
            return false;
        }
        match self {
            MatchMode::Exact => comm == name,
            MatchMode::CommandLine => {
                if cmdline.is_empty() {
                    comm.contains(name)
                } else {
                    cmdline.join(" ").contains(name)
                }
            }
        }
    }
}

/// Terminates processes by name.
///
/// Every process whose name matches is signalled, not only the row the
/// operator picked. Two unrelated programs that share a name both go down.
pub trait ProcessKiller {
    /// Fails only when no matching process received the signal.
    fn terminate(&self, name: &str) -> Result<KillOutcome, TerminateError>;
}

/// Result of a terminate request that reached at least one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KillOutcome {
    pub signalled: usize,
    /// Same-named processes that refused the signal and are still running.
    pub denied: usize,
}

impl KillOutcome {
    pub fn signalled(signalled: usize) -> Self {
        KillOutcome {
            signalled,
            denied: 0,
        }
    }
}

/// Per-request counters used to decide the outcome of a terminate call.
#[derive(Debug, Default)]
struct KillTally {
    signalled: usize,
    denied: usize,
    failure: Option<Errno>,
}

impl KillTally {
    fn record(&mut self, result: nix::Result<()>) {
        match result {
            Ok(()) => self.signalled += 1,
            Err(Errno::ESRCH) => {} //Exited between the scan and the signal
            Err(Errno::EPERM) => self.denied += 1,
            Err(e) => {
                self.failure.get_or_insert(e);
            }
        }
    }

    fn finish(self, name: &str) -> Result<KillOutcome, TerminateError> {
        if self.signalled > 0 {
            return Ok(KillOutcome {
                signalled: self.signalled,
                denied: self.denied,
            });
        }
        if let Some(source) = self.failure {
            return Err(TerminateError::Signal {
                name: name.to_string(),
                source,
            });
        }
        if self.denied > 0 {
            return Err(TerminateError::PermissionDenied(name.to_string()));
        }
        Err(TerminateError::NoMatch(name.to_string()))
    }
}

/// Sends a real signal to every matching process found in /proc.
#[derive(Debug, Clone, Copy)]
pub struct SignalKiller {
    pub signal: KillSignal,
    pub match_mode: MatchMode,
    /// Never signalled, even when its name matches.
    pub self_pid: u32,
}

impl SignalKiller {
    pub fn new(signal: KillSignal, match_mode: MatchMode) -> Self {
        SignalKiller {
            signal,
            match_mode,
            self_pid: std::process::id(),
        }
    }
}

impl ProcessKiller for SignalKiller {
    fn terminate(&self, name: &str) -> Result<KillOutcome, TerminateError> {
        let procfs_processes =
            procfs::process::all_processes().map_err(|e| TerminateError::Scan {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        let mut tally = KillTally::default();
        for procfs_proc in procfs_processes.flatten() {
            let pid = procfs_proc.pid as u32;
            if pid == self.self_pid {
                continue;
            }

            let comm = match procfs_proc.stat() {
                Ok(stat) => stat.comm,
                Err(_) => continue,
            };
            let cmdline = match self.match_mode {
                MatchMode::CommandLine => procfs_proc.cmdline().unwrap_or_default(),
                MatchMode::Exact => Vec::new(),
            };
            if !self.match_mode.matches(name, &comm, &cmdline) {
                continue;
            }

            let nix_pid = Pid::from_raw(procfs_proc.pid);
            tracing::debug!("sending {:?} to PID {} ({})", self.signal, pid, comm);
            tally.record(signal::kill(nix_pid, Signal::from(self.signal)));
        }

        tally.finish(name)
    }
}
