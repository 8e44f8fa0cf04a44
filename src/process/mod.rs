use procfs::process::Process as ProcfsProcess;

use crate::error::MonitorError;

pub mod host;

use host::HostClock;

// Main Process Data Structure

/// One process as seen by a single sampling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub mem_percent: f32,
}

impl ProcessSample {
    pub fn new(pid: u32, name: &str, cpu_percent: f64, mem_percent: f32) -> Self {
        ProcessSample {
            pid,
            name: name.to_string(),
            cpu_percent,
            mem_percent,
        }
    }

    /// Reads one process. Fields that cannot be read stay at their zero value
    /// instead of dropping the process.
    fn read(procfs_proc: &ProcfsProcess, host: &HostClock) -> Self {
        let pid = procfs_proc.pid as u32;
        let mut sample = ProcessSample::new(pid, "", 0.0, 0.0);

        match procfs_proc.stat() {
            Ok(stat) => {
                sample.cpu_percent = host.cpu_percent(stat.utime + stat.stime, stat.starttime);
                sample.mem_percent = host.mem_percent(stat.rss as u64);
                sample.name = stat.comm;
            }
            Err(e) => tracing::trace!("could not read stat for PID {}: {}", pid, e),
        }

        sample
    }
}

/// Source of live process records.
pub trait MetricsProvider {
    /// Returns every visible process in provider order. Fails only when the
    /// process list itself is unavailable.
    fn enumerate(&self) -> Result<Vec<ProcessSample>, MonitorError>;
}

/// Reads processes straight from the Linux /proc filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcfsProvider;

impl MetricsProvider for ProcfsProvider {
    fn enumerate(&self) -> Result<Vec<ProcessSample>, MonitorError> {
        let procfs_processes = procfs::process::all_processes()
            .map_err(|e| MonitorError::ProviderUnavailable(e.to_string()))?;
        let host = HostClock::read().map_err(|e| MonitorError::ProviderUnavailable(e.to_string()))?;

        let mut samples = Vec::new();
        for p in procfs_processes {
            let procfs_proc = match p {
                Ok(p) => p,
                Err(_) => continue, //No pid to report, skip listing errors
            };
            samples.push(ProcessSample::read(&procfs_proc, &host));
        }

        tracing::debug!("enumerated {} processes from /proc", samples.len());
        Ok(samples)
    }
}
