use procfs::{Current, Meminfo, Uptime};

/// Host-wide values needed to turn raw /proc counters into percentages.
#[derive(Debug, Clone, Copy)]
pub struct HostClock {
    pub ticks_per_second: u64,
    pub uptime_seconds: f64,
    pub mem_total_bytes: u64,
    pub page_size: u64,
}

impl HostClock {
    /// Reads the clock and memory totals once per sampling pass.
    ///
    /// Uptime is required (no CPU figure can be computed without it). A missing
    /// MemTotal only zeroes the memory column.
    pub fn read() -> Result<Self, procfs::ProcError> {
        let uptime = Uptime::current()?;
        let mem_total_bytes = match Meminfo::current() {
            Ok(meminfo) => meminfo.mem_total,
            Err(e) => {
                tracing::debug!("MemTotal unavailable, memory usage will read as zero: {}", e);
                0
            }
        };

        Ok(HostClock {
            ticks_per_second: procfs::ticks_per_second(),
            uptime_seconds: uptime.uptime,
            mem_total_bytes,
            page_size: procfs::page_size(),
        })
    }

    /// CPU usage averaged over the process lifetime:
    /// `100 * (utime + stime) / hz / (uptime - starttime / hz)`.
    pub fn cpu_percent(&self, busy_ticks: u64, start_ticks: u64) -> f64 {
        if self.ticks_per_second == 0 {
            return 0.0;
        }
        let hz = self.ticks_per_second as f64;
        let busy_seconds = busy_ticks as f64 / hz;
        let alive_seconds = self.uptime_seconds - start_ticks as f64 / hz;

        if alive_seconds > 0.0 {
            100.0 * busy_seconds / alive_seconds
        } else {
            0.0
        }
    }

    /// Resident set size as a share of total memory.
    pub fn mem_percent(&self, rss_pages: u64) -> f32 {
        if self.mem_total_bytes == 0 {
            return 0.0;
        }
        let rss_bytes = rss_pages.saturating_mul(self.page_size);
        (100.0 * rss_bytes as f64 / self.mem_total_bytes as f64) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> HostClock {
        HostClock {
            ticks_per_second: 100,
            uptime_seconds: 1_000.0,
            mem_total_bytes: 8 * 1024 * 1024 * 1024,
            page_size: 4096,
        }
    }

    #[test]
    fn cpu_percent_averages_over_process_lifetime() {
        // started at t=900s, burned 50s of CPU => 50%
        let pct = clock().cpu_percent(5_000, 90_000);
        assert!((pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn cpu_percent_can_exceed_one_core() {
        let pct = clock().cpu_percent(20_000, 90_000);
        assert!((pct - 200.0).abs() < 1e-9);
    }

    #[test]
    fn cpu_percent_is_zero_for_a_process_started_now() {
        assert_eq!(clock().cpu_percent(10, 100_000), 0.0);
    }

    #[test]
    fn mem_percent_uses_page_size() {
        // 1 GiB resident out of 8 GiB
        let pages = 1024 * 1024 * 1024 / 4096;
        let pct = clock().mem_percent(pages);
        assert!((pct - 12.5).abs() < 1e-4);
    }

    #[test]
    fn mem_percent_without_total_is_zero() {
        let mut c = clock();
        c.mem_total_bytes = 0;
        assert_eq!(c.mem_percent(1_000), 0.0);
    }
}
