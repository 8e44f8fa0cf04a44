use crate::error::MonitorError;
use crate::process::{MetricsProvider, ProcessSample};

/// Row count of the compact top-five variant.
pub const TOP_LIMIT: usize = 5;

/// How many ranked processes the table receives when nothing is configured.
pub const DEFAULT_LIMIT: Limit = Limit::All;

/// Truncation applied after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    All,
    Top(usize),
}

impl Limit {
    fn apply(self, len: usize) -> usize {
        match self {
            Limit::All => len,
            Limit::Top(k) => len.min(k),
        }
    }
}

/// Processes ordered by CPU usage, highest first, already truncated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedList {
    processes: Vec<ProcessSample>,
}

impl RankedList {
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessSample> {
        self.processes.iter()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

// One sampling pass: keeps processes that are burning CPU, minus ourselves.
pub fn sample(
    provider: &dyn MetricsProvider,
    exclude_pid: u32,
) -> Result<Vec<ProcessSample>, MonitorError> {
    let all = provider.enumerate()?;
    let total = all.len();

    let candidates: Vec<ProcessSample> = all
        .into_iter()
        .filter(|p| p.cpu_percent > 0.0 && p.pid != exclude_pid)
        .collect();

    tracing::debug!(
        "sampled {} processes, {} using CPU (excluding PID {})",
        total,
        candidates.len(),
        exclude_pid
    );
    Ok(candidates)
}

/// Stable sort by CPU descending; ties keep provider order.
pub fn rank(mut samples: Vec<ProcessSample>, limit: Limit) -> RankedList {
    samples.sort_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent));
    samples.truncate(limit.apply(samples.len()));
    RankedList { processes: samples }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(Vec<ProcessSample>);

    impl MetricsProvider for FixedProvider {
        fn enumerate(&self) -> Result<Vec<ProcessSample>, MonitorError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenProvider;

    impl MetricsProvider for BrokenProvider {
        fn enumerate(&self) -> Result<Vec<ProcessSample>, MonitorError> {
            Err(MonitorError::ProviderUnavailable("/proc not mounted".to_string()))
        }
    }

    fn cpu(pid: u32, cpu: f64) -> ProcessSample {
        ProcessSample::new(pid, &format!("p{}", pid), cpu, 1.0)
    }

    #[test]
    fn sample_excludes_own_pid_even_when_busiest() {
        let provider = FixedProvider(vec![cpu(1, 3.0), cpu(42, 99.0), cpu(2, 1.0)]);
        let out = sample(&provider, 42).unwrap();
        assert!(out.iter().all(|p| p.pid != 42));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn sample_cpu_boundary() {
        let provider = FixedProvider(vec![
            cpu(1, 0.0),
            cpu(2, 0.01),
            cpu(3, -1.0),
            cpu(4, f64::NAN),
        ]);
        let out = sample(&provider, 99).unwrap();
        let pids: Vec<u32> = out.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![2]);
    }

    #[test]
    fn sample_keeps_zeroed_fields() {
        // a process whose name could not be read is still a candidate
        let provider = FixedProvider(vec![ProcessSample::new(7, "", 2.5, 0.0)]);
        let out = sample(&provider, 99).unwrap();
        assert_eq!(out, vec![ProcessSample::new(7, "", 2.5, 0.0)]);
    }

    #[test]
    fn sample_propagates_provider_failure() {
        let err = sample(&BrokenProvider, 1).unwrap_err();
        assert!(matches!(err, MonitorError::ProviderUnavailable(_)));
    }

    #[test]
    fn rank_is_descending_and_stable() {
        let input = vec![cpu(1, 5.0), cpu(2, 9.0), cpu(3, 5.0), cpu(4, 9.0), cpu(5, 1.0)];
        let ranked = rank(input, Limit::All);
        let pids: Vec<u32> = ranked.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn rank_truncates_to_limit() {
        let input: Vec<ProcessSample> = (1..=10).map(|i| cpu(i, i as f64)).collect();
        let ranked = rank(input, Limit::Top(TOP_LIMIT));
        let pids: Vec<u32> = ranked.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![10, 9, 8, 7, 6]);
    }

    #[test]
    fn rank_limit_larger_than_input() {
        let input = vec![cpu(1, 1.0), cpu(2, 2.0), cpu(3, 3.0)];
        assert_eq!(rank(input, Limit::Top(5)).len(), 3);
    }

    #[test]
    fn rank_of_nothing_is_empty() {
        assert!(rank(Vec::new(), DEFAULT_LIMIT).is_empty());
    }
}
