use proctop::manager::monitoring;
use proctop::process::{MetricsProvider, ProcfsProvider};

#[test]
fn test_enumerate_returns_current_process() {
    let processes = ProcfsProvider.enumerate().unwrap();
    let current_pid = std::process::id();
    let found = processes.iter().find(|p| p.pid == current_pid);
    assert!(found.is_some(), "Current process should be in the list");
    assert!(!found.unwrap().name.is_empty());
}

#[test]
fn test_enumerate_reports_sane_percentages() {
    let processes = ProcfsProvider.enumerate().unwrap();
    assert!(processes.iter().all(|p| p.cpu_percent >= 0.0));
    assert!(processes.iter().all(|p| (0.0..=100.0).contains(&p.mem_percent)));
}

#[test]
fn test_sample_never_contains_self() {
    let current_pid = std::process::id();
    let samples = monitoring::sample(&ProcfsProvider, current_pid).unwrap();
    assert!(samples.iter().all(|p| p.pid != current_pid));
    assert!(samples.iter().all(|p| p.cpu_percent > 0.0));
}
