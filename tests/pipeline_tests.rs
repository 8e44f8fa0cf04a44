use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proctop::config::Config;
use proctop::error::{MonitorError, TerminateError};
use proctop::manager::monitoring::{Limit, TOP_LIMIT};
use proctop::manager::operations::{KillOutcome, ProcessKiller};
use proctop::manager::{Manager, Policy};
use proctop::process::{MetricsProvider, ProcessSample};
use proctop::tui::actions::KillByName;
use proctop::tui::app::{App, Flow};
use proctop::tui::row::to_rows;
use proctop::tui::style::TableStyle;
use proctop::tui::table::{ProcessTable, process_columns};

struct FakeProvider(Vec<ProcessSample>);

impl MetricsProvider for FakeProvider {
    fn enumerate(&self) -> Result<Vec<ProcessSample>, MonitorError> {
        Ok(self.0.clone())
    }
}

struct DeadProvider;

impl MetricsProvider for DeadProvider {
    fn enumerate(&self) -> Result<Vec<ProcessSample>, MonitorError> {
        Err(MonitorError::ProviderUnavailable("permission denied".to_string()))
    }
}

#[derive(Clone, Default)]
struct RecordingKiller(Rc<RefCell<Vec<String>>>);

impl ProcessKiller for RecordingKiller {
    fn terminate(&self, name: &str) -> Result<KillOutcome, TerminateError> {
        self.0.borrow_mut().push(name.to_string());
        Ok(KillOutcome::signalled(1))
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_snapshot_to_rows() {
    let provider = FakeProvider(vec![
        ProcessSample::new(1, "a", 5.0, 1.5),
        ProcessSample::new(2, "b", 50.0, 3.25),
        ProcessSample::new(3, "c", 0.0, 9.0),
    ]);
    let manager = Manager::with_pid(&provider, 99, Limit::Top(TOP_LIMIT)).unwrap();
    let rows = to_rows(manager.processes());

    let cells: Vec<[&str; 4]> = rows.iter().map(|r| r.cells()).collect();
    assert_eq!(
        cells,
        vec![["2", "b", "50.00", "3.25"], ["1", "a", "5.00", "1.50"]]
    );
}

#[test]
fn test_own_pid_is_never_listed() {
    let provider = FakeProvider(vec![
        ProcessSample::new(10, "proctop", 80.0, 1.0),
        ProcessSample::new(11, "cc1", 40.0, 1.0),
    ]);
    let manager = Manager::with_pid(&provider, 10, Limit::All).unwrap();
    assert!(manager.processes().iter().all(|p| p.pid != 10));
    assert_eq!(manager.processes().len(), 1);
}

#[test]
fn test_top_five_of_ten() {
    let samples = (1..=10)
        .map(|i| ProcessSample::new(i, &format!("p{}", i), i as f64 * 1.5, 0.5))
        .collect();
    let manager = Manager::with_pid(&FakeProvider(samples), 0, Limit::Top(5)).unwrap();
    let pids: Vec<u32> = manager.processes().iter().map(|p| p.pid).collect();
    assert_eq!(pids, vec![10, 9, 8, 7, 6]);
}

#[test]
fn test_provider_failure_stops_before_rendering() {
    let err = Manager::with_pid(&DeadProvider, 1, Limit::All).unwrap_err();
    assert!(err.to_string().contains("Error while reading all the processes"));
}

#[test]
fn test_enter_kills_by_name_end_to_end() {
    let provider = FakeProvider(vec![
        ProcessSample::new(7, "idle", 1.0, 0.1),
        ProcessSample::new(123, "worker", 30.0, 2.0),
    ]);
    let manager = Manager::with_pid(&provider, 1, Limit::All).unwrap();

    let killer = RecordingKiller::default();
    let table = ProcessTable::new(process_columns(30), to_rows(manager.processes()), true, 7);
    let mut app = App::new(
        table,
        Box::new(KillByName::new(killer.clone())),
        TableStyle::default(),
    );

    // worker ranks first
    assert_eq!(app.handle_key(key(KeyCode::Enter)), Flow::Continue);
    assert_eq!(*killer.0.borrow(), vec!["worker".to_string()]);
    assert_eq!(
        app.status().map(|s| s.text.as_str()),
        Some("process worker killed!")
    );

    // the killed process stays on screen
    assert_eq!(app.table().rows()[0].name, "worker");
    assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Quit);
}

#[test]
fn test_policy_from_default_config() {
    let policy = Policy::from_config(&Config::default());
    assert_eq!(policy.limit, Limit::All);
}
