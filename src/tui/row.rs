use crate::manager::monitoring::RankedList;
use crate::process::ProcessSample;

/// Display-ready cells of one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub pid: String,
    pub name: String,
    pub cpu: String,
    pub mem: String,
}

impl DisplayRow {
    pub fn cells(&self) -> [&str; 4] {
        [&self.pid, &self.name, &self.cpu, &self.mem]
    }
}

impl From<&ProcessSample> for DisplayRow {
    fn from(p: &ProcessSample) -> Self {
        DisplayRow {
            pid: p.pid.to_string(),
            name: p.name.clone(),
            cpu: format!("{:.2}", p.cpu_percent),
            mem: format!("{:.2}", p.mem_percent),
        }
    }
}

pub fn to_rows(ranked: &RankedList) -> Vec<DisplayRow> {
    ranked.iter().map(DisplayRow::from).collect()
}
