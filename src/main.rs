use std::process::ExitCode;

use proctop::config::Config;
use proctop::logging;
use proctop::manager::{Manager, Policy};
use proctop::process::ProcfsProvider;
use proctop::tui::{self, app::App, row::to_rows, style::TableStyle, table};

fn main() -> ExitCode {
    let config = match Config::load_or_default(&Config::config_path()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init_tracing(&config);

    let policy = Policy::from_config(&config);

    // Single snapshot; the table is never refreshed afterwards
    let manager = match Manager::new(&ProcfsProvider, policy.limit) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let table = table::ProcessTable::new(
        table::process_columns(config.table.name_width()),
        to_rows(manager.processes()),
        true,
        config.table.height,
    );
    let mut app = App::new(table, policy.on_enter, TableStyle::from(&config.style));

    if let Err(e) = tui::run(&mut app) {
        eprintln!("Error running program: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
