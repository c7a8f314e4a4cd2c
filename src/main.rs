//! Interactive CPU scheduling simulator.
//!
//! Prompts for processes on stdin, runs every configured policy, and
//! prints the per-policy listing, Gantt chart, and KPI table.
//!
//! Usage: `cpusched [config.json]`. Set `RUST_LOG=debug` for driver logs.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use log::{error, info};
use u_cpusched::config::SimulationConfig;
use u_cpusched::input::read_process_set_with;
use u_cpusched::report::render_report;
use u_cpusched::scheduler::Simulator;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading config from {path}");
            SimulationConfig::from_reader(BufReader::new(File::open(&path)?))?
        }
        None => SimulationConfig::default(),
    };

    let stdin = io::stdin();
    let processes = read_process_set_with(stdin.lock(), |prompt| {
        print!("{prompt}");
        // Prompts are best-effort; a closed stdout surfaces on the report write
        let _ = io::stdout().flush();
    })?;
    info!("read {} processes", processes.len());

    let report = Simulator::with_config(config).run(&processes)?;

    let mut rendered = String::new();
    render_report(&mut rendered, &report)?;
    io::stdout().write_all(rendered.as_bytes())?;
    Ok(())
}
