use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use jobboard_core::{PagePolicy, SampleJobs};
use jobboard_engine::{EngineHandle, FetchSettings, Orchestrator};
use jobboard_logging::{jobboard_info, jobboard_warn};

use super::logging::{self, LogDestination};
use super::ui::commands::{self, Command, HELP};
use super::ui::render;

const PAGE_POLICY_VAR: &str = "JOBBOARD_PAGE_POLICY";

/// How often pending fetch completions are applied while waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let settings = FetchSettings::from_env().context("reading fetch settings")?;
    let policy = match std::env::var(PAGE_POLICY_VAR) {
        Ok(raw) => raw
            .parse::<PagePolicy>()
            .with_context(|| format!("reading {PAGE_POLICY_VAR}"))?,
        Err(_) => PagePolicy::default(),
    };
    jobboard_info!(
        "starting jobboard against {} (page policy {})",
        settings.base_url,
        policy
    );

    let engine = EngineHandle::new(settings).context("starting fetch engine")?;
    let mut orchestrator = Orchestrator::new(engine, Box::new(SampleJobs), policy);

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    jobboard_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
    });

    println!("{HELP}\n");
    orchestrator.start();

    loop {
        orchestrator.process_events();
        if orchestrator.consume_dirty() {
            print_frame(&orchestrator)?;
        }

        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                if !handle_line(&mut orchestrator, &line) {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    jobboard_info!("jobboard exiting");
    Ok(())
}

/// Applies one input line. Returns false when the user asked to quit.
fn handle_line(orchestrator: &mut Orchestrator, line: &str) -> bool {
    let command = match commands::parse(line) {
        Ok(command) => command,
        Err(err) => {
            println!("{err}");
            return true;
        }
    };

    match command {
        Command::Quit => return false,
        Command::Help => println!("{HELP}"),
        Command::Search(location) => orchestrator.search(&location),
        Command::Select(row) => {
            let view = orchestrator.view();
            match row.checked_sub(1).and_then(|index| view.jobs.get(index)) {
                Some(job) => orchestrator.set_selected_job(job),
                None => println!("no row {row}; the list has {} jobs", view.jobs.len()),
            }
        }
        navigation @ (Command::Page(_)
        | Command::Next
        | Command::Prev
        | Command::First
        | Command::Last) => {
            match commands::navigation_target(&navigation, &orchestrator.view()) {
                Ok(page) => orchestrator.change_page(page),
                Err(reason) => println!("{reason}"),
            }
        }
    }
    true
}

fn print_frame(orchestrator: &Orchestrator) -> anyhow::Result<()> {
    let frame = render::render(&orchestrator.view(), Utc::now());
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "\n{frame}")?;
    stdout.flush()?;
    Ok(())
}
