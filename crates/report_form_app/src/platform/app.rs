use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use report_form_core::Msg;
use report_form_engine::EngineHandle;
use report_logging::{report_info, report_warn};

use super::command::{command_msg, parse_command, resolve_choice, Command, HELP};
use super::config::{self, AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
use super::effects::EffectRunner;
use super::session::Session;
use super::ui::ids::{SECTOR_SELECT, STOCK_SELECT};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let (config, config_problem) = load_or_create(&config_path);

    let level = config.level_filter()?;
    report_logging::initialize(config.log_target.into(), level, &config.log_file);
    if let Some(problem) = config_problem {
        report_warn!("Using default configuration: {}", problem);
    }
    report_info!("Report form client talking to {}", config.base_url);

    let engine = EngineHandle::new(config.engine_config()?).context("starting engine runtime")?;
    let mut session = Session::new(EffectRunner::new(engine));
    session.dispatch(Msg::PageReady);

    let lines = spawn_stdin_reader();
    println!("{HELP}");
    let mut last_snapshot = String::new();
    print_if_changed(&session, &mut last_snapshot);

    loop {
        session.pump();
        print_if_changed(&session, &mut last_snapshot);

        let line = match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => line,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        let command = match command {
            Command::Sector(input) => {
                Command::Sector(resolve_choice(&input, session.document().get(SECTOR_SELECT)))
            }
            Command::Stock(input) => {
                Command::Stock(resolve_choice(&input, session.document().get(STOCK_SELECT)))
            }
            other => other,
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => {
                last_snapshot.clear();
                print_if_changed(&session, &mut last_snapshot);
            }
            other => {
                if let Some(msg) = command_msg(&other) {
                    session.dispatch(msg);
                }
            }
        }
        print_if_changed(&session, &mut last_snapshot);
    }

    report_info!("Report form client exiting");
    Ok(())
}

fn load_or_create(path: &Path) -> (AppConfig, Option<ConfigError>) {
    if !path.exists() {
        let defaults = AppConfig::default();
        let problem = config::save_config(path, &defaults).err();
        return (defaults, problem);
    }
    match config::load_config(path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn print_if_changed(session: &Session, last: &mut String) {
    let snapshot = session.document().snapshot();
    if snapshot != *last {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "\n{snapshot}");
        let _ = out.flush();
        *last = snapshot;
    }
}
