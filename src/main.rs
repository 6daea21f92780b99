#[macro_use]
extern crate log;

mod app;
mod authentication;
mod client;
mod configuration;
mod connection;
mod conversion;
mod error;
#[cfg(test)]
mod log_capture;
mod reporter;
mod runner;
mod time;

use log::LevelFilter;
use signal_hook::{iterator::Signals, SIGINT};
use std::{fs, path::PathBuf, process::exit, thread};
use structopt::StructOpt;

use self::app::App;
use self::configuration::command_line::{Command, LogLevel, Opt};
use self::configuration::options::Settings;
use self::error::{Error, Result};
use self::runner::RunResult;

#[tokio::main]
async fn main() {
    let options = Opt::from_args();
    match Signals::new(&[SIGINT]) {
        Ok(signals) => {
            thread::spawn(move || {
                for sig in signals.forever() {
                    info!("Received signal {:?}, stopping", sig);
                    exit(0);
                }
            });
        }
        Err(e) => eprintln!("Failed to register signal handler: {}", e),
    }

    let settings = Settings::load(options.config.as_deref());
    let level = match (&options.logging, &settings) {
        (Some(level), _) => (*level).into(),
        (None, Ok(settings)) if settings.debug() => LevelFilter::Debug,
        (None, _) => LogLevel::Info.into(),
    };
    if let Err(e) = init_logging(level, &options.log_output_file) {
        eprintln!("Failed to initialise logging: {}", e);
        exit(1);
    }

    let result = match settings {
        Ok(settings) => {
            debug!("Loaded settings {:#?}", settings);
            run(options.command, settings).await
        }
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        error!("{}", e);
        exit(1);
    }
}

async fn run(command: Command, settings: Settings) -> Result<()> {
    match command {
        Command::Upload { results } => {
            let content = fs::read(&results).map_err(|e| Error::io(&results, e))?;
            let results: RunResult = serde_json::from_slice(&content)?;
            let mut app = App::before_run(&settings)?;
            let state = app.after_run(&results).await?;
            info!("Finished: {}", state);
        }
        Command::Preprocess { file } => {
            println!("{}", app::file_preprocessor(&file).display());
        }
    }
    Ok(())
}

fn init_logging(
    level: LevelFilter,
    output: &Option<PathBuf>,
) -> std::result::Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .level_for("hyper", LevelFilter::Info)
        .chain(std::io::stdout());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
