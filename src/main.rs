use std::fs::File;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

use taskline::io::config_io::{load_config, parse_log_level};
use taskline::model::Config;

/// A terminal task tracker. Tasks live in tasks.json (or `tasks_file` in
/// taskline.toml) in the current directory.
#[derive(Parser)]
#[command(name = "taskline", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd)?;

    init_logging(&config);
    log::info!("taskline starting, tasks file {}", config.tasks_file.display());

    taskline::tui::run(&config)
}

/// Install a file logger when `log_file` is configured
fn init_logging(config: &Config) {
    let Some(path) = &config.log_file else {
        return;
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match File::create(path) {
        Ok(file) => {
            let _ = WriteLogger::init(parse_log_level(&config.log_level), log_config, file);
        }
        Err(e) => eprintln!("warning: could not open log file {}: {}", path.display(), e),
    }
}
