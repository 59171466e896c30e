#![forbid(unsafe_code)]

//! grouplog demo: an untitled group and a titled one taking turns.
//!
//! The untitled group's first two messages share one block; the titled
//! group then opens its own block, and every switch after that opens a new
//! one.

mod cli;

use std::process::ExitCode;

use grouplog::{ColorProfile, GroupOptions, LogGroup};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GROUPLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    let opts = match cli::parse() {
        Ok(cli::Command::Run(opts)) => opts,
        Ok(cli::Command::Help) => {
            println!("{}", cli::HELP_TEXT);
            return ExitCode::SUCCESS;
        }
        Ok(cli::Command::Version) => {
            println!("grouplog-demo {}", cli::VERSION);
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("grouplog-demo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &cli::Opts) -> Result<(), grouplog::ConfigError> {
    let mut main_options = GroupOptions::new();
    if opts.plain {
        main_options = main_options.color_profile(ColorProfile::Mono);
    }

    let mut main_process = LogGroup::new(main_options)?;
    let mut process1 = LogGroup::new(opts.group_options())?;
    tracing::debug!(
        title = %process1.title(),
        profile = ?process1.color_profile(),
        "groups ready"
    );

    // Same group twice: one block.
    main_process.log(["Log 1"]);
    main_process.log(["Log 2"]);

    // Switching groups opens a new block each time.
    process1.log(["Process 1 started"]);
    main_process.log(["Main process again"]);
    process1.log(["Aaaand, it's me again."]);

    Ok(())
}
