//! `gettasks` entry point.
//!
//! # Responsibility
//! - Parse arguments and bootstrap logging.
//! - Print pending tasks gathered from sibling notes of `--file`.
//! - Optionally append them to the current note.

use clap::Parser;
use gettasks_core::{
    append_rendered, default_log_level, find_target, flush_logging, init_logging,
    FsNoteRepository, TaskFilter, TaskService, DEFAULT_HIERARCHY,
};
use log::{error, info, warn};
use std::path::Path;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "gettasks", version, about = "Collect pending checklist tasks from daily notes")]
struct Cli {
    /// Note being edited; its directory is scanned and the note itself skipped.
    #[arg(long, default_value = "")]
    file: String,

    /// Append the rendered tasks to the current note.
    #[arg(long)]
    write: bool,

    /// Only notes whose path contains this text contribute tasks.
    #[arg(long = "hirearchy", default_value = DEFAULT_HIERARCHY)]
    hierarchy: String,

    /// trace|debug|info|warn|error|off
    #[arg(long, env = "GETTASKS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files instead of stderr.
    #[arg(long, env = "GETTASKS_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.file.is_empty() {
        eprintln!("File path required");
        return ExitCode::FAILURE;
    }

    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
    if let Err(err) = init_logging(level, cli.log_dir.as_deref()) {
        eprintln!("logging disabled: {err}");
    }

    run(&cli);
    flush_logging();
    ExitCode::SUCCESS
}

fn run(cli: &Cli) {
    let repo = FsNoteRepository::for_current_file(&cli.file);
    info!(
        "event=run_start module=cli status=ok dir={} write={}",
        repo.dir().display(),
        cli.write
    );

    let filter = TaskFilter::new(cli.file.as_str(), cli.hierarchy.as_str());
    let report = match TaskService::new(repo).pending_tasks(&filter) {
        Ok(report) => report,
        Err(err) => {
            error!("event=run module=cli status=error error={err}");
            println!();
            return;
        }
    };

    println!("{}", report.rendered);

    if !cli.write {
        return;
    }
    // The lookup only gates the write; the bytes always go to `--file`.
    if find_target(&report.load.notes, &cli.file).is_none() {
        warn!(
            "event=note_append module=cli status=skip reason=target_not_loaded file={}",
            cli.file
        );
        return;
    }
    let target = Path::new(&cli.file);
    match append_rendered(target, &report.rendered) {
        Ok(()) => println!("Writing to {}", target.display()),
        Err(err) => error!("event=note_append module=cli status=error error={err}"),
    }
}
