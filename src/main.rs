use clap::Parser;
use parsum::{
    config::{Config, DEFAULT_BUFFER},
    hasher::md5::Md5,
    orchestrator,
    reader::buffering::Buffering,
    E,
};
use std::{path::PathBuf, process::ExitCode};

/// Parallel MD5 calculator with file output.
#[derive(Parser)]
#[command(name = "parsum", version, about = "Parallel MD5 calculator with file output")]
struct Cli {
    /// File or directory to process (defaults to the current directory)
    #[arg(default_value = ".")]
    path: PathBuf,
    /// Number of worker threads (default: CPU cores)
    #[arg(short, long)]
    threads: Option<usize>,
    /// Read buffer size in bytes
    #[arg(short, long, default_value_t = DEFAULT_BUFFER)]
    buffer: usize,
    /// Process directories recursively
    #[arg(short, long)]
    recursive: bool,
    /// Enable verbose output to console
    #[arg(short, long)]
    verbose: bool,
    /// Output results to the specified file; pass an empty value to disable
    /// file output
    #[arg(short, long, default_value = "MD5.txt")]
    output: PathBuf,
    /// Input file to process; overrides PATH
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), E> {
    let input = cli.input.unwrap_or(cli.path);
    let config = Config::new(
        input,
        cli.threads.unwrap_or_else(Config::default_threads),
        cli.buffer,
        cli.recursive,
        cli.verbose,
        Some(cli.output),
    )?;
    let destination = config.output.clone();
    let summary = orchestrator::run::<Md5, Buffering>(config)?;
    println!(
        "\nCompleted! {} of {} files hashed; results saved to {}",
        summary.processed,
        summary.total,
        destination
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "console".to_string())
    );
    Ok(())
}
