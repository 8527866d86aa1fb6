use std::process::ExitCode;

use clap::Parser;
use heapbench::cmd::HeapBenchCMD;
use heapbench::runtime;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    command: HeapBenchCMD,
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    runtime::setup_global_logger(cli.command.log_level);

    let result = cli.command.try_execute();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    return ExitCode::SUCCESS;
}
