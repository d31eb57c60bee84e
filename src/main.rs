use clap::Parser;
use tradecsv::cli::{Cli, run};
use tradecsv::logging::init_logging;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_config());
    run(cli)
}
