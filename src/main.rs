use anyhow::Result;
use clap::Parser;

use mmchlaunch::app::{desktop_capabilities, init_logging, run};
use mmchlaunch::cli::{Cli, Commands, handle_command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    mmchlaunch::config::init_config();

    match cli.command {
        None | Some(Commands::Run) => run(),
        Some(cmd) => {
            let mut stdout = std::io::stdout().lock();
            handle_command(cmd, desktop_capabilities(), &mut stdout)
        }
    }
}
