//! ntr CLI - workspace lifecycle manager
//!
//! Usage: ntr [--root DIR] [--json] [-v] <COMMAND>
//!
//! Commands:
//!   setup    Provision the workspace
//!   cleanup  Remove generated state; `--package` also archives the result

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};
use commands::cleanup::cmd_cleanup;
use commands::setup::cmd_setup;
use commands::GlobalArgs;

fn main() {
    let cli = Cli::parse();
    let args = GlobalArgs {
        root: cli.root.clone(),
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
    };

    let result = match &cli.command {
        Commands::Setup => cmd_setup(&args),
        Commands::Cleanup { package, yes } => cmd_cleanup(&args, *package, *yes),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            if cli.json {
                let event = serde_json::json!({
                    "event": "error",
                    "command": cli.command.name(),
                    "message": format!("{:#}", e),
                });
                println!("{}", event);
            } else {
                eprintln!("Error: {:#}", e);
            }
            std::process::exit(1);
        }
    }
}
