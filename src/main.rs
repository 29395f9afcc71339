use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "adhoc")]
#[command(version, about = "Create ad-hoc commands to be dispatched within their own directories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register (or overwrite) a named command bound to one or more directories
    Register {
        /// Name the command will be invoked by
        name: String,
        /// Shell command template; `.` reuses the template already stored under this name
        command: Option<String>,
        /// Comma-separated list of directories to run the command in
        paths: Option<String>,
    },
    /// Show, export, or import the registry store
    Config {
        /// Write the registry to the current directory
        #[arg(short, long)]
        export: bool,
        /// Merge entries from another store file into the registry
        #[arg(short, long, value_name = "PATH")]
        import: Option<PathBuf>,
    },
    /// Open the documentation in a browser
    Docs {
        /// Show the API docs
        #[arg(short, long)]
        api: bool,
        /// Use the locally installed docs instead of the live ones
        #[arg(short, long)]
        offline: bool,
    },
    /// Invoke a registered command: `adhoc <name> [<command>] [<paths>]`
    #[command(external_subcommand)]
    Invoke(Vec<String>),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Register {
            name,
            command,
            paths,
        } => {
            cmd::cmd_register(name, command.as_deref(), paths.as_deref())?;
        }
        Commands::Config { export, import } => {
            cmd::cmd_config(*export, import.as_deref())?;
        }
        Commands::Docs { api, offline } => {
            cmd::cmd_docs(*api, *offline)?;
        }
        Commands::Invoke(args) => {
            if args.len() > 3 {
                anyhow::bail!(
                    "Unexpected argument '{}'; usage: adhoc <name> [<command>] [<paths>]",
                    args[3]
                );
            }
            let name = &args[0];
            let command = args.get(1).map(String::as_str);
            let paths = args.get(2).map(String::as_str);
            cmd::cmd_invoke(name, command, paths)?;
        }
    }

    Ok(())
}
