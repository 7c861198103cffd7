use crate::addon::prompt::AddonFlags;
use crate::utils::{signature::get_signature, version::get_version};
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::{Parser, Subcommand};
use std::env;
use tokio::io;

mod addon;
mod naming;
mod template;
mod types;
mod utils;

#[derive(Parser)]
#[command(name = "wte-addon-starter")]
#[command(author = "Codewing Solutions")]
#[command(about = "A tool to scaffold WP Travel Engine addons with proper structure")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage Addons
    Addon {
        #[command(subcommand)]
        command: AddonCommands,
    },
}

#[derive(Subcommand)]
enum AddonCommands {
    /// Scaffold a new addon
    Create {
        /// Addon name, e.g. "PayStack Payment Gateway". Prompted when omitted.
        #[arg(long)]
        name: Option<String>,

        /// Addon description. Defaults to "<name> for WP Travel Engine".
        #[arg(long)]
        description: Option<String>,

        #[arg(long, default_value_t = false)]
        /// Scaffold a payment gateway addon
        gateway: bool,

        #[arg(long, default_value_t = false)]
        /// Require WP Travel Engine Pro compatibility
        pro: bool,

        /// Settings type: none, global, trip-edit or both
        #[arg(long)]
        settings: Option<String>,

        #[arg(long, default_value_t = false)]
        /// Include webpack configuration
        webpack: bool,
    },
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let version = get_version();
    let signature = get_signature(&version);

    let version_static: &'static str = Box::leak(format!("v{}", version).into_boxed_str());
    let signature_static: &'static str = Box::leak(signature.into_boxed_str());

    let mut cmd = Cli::command();
    cmd = cmd.version(version_static).before_help(signature_static);

    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", signature_static);
        return Ok(());
    }

    let matches = cmd.get_matches();
    let cli: Cli = Cli::from_arg_matches(&matches).expect("failed to parse cli args");

    let cwd: String = env::current_dir()
        .map_err(|e| std::io::Error::other(format!("Failed to get current dir: {}", e)))?
        .into_os_string()
        .into_string()
        .map_err(|_| std::io::Error::other("Current directory contains invalid UTF-8"))?;

    match cli.command {
        Commands::Addon { command } => match command {
            AddonCommands::Create {
                name,
                description,
                gateway,
                pro,
                settings,
                webpack,
            } => {
                let flags = AddonFlags {
                    name,
                    description,
                    gateway,
                    pro,
                    settings,
                    webpack,
                };
                if let Err(e) = addon::prompt::prompt_make_addon(&cwd, flags).await {
                    return Err(io::Error::other(e));
                }

                Ok(())
            }
        },
    }
}
