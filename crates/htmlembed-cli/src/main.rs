//! htmlembed CLI — embeds HTML template files into a generated Apps Script file.
//!
//! Provides four commands: `init`, `generate`, `check`, and `list`.
//!
//! All of them read `htmlembed.config.json` from the base directory and delegate to
//! [`htmlembed_core::pipeline`].

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use htmlembed_core::config::{KeyMode, MissPolicy, CONFIG_FILE};

#[derive(Parser)]
#[command(
    name = "htmlembed",
    about = "Embed HTML template files into a generated Apps Script source file",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base directory holding the config and the template sources
    #[arg(long, global = true, default_value = ".", env = "HTMLEMBED_DIR")]
    dir: PathBuf,

    /// Config file, relative to --dir unless absolute
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config listing the standard templates
    Init {
        /// How template keys are obtained
        #[arg(long, value_enum, default_value = "derived")]
        key_mode: KeyModeChoice,

        /// Accessor behaviour for unknown template names (prompts if omitted)
        #[arg(long, value_enum)]
        miss_policy: Option<MissPolicyChoice>,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Generate the templates file
    Generate {
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Verify the generated file is up to date without writing it
    Check,

    /// Show each configured source with its key and status
    List,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum KeyModeChoice {
    Derived,
    Explicit,
}

impl KeyModeChoice {
    pub fn to_mode(&self) -> KeyMode {
        match self {
            Self::Derived => KeyMode::default(),
            Self::Explicit => KeyMode::Explicit,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
pub enum MissPolicyChoice {
    Null,
    Throw,
}

impl MissPolicyChoice {
    pub fn to_policy(&self) -> MissPolicy {
        match self {
            Self::Null => MissPolicy::Null,
            Self::Throw => MissPolicy::Throw,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = htmlembed_core::project::config_path(&cli.dir, &cli.config);
    tracing::debug!("using config {}", config_path.display());

    match cli.command {
        Commands::Init {
            key_mode,
            miss_policy,
            force,
        } => {
            commands::init::run(&config_path, &key_mode, miss_policy, force)?;
        }
        Commands::Generate { json } => {
            commands::generate::run(&cli.dir, &config_path, json)?;
        }
        Commands::Check => {
            commands::check::run(&cli.dir, &config_path)?;
        }
        Commands::List => {
            commands::list::run(&cli.dir, &config_path)?;
        }
    }

    Ok(())
}
