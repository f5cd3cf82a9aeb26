use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Stage a tagged git revision with config and data overlays, then publish it atomically
#[derive(Parser, Debug)]
#[command(name = "tagdeploy")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
#[command(after_help = "On success the published path is the only output on stdout.")]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to $XDG_CONFIG_HOME/tagdeploy/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    #[command(flatten)]
    pub deploy: DeployArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct DeployArgs {
    /// Destination base path (defaults to the current directory)
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Git repository to deploy from
    #[arg(short, long, value_name = "PATH")]
    pub source_repo: Option<String>,

    /// Tag to deploy
    #[arg(short, long, required = true)]
    pub tag: Option<String>,

    /// Config file placed at config/config.txt
    #[arg(short, long, value_name = "PATH", required = true)]
    pub config: Option<PathBuf>,

    /// Data directory merged into data/
    #[arg(short, long, value_name = "PATH", required = true)]
    pub data: Option<PathBuf>,

    /// Deployment name prefix
    #[arg(short, long)]
    pub name: Option<String>,

    /// User owning data/ and secret/ (name or uid)
    #[arg(short = 'u', long, value_name = "USER")]
    pub www_user: Option<String>,

    /// Group owning the tree (name or gid)
    #[arg(short = 'g', long, value_name = "GROUP")]
    pub www_group: Option<String>,

    /// Parent directory for the temporary tree
    #[arg(long, value_name = "PATH")]
    pub staging_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the DEPLOYMENT manifest of a published tree
    Inspect {
        /// Published tree
        #[arg(value_name = "PUBLISHED_DIR")]
        dir: PathBuf,
    },
}
