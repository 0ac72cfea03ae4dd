use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "libcat",
    about = "Library catalog: JSON-file backed book inventory",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an empty catalog file
    Init(InitArgs),
    /// Start the HTTP server
    Serve(ServeArgs),
    /// List every book in the catalog
    List(DataArgs),
    /// Show a single book
    Show(IdArgs),
    /// Overwrite fields of a single book
    Update(UpdateArgs),
    /// Delete a single book
    Remove(IdArgs),
}

#[derive(Args)]
pub struct InitArgs {
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long)]
    pub data: Option<PathBuf>,
    #[arg(long)]
    pub cors: bool,
}

#[derive(Args)]
pub struct DataArgs {
    #[arg(long, default_value = "data.json")]
    pub data: PathBuf,
}

#[derive(Args)]
pub struct IdArgs {
    pub id: String,
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i64>,
    #[arg(long)]
    pub copies: Option<i64>,
    #[command(flatten)]
    pub data: DataArgs,
}
