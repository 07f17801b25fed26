use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "faunagen")]
#[command(about = "Generate a static HTML page for a set of animal records", long_about = None)]
pub struct Cli {
    /// Animal name to query the lookup API for (prompted for when absent)
    pub name: Option<String>,

    /// Load records from a local JSON file instead of the lookup API
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Characteristic to filter by
    #[arg(short, long)]
    pub characteristic: Option<String>,

    /// Filter value; skips the interactive prompt. Use "Not specified" to
    /// select records lacking the characteristic
    #[arg(long)]
    pub filter: Option<String>,

    /// Skip filtering entirely (no prompt, all records kept)
    #[arg(long, conflicts_with = "filter")]
    pub no_filter: bool,

    /// Template file containing the placeholder token
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Where to write the finished page
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
