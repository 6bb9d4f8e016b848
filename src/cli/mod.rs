use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gazette")]
#[command(about = "A terminal RSS article reader", long_about = None)]
pub struct Cli {
    /// Directory holding feeds.txt and the state files
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}
