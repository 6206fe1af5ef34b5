use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "stories")]
#[command(about = "Headless story feed: pages users in, generates stories, plays them back")]
#[command(version)]
pub struct Cli {
    /// Config directory (overrides STORIES_CONFIG_DIR and ./.stories/)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Paged user dataset (overrides dataset.path)
    #[arg(long, conflicts_with = "bundled")]
    pub dataset: Option<PathBuf>,

    /// Use the dataset compiled into the binary
    #[arg(long)]
    pub bundled: bool,

    /// Number of dataset pages to pull before printing the feed
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Play every unseen story through the viewer after loading
    #[arg(long)]
    pub view: bool,
}
