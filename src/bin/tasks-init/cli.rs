// src/bin/tasks-init/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection URI, e.g. mongodb://localhost:27017
    #[arg(long)]
    pub mongo_uri: String,
}
