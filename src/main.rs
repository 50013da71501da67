//! passive-skills CLI entry point.

use clap::Parser;

use passive_skills::cli::{handle_error, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json_mode);
    }
}
