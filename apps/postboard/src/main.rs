//! # Postboard
//!
//! Terminal front end for a remote `/posts` collection: an input line and
//! a table of posts with delete/edit/save actions.

use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;

use postboard_core::PostListEditor;
use postboard_infra::HttpPostResource;

mod cli;
mod console;
mod telemetry;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_format);

    let resource = HttpPostResource::new(cli.resource_config()?)?;
    tracing::info!(base_url = %resource.config().base_url, "Starting postboard");

    let mut editor = PostListEditor::new(Arc::new(resource));
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    console::run(&mut editor, stdin, &mut stdout).await
}
