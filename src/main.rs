use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use listsync::app::App;
use listsync::cli::{Cli, Command};
use listsync::collection::ResourceKind;
use listsync::config::Config;
use listsync::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            Config::load_from(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::load()
            .with_context(|| format!("loading {}", Config::config_path().display()))?,
    };

    let app = App::build(&config)?;
    app.store().rehydrate().await;

    let output = match cli.command {
        Command::Fetch {
            collection,
            kind,
            page,
            force,
        } => {
            let fetcher = app.fetcher(&collection)?;
            let kind = ResourceKind::from_option(kind.as_deref());
            let outcome = fetcher.fetch(page, force, &kind).await;
            json!({ "outcome": outcome.as_str(), "collection": fetcher.state() })
        }
        Command::Next { collection, kind } => {
            let fetcher = app.fetcher(&collection)?;
            let handle = fetcher.handle(ResourceKind::from_option(kind.as_deref()));
            let outcome = handle.fetch_next().await;
            json!({
                "outcome": outcome.map(|o| o.as_str()).unwrap_or("exhausted"),
                "collection": handle.state(),
            })
        }
        Command::Show { collection } => {
            let fetcher = app.fetcher(&collection)?;
            json!({ "collection": fetcher.state() })
        }
        Command::Purge => {
            app.store().purge().await;
            json!({ "purged": app.collection_names() })
        }
    };

    app.store().flush().await;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
