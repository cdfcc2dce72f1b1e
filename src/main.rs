use airport_lookup::cli::{Cli, Commands};
use airport_lookup::format::{format_aggregate_results, format_lookup_results};
use airport_lookup::lookup::sort_for_display;
use airport_lookup::{LookupConfig, LookupEngine, LookupServer, MemoryStore};
use anyhow::Context;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    airport_lookup::tracing::init(cli.log_json);

    let config = match cli.config_path() {
        Some(path) => LookupConfig::load(&path).await?,
        None => LookupConfig::default(),
    };

    let dataset = cli.dataset_path();
    let store = MemoryStore::load(&dataset)
        .await
        .with_context(|| format!("Failed to load dataset {}", dataset.display()))?;
    tracing::info!(
        "Loaded {} locations from {}",
        store.len(),
        dataset.display()
    );

    let engine = LookupEngine::with_config(Arc::new(store), config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(engine).await?,
        Commands::Lookup {
            query,
            display_order,
            json,
        } => {
            let mut hits = engine.lookup(&query).await?;
            if display_order {
                sort_for_display(&mut hits);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!(
                    "{}",
                    format_lookup_results(&query, &hits, engine.config().min_query_length)
                );
            }
        }
        Commands::Aggregate { query, json } => {
            let rows = engine.lookup_aggregate(&query).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!(
                    "{}",
                    format_aggregate_results(&query, &rows, engine.config().min_query_length)
                );
            }
        }
    }

    Ok(())
}

async fn serve(engine: LookupEngine) -> anyhow::Result<()> {
    tracing::info!("Starting airport-lookup MCP server");

    let service = LookupServer::new(engine)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("Error serving MCP server: {:?}", e);
        })?;

    service.waiting().await?;
    Ok(())
}
