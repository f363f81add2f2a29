mod config;
mod data;
mod web;

use std::sync::Arc;

use anyhow::Context;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Arc::new(Config::from_env());

    // Startup sanity check; every request re-reads the file itself.
    let records = data::loader::load_file(&config.data_path)
        .with_context(|| format!("Failed to load dataset {}", config.data_path.display()))?;
    log::info!(
        "Loaded {} pendant(s) from {}",
        records.len(),
        config.data_path.display()
    );

    tokio::select! {
        result = web::routes::serve(Arc::clone(&config)) => result?,
        _ = tokio::signal::ctrl_c() => {
            log::info!("Received SIGINT, shutting down");
        }
    }

    Ok(())
}
