mod config;
mod scenario;

use std::sync::Arc;

use stockwatch_events::TracingSink;

use crate::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    stockwatch_observability::init(config.log_format);

    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    tracing::info!(policy = ?config.duplicate_policy, "running back-in-stock walk-through");

    let summary = scenario::run(config.duplicate_policy, Arc::new(TracingSink))?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
