use std::time::Duration;

use cityfacts::client::config::ClientConfig;
use cityfacts::client::services::facts_service::FactsService;

/// Smoke test against a running backend: direct lookup first, then the
/// full fetch-or-generate flow. Run the backend locally before this.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cfg = ClientConfig::from_env();
    let base_url = cfg.base_url();
    println!("Using backend {}", base_url);

    let svc = FactsService::new(Duration::from_secs(cfg.request_timeout_secs));

    let stored = svc.get_facts(&base_url, "Paris").await?;
    println!(
        "LOOKUP -> name='{}', {} chars of facts",
        stored.name,
        stored.facts.len()
    );

    let city = svc.fetch_or_generate(&base_url, "Paris").await?;
    println!("FLOW -> About {}", city.name);
    for line in city.facts.split('\n') {
        println!("  {}", line);
    }

    Ok(())
}
