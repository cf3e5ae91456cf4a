use rig_instagram::ProfileFetcher;
use tracing_subscriber::EnvFilter;

/// Usage: `cargo run --example fetch_profile -- [handle]`
///
/// Settings are read from the `INSTAGRAM_*` environment variables (or a `.env` file).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let handle = std::env::args().nth(1).filter(|handle| !handle.trim().is_empty());
    let fetcher = ProfileFetcher::from_env()?;

    match fetcher.fetch_profile(handle.as_deref()).await? {
        Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
        None => println!(
            "No profile for {}",
            handle.as_deref().unwrap_or(fetcher.default_handle())
        ),
    }

    Ok(())
}
