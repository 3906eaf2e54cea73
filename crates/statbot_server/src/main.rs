use statbot_logging::{level_from_name, LogDestination};
use statbot_server::{run, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    statbot_logging::initialize(
        LogDestination::Terminal,
        level_from_name(std::env::var("STATBOT_LOG").ok().as_deref()),
    );

    let config = ServerConfig::from_env()?;
    run(config).await
}
