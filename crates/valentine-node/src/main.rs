use valentine_node::{init_tracing, run_server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::from_env()?;
    run_server(config).await
}
