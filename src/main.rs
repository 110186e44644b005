use gitslave::presentation::cli::CliApp;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "GITSLAVE_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix into the report
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = CliApp::new();
    app.run().await
}
