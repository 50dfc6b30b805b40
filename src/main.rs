use clap::Parser;
use show_filter::config::Config;
use show_filter::handlers::AppState;
use show_filter::logging::TracingRequestLog;
use show_filter::services::ShowService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Filters TV show listings down to DRM-enabled shows with episodes")]
struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    let config = Arc::new(config);

    let state = Arc::new(AppState {
        config: config.clone(),
        show_service: ShowService::new(),
        request_log: Arc::new(TracingRequestLog),
    });

    let app = show_filter::build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    config.print_server_start_message();
    info!("Server ready");

    axum::serve(listener, app).await?;

    Ok(())
}
