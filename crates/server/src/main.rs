use clap::Parser;
use nlp_core::config;
use nlpd_server::addr;
use nlpd_server::api::create_router;
use nlpd_server::api::handlers::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nlpd", about = "Tokenization and stemming over HTTP")]
struct Args {
    /// Address to listen on; a bare `:PORT` binds all interfaces
    #[arg(short, long, env = config::ADDR_ENV_VAR, default_value = config::DEFAULT_ADDR)]
    addr: String,

    /// Graceful shutdown timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    shutdown_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("nlpd_server=info".parse()?)
                .add_directive("nlp_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let state = AppState::new(prometheus_handle);
    let app = create_router(state);

    let addr = addr::normalize(&args.addr);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind listen address");
            std::process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %addr,
        max_body_bytes = config::MAX_REQUEST_BODY_BYTES,
        "nlpd ready"
    );

    let signalled = Arc::new(Notify::new());
    let notify = Arc::clone(&signalled);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                wait_for_signal().await;
                notify.notify_one();
            })
            .await
    });

    tokio::select! {
        res = &mut server => {
            res??;
            return Ok(());
        }
        () = signalled.notified() => {}
    }

    let deadline = Duration::from_secs(args.shutdown_timeout);
    match tokio::time::timeout(deadline, server).await {
        Ok(res) => res??,
        Err(_) => tracing::warn!(
            "Shutdown timeout ({}s) exceeded, dropping in-flight requests",
            args.shutdown_timeout
        ),
    }

    tracing::info!("nlpd stopped");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
