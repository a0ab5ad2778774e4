use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{Instrument, info, info_span};

use crate::config::{Config, ServeConfig};
use crate::http::connection::Connection;

/// Pause after a failed accept (e.g. out of file descriptors).
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let serve_config = Arc::new(cfg.serve_config()?);
    let addr = cfg.listen_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    info!("Enabling server on {}", addr);
    info!("Serving files from {}", serve_config.webroot.display());

    serve(listener, serve_config).await
}

/// Accepts clients forever, one task per connection. Tasks share only the
/// read-only configuration.
pub async fn serve(listener: TcpListener, cfg: Arc<ServeConfig>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!("Failed to accept connection: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Client {} connected", peer);

        let cfg = Arc::clone(&cfg);
        tokio::spawn(
            async move {
                let mut conn = Connection::new(socket, peer, cfg);
                match conn.run().await {
                    Ok(()) => info!("Connection with {} closed", peer),
                    Err(e) => tracing::warn!("Connection error from {}: {:#}", peer, e),
                }
            }
            .instrument(info_span!("client", %peer)),
        );
    }
}
