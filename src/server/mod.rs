pub mod handlers;
pub mod lifecycle;

pub use lifecycle::{ServerEvent, ServerLifecycle, ServerState};

use crate::{Result, config::ServerConfig};
use axum::Router;
use std::{
    future::{Future, IntoFuture},
    net::SocketAddr,
    sync::Arc,
    time::Duration,
};
use tokio::{
    net::TcpListener,
    sync::{Mutex, oneshot},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Every method and path falls through to the hello handler.
pub fn router(log_requests: bool) -> Router {
    let app = Router::new().fallback(handlers::hello);

    if log_requests {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

/// A bound listening socket plus the lifecycle it drives.
pub struct HelloServer {
    listener: TcpListener,
    lifecycle: ServerLifecycle,
    log_requests: bool,
    shutdown_grace: Duration,
}

impl HelloServer {
    /// Binds `host:port`. Failure here is fatal for the caller; the lifecycle never leaves `Idle`.
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let addr = SocketAddr::new(config.host.parse()?, config.port);
        let listener = TcpListener::bind(addr).await?;

        let mut lifecycle = ServerLifecycle::new();
        lifecycle.transition(ServerEvent::Bound)?;

        info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            lifecycle,
            log_requests: config.log_requests,
            shutdown_grace: Duration::from_millis(config.shutdown_grace_ms),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn state(&self) -> ServerState {
        self.lifecycle.current_state()
    }

    /// Serves until `shutdown` resolves, then closes the listener. Connections still
    /// open after the grace period are abandoned.
    pub async fn serve<F>(self, shutdown: F) -> Result<ServerState>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Self {
            listener,
            lifecycle,
            log_requests,
            shutdown_grace,
        } = self;

        let lifecycle = Arc::new(Mutex::new(lifecycle));
        let signal_lifecycle = Arc::clone(&lifecycle);
        let (drain_tx, drain_rx) = oneshot::channel::<()>();

        let shutdown = async move {
            shutdown.await;
            info!("Shutdown requested, no longer accepting connections");
            if let Err(e) = signal_lifecycle
                .lock()
                .await
                .transition(ServerEvent::InterruptReceived)
            {
                warn!("Failed to record shutdown: {}", e);
            }
            let _ = drain_tx.send(());
        };

        let serving = axum::serve(listener, router(log_requests))
            .with_graceful_shutdown(shutdown)
            .into_future();

        let drain_deadline = async move {
            match drain_rx.await {
                Ok(()) => tokio::time::sleep(shutdown_grace).await,
                Err(_) => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = serving => result?,
            _ = drain_deadline => {
                warn!(
                    "Connections still open after {:?}, dropping them",
                    shutdown_grace
                );
            }
        }

        let mut lifecycle = lifecycle.lock().await;
        let state = lifecycle.transition(ServerEvent::ListenerClosed)?;
        info!("Listener closed");

        Ok(state)
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
