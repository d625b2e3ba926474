use compressa_tools::{
    Result,
    config::ServerConfig,
    server::{HelloServer, ServerState},
};
use std::net::SocketAddr;
use tokio::{sync::oneshot, task::JoinHandle};

/// Loopback config on an ephemeral port
pub fn loopback_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        log_requests: false,
        shutdown_grace_ms: 200,
    }
}

/// A server running in the background until `stop` is called
pub struct RunningServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<ServerState>>,
}

impl RunningServer {
    pub async fn start(config: ServerConfig) -> Self {
        let server = HelloServer::bind(&config)
            .await
            .expect("Failed to bind test server");
        let addr = server.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server.serve(async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(mut self) -> Result<ServerState> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.expect("Server task panicked")
    }
}
