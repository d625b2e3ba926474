use anyhow::Result;
use compressa_tools::{
    cli::{self, ServerCommand},
    config::ServerConfig,
    server::{self, HelloServer},
    telemetry,
};
use tracing::info;

// One runtime thread and no worker pool; hyper may still interleave connections on it.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let port = match cli::parse_server_args(std::env::args().skip(1)) {
        Ok(ServerCommand::Run { port }) => port,
        Ok(ServerCommand::Help) => {
            println!("{}", cli::SERVER_USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, cli::SERVER_USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = telemetry::init("warn") {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let config = ServerConfig {
        port,
        ..ServerConfig::default()
    };

    let hello_server = HelloServer::bind(&config).await?;
    println!("Serving Hello World on port {}…", port);

    let state = hello_server
        .serve(async {
            server::shutdown_signal().await;
            println!("\nShutting down.");
        })
        .await?;

    info!("Server finished in state {:?}", state);

    Ok(())
}
