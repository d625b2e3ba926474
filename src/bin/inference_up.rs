use anyhow::{Context, Result};
use compressa_tools::{
    cli,
    config,
    inference::{self, ComputeClient},
    telemetry,
};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = match cli::parse_inference_up_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n\n{}", e, cli::INFERENCE_UP_USAGE);
            std::process::exit(2);
        }
    };

    if args.help {
        println!("{}", cli::INFERENCE_UP_USAGE);
        return Ok(());
    }

    if let Err(e) = telemetry::init("info") {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let loaded = match &args.config {
        Some(path) => config::load_from(path).await,
        None => config::load().await,
    }
    .context("Failed to load configuration")?;

    let mut settings = loaded.inference;
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(model) = args.model {
        settings.model = model;
    }

    info!("Targeting {}", inference::inference_url(&settings.base_url));

    let client = ComputeClient::with_timeout(
        settings.base_url.clone(),
        settings.timeout_secs.map(Duration::from_secs),
    )?;
    let response = inference::launch(&client, &settings).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
