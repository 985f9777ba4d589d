use anyhow::Context;
use clap::Parser;
use contacts_api::{
    cli_args::CliArgs,
    server::{Server, ServerConfig},
};

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var(
            "RUST_LOG",
            "server=info,contacts_api=debug,tower_http=info",
        );
    }

    init_tracing()?;

    let args = CliArgs::parse();

    tracing::info!("Starting ...");

    let mut config = match args.config_file {
        Some(path) => ServerConfig::from_config_file(&path).await?,
        None => ServerConfig::default(),
    };

    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    let server = Server::new(config);

    if let Err(err) = server.run().await {
        tracing::error!("Server stopped: {err:#}");

        return Err(err);
    }

    Ok(())
}
