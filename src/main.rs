use cloth::config::Config;
use cloth::log::Log;
use cloth::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let log = Log::new(&cfg.log_path);

    tokio::select! {
        res = server::listener::run(&cfg, &log) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
