//! Watch the backend for low-stock products and print each warning
//!
//! Uses the persisted session; sign in first with the dashboard or set
//! `ETIMAD_TOKEN`.

use mart_client::logger::init_logger;
use mart_client::{LowStockWatcher, MartClient, NoticeLevel, Notifier, for_each_notice};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let json_logs = std::env::var("ETIMAD_LOG_JSON").is_ok_and(|v| v == "1" || v == "true");
    init_logger("info", json_logs)?;

    let mut config = mart_client::ClientConfig::from_env()?;
    if let Ok(token) = std::env::var("ETIMAD_TOKEN") {
        config = config.with_token(token);
    }
    let interval = config.low_stock_interval;
    let client = MartClient::new(config)?;

    if !client.session().is_authenticated().await {
        anyhow::bail!("not signed in: no saved session and ETIMAD_TOKEN is unset");
    }

    let notifier = Notifier::new();
    let printer = tokio::spawn(for_each_notice(notifier.subscribe(), |notice| {
        if notice.level == NoticeLevel::Warning {
            println!("{}", notice.message);
        }
    }));

    let shutdown = CancellationToken::new();
    let watcher = LowStockWatcher::new(
        client.clone(),
        client.session().handle(),
        notifier,
        interval,
    );
    let task = tokio::spawn(watcher.run(shutdown.clone()));

    tokio::signal::ctrl_c().await?;
    shutdown.cancel();
    task.await?;
    printer.abort();
    Ok(())
}
