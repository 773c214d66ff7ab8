// Low-stock watcher against the mock backend and a scripted source

mod common;

use async_trait::async_trait;
use common::{TOKEN, product, spawn_backend};
use mart_client::{
    ClientError, ClientResult, LowStockSource, LowStockWatcher, NoticeLevel, Notifier, Session,
};
use shared::models::Product;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_only_newly_low_products_are_reported() {
    let backend = spawn_backend(vec![
        product("p1", "Kettle", 1, 2),
        product("p2", "Iron", 9, 2),
    ])
    .await;
    let client = backend.client();
    client.session().set_token(TOKEN).await;

    let notifier = Notifier::new();
    let mut notices = notifier.subscribe();
    let mut watcher = LowStockWatcher::new(
        client.clone(),
        client.session().handle(),
        notifier,
        Duration::from_secs(300),
    );

    let first = watcher.check().await;
    assert_eq!(first.len(), 1);
    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(notice.message.contains("Kettle"));

    // unchanged list: nothing new
    assert!(watcher.check().await.is_empty());

    backend.set_stock("p2", 2);
    let second = watcher.check().await;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Iron");
}

#[tokio::test]
async fn test_no_polling_without_token() {
    let backend = spawn_backend(vec![product("p1", "Kettle", 0, 2)]).await;
    let client = backend.client();

    let mut watcher = LowStockWatcher::new(
        client.clone(),
        client.session().handle(),
        Notifier::new(),
        Duration::from_secs(300),
    );
    assert!(watcher.check().await.is_empty());
    assert_eq!(backend.low_stock_calls(), 0);
}

#[tokio::test]
async fn test_unauthorized_poll_is_silent() {
    let backend = spawn_backend(vec![product("p1", "Kettle", 0, 2)]).await;
    let client = backend.client();
    client.session().set_token(TOKEN).await;
    backend.reject_tokens(true);

    let notifier = Notifier::new();
    let mut notices = notifier.subscribe();
    let mut watcher = LowStockWatcher::new(
        client.clone(),
        client.session().handle(),
        notifier,
        Duration::from_secs(300),
    );

    assert!(watcher.check().await.is_empty());
    assert_eq!(backend.low_stock_calls(), 1);
    assert!(notices.try_recv().is_err());
    // the 401 also signed the operator out, so the next tick does not call
    assert!(watcher.check().await.is_empty());
    assert_eq!(backend.low_stock_calls(), 1);
}

struct Counting {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl LowStockSource for Counting {
    async fn low_stock(&self) -> ClientResult<Vec<Product>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::Internal("backend down".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_run_polls_on_interval_until_cancelled() {
    let calls = Arc::new(AtomicUsize::new(0));
    let session = Arc::new(RwLock::new(Session {
        token: Some("t".into()),
        ..Default::default()
    }));
    let watcher = LowStockWatcher::new(
        Counting {
            calls: calls.clone(),
        },
        session,
        Notifier::new(),
        Duration::from_secs(300),
    );

    let shutdown = CancellationToken::new();
    let task = tokio::spawn(watcher.run(shutdown.clone()));

    tokio::time::sleep(Duration::from_secs(601)).await;
    shutdown.cancel();
    task.await.unwrap();

    // immediate tick plus one every five minutes
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
