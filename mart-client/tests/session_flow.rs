// Login, persisted session and 401 handling against the mock backend

mod common;

use common::{PASSWORD, TOKEN, product, spawn_backend};
use mart_client::{ClientError, Page, SessionStore, UserType};
use tempfile::TempDir;

#[tokio::test]
async fn test_login_persists_token_and_role() {
    let backend = spawn_backend(vec![product("p1", "Kettle", 4, 2)]).await;
    let dir = TempDir::new().unwrap();
    let client = backend.client_with_session_dir(dir.path());
    assert!(!client.session().is_authenticated().await);

    let login = client.auth().login("admin@etimad.pk", PASSWORD).await.unwrap();
    assert_eq!(login.token, TOKEN);

    let session = client.session().snapshot().await;
    assert_eq!(session.token.as_deref(), Some(TOKEN));
    assert_eq!(session.user_type, UserType::Admin);
    assert!(session.can_access(Page::AdminManagement));

    let saved = SessionStore::new(dir.path()).load().unwrap();
    assert_eq!(saved.token, TOKEN);
    assert_eq!(saved.user_type, UserType::Admin);

    // a new client picks the saved session up
    let restarted = backend.client_with_session_dir(dir.path());
    assert!(restarted.session().is_authenticated().await);
    let me = restarted.auth().me().await.unwrap();
    assert_eq!(me.email, "admin@etimad.pk");
}

#[tokio::test]
async fn test_bad_password_reports_server_message() {
    let backend = spawn_backend(vec![]).await;
    let client = backend.client();

    let err = client.auth().login("admin@etimad.pk", "wrong").await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid email or password");
    assert!(!client.session().is_authenticated().await);
}

#[tokio::test]
async fn test_empty_email_never_reaches_backend() {
    let backend = spawn_backend(vec![]).await;
    let client = backend.client();

    let err = client.auth().login("  ", PASSWORD).await.unwrap_err();
    assert_eq!(err.user_message(), "Email is required");
}

#[tokio::test]
async fn test_unauthorized_clears_session() {
    let backend = spawn_backend(vec![product("p1", "Kettle", 4, 2)]).await;
    let dir = TempDir::new().unwrap();
    let client = backend.client_with_session_dir(dir.path());
    client.auth().login("admin@etimad.pk", PASSWORD).await.unwrap();
    assert!(dir.path().join("session.json").exists());

    backend.reject_tokens(true);
    let err = client.products().list().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));

    assert!(!client.session().is_authenticated().await);
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_logout_clears_local_session() {
    let backend = spawn_backend(vec![]).await;
    let dir = TempDir::new().unwrap();
    let client = backend.client_with_session_dir(dir.path());
    client.auth().login("admin@etimad.pk", PASSWORD).await.unwrap();

    client.auth().logout().await.unwrap();
    assert!(!client.session().is_authenticated().await);
    assert!(SessionStore::new(dir.path()).load().is_none());
}

#[tokio::test]
async fn test_corrupt_session_file_is_ignored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.json"), "{not json").unwrap();

    let store = SessionStore::new(dir.path());
    assert!(store.exists());
    assert!(store.load().is_none());

    store.clear().unwrap();
    assert!(!store.exists());
}

#[tokio::test]
async fn test_envelope_and_bare_bodies() {
    let backend = spawn_backend(vec![
        product("p1", "Kettle", 4, 2),
        product("p2", "Iron", 1, 3),
    ])
    .await;
    let client = backend.client();
    client.session().set_token(TOKEN).await;

    // `{ success, count, data }` envelope
    let products = client.products().list().await.unwrap();
    assert_eq!(products.len(), 2);

    // bare array
    let low = client.products().low_stock().await.unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name, "Iron");
}

#[tokio::test]
async fn test_lcs_lookup_missing_is_none() {
    let backend = spawn_backend(vec![]).await;
    let client = backend.client();

    let found = client.lcs().lookup("LE123").await.unwrap().unwrap();
    assert_eq!(found.status.as_deref(), Some("Delivered"));
    assert!(client.lcs().lookup("NOPE").await.unwrap().is_none());
}

#[tokio::test]
async fn test_book_po_find_by_name_is_script_insensitive() {
    let backend = spawn_backend(vec![]).await;
    let client = backend.client();

    // Arabic yeh in the query, Farsi yeh in the record
    let hits = client.book_po().find_by_name("علي").await.unwrap();
    let ids: Vec<_> = hits.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b3"]);

    let hits = client.book_po().find_by_name("0300").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "b1");
}
