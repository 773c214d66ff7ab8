//! Etimad Mart client
//!
//! HTTP client for the Etimad Mart REST backend, the persisted session, the
//! stock-checked submit flows and the low-stock watcher.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod low_stock;
pub mod notify;
pub mod session;
pub mod workflow;

pub use client::MartClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use low_stock::{LowStockSource, LowStockWatcher};
pub use notify::{Notice, NoticeLevel, Notifier, for_each_notice};
pub use session::{Session, SessionHandle, SessionManager, SessionStore};
pub use workflow::{BillDraft, OrderForm};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, Page, UserInfo, UserType};
