//! Data models
//!
//! Client-side mirrors of the backend documents. Field names are camelCase on
//! the wire and `_id` is accepted wherever an `id` is expected.

pub mod bill;
pub mod book_po;
pub mod customer;
pub mod dashboard;
pub mod finance;
pub mod lcs;
pub mod line;
pub mod marketing;
pub mod parcel;
pub mod product;
pub mod purchase;
pub mod sale;
pub mod seller;

// Re-exports
pub use bill::*;
pub use book_po::*;
pub use customer::*;
pub use dashboard::*;
pub use finance::*;
pub use lcs::*;
pub use line::*;
pub use marketing::*;
pub use parcel::*;
pub use product::*;
pub use purchase::*;
pub use sale::*;
pub use seller::*;
