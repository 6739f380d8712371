//! Art Institute of Chicago artwork table library
//!
//! An async client for the public `/artworks` endpoint plus the state behind a
//! paginated artwork table with cross-page row selection.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod selection;
pub mod session;
pub mod source;

mod client;

pub use client::*;
pub use session::PageOutcome;
pub use session::TableSession;
