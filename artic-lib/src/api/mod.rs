//! Web API operations

mod artworks;
mod page;

pub use artworks::*;
pub use page::Page;
pub use page::Pagination;
