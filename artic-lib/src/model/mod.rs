//! Data model types

mod artwork;

pub use artwork::Artwork;
pub use artwork::ArtworkId;
pub use artwork::PLACEHOLDER;
