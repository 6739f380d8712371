//! Cross-page row selection.
//!
//! A user asks for "the first N rows". Only one page is resident at a time,
//! so [`SelectionController`] selects what the current page can satisfy and
//! carries the rest forward to pages as they arrive.
//!
//! - [`SelectionIntent`] - a validated, positive row count
//! - [`SelectedSet`] - ordered, id-keyed set of selected artworks
//! - [`SelectionController`] - applies intents and carries remainders

mod controller;
mod intent;
mod set;

pub use controller::SelectionController;
pub use controller::SelectionOutcome;
pub use controller::SelectionPhase;
pub use intent::SelectionIntent;
pub use set::SelectedSet;
