//! Ordered set of selected artworks.

use std::collections::HashSet;

use crate::model::Artwork;
use crate::model::ArtworkId;

/// Selected artworks in the order they were selected.
///
/// Membership is keyed by artwork id, so the same artwork seen on two fetches
/// of the same page is only held once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedSet {
    items: Vec<Artwork>,
    ids: HashSet<ArtworkId>,
}

impl SelectedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected artworks.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if an artwork id is selected.
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Append an artwork. Returns true if it was not already selected.
    pub fn insert(&mut self, artwork: Artwork) -> bool {
        if !self.ids.insert(artwork.id) {
            return false;
        }
        self.items.push(artwork);
        true
    }

    /// Remove an artwork by id. Returns true if it was selected.
    pub fn remove(&mut self, id: ArtworkId) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }
        self.items.retain(|a| a.id != id);
        true
    }

    /// Toggle an artwork. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, artwork: &Artwork) -> bool {
        if self.remove(artwork.id) {
            false
        } else {
            self.insert(artwork.clone())
        }
    }

    /// Replace the whole selection, keeping the given order.
    pub fn replace(&mut self, artworks: impl IntoIterator<Item = Artwork>) {
        self.clear();
        for artwork in artworks {
            self.insert(artwork);
        }
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.items.iter().map(|a| a.id).collect()
    }
}

impl FromIterator<Artwork> for SelectedSet {
    fn from_iter<I: IntoIterator<Item = Artwork>>(iter: I) -> Self {
        let mut set = Self::new();
        set.replace(iter);
        set
    }
}
