//! Artwork record

use serde::Deserialize;
use serde::Serialize;

/// Text shown in place of an absent field.
pub const PLACEHOLDER: &str = "-";

/// Identifier of an artwork, unique within the collection.
pub type ArtworkId = u64;

/// A single artwork row as returned by `/artworks`.
///
/// Every display field may be `null` or missing in the API response; those
/// render as [`PLACEHOLDER`].
///
/// # Example
///
/// ```
/// use artic_lib::model::Artwork;
///
/// let json = r#"{"id": 27992, "title": "A Sunday on La Grande Jatte", "date_start": 1884}"#;
/// let artwork: Artwork = serde_json::from_str(json).unwrap();
///
/// assert_eq!(artwork.id, 27992);
/// assert_eq!(artwork.place_of_origin(), "-");
/// assert_eq!(artwork.date_start(), "1884");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Creates an artwork with only an id and title set.
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    pub fn title(&self) -> &str {
        display_str(&self.title)
    }

    pub fn place_of_origin(&self) -> &str {
        display_str(&self.place_of_origin)
    }

    pub fn artist_display(&self) -> &str {
        display_str(&self.artist_display)
    }

    pub fn inscriptions(&self) -> &str {
        display_str(&self.inscriptions)
    }

    pub fn date_start(&self) -> String {
        display_year(self.date_start)
    }

    pub fn date_end(&self) -> String {
        display_year(self.date_end)
    }

    /// Returns the display cells in column order.
    pub fn cells(&self) -> [String; 6] {
        [
            self.title().to_string(),
            self.place_of_origin().to_string(),
            self.artist_display().to_string(),
            self.inscriptions().to_string(),
            self.date_start(),
            self.date_end(),
        ]
    }
}

fn display_str(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => PLACEHOLDER,
    }
}

fn display_year(value: Option<i32>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |y| y.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nulls() {
        let json = r#"{
            "id": 1,
            "title": "Untitled",
            "place_of_origin": null,
            "artist_display": "",
            "inscriptions": null,
            "date_start": null,
            "date_end": 1901
        }"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();

        assert_eq!(artwork.title(), "Untitled");
        assert_eq!(artwork.place_of_origin(), PLACEHOLDER);
        assert_eq!(artwork.artist_display(), PLACEHOLDER);
        assert_eq!(artwork.date_start(), PLACEHOLDER);
        assert_eq!(artwork.date_end(), "1901");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"id": 7, "_score": 1.0, "thumbnail": {"alt_text": "x"}}"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, 7);
        assert_eq!(artwork.title(), PLACEHOLDER);
    }

    #[test]
    fn test_id_is_required() {
        let json = r#"{"title": "No id"}"#;
        assert!(serde_json::from_str::<Artwork>(json).is_err());
    }

    #[test]
    fn test_cells_order() {
        let mut artwork = Artwork::new(3, "Nighthawks");
        artwork.artist_display = Some("Edward Hopper".into());
        artwork.date_start = Some(1942);

        let cells = artwork.cells();
        assert_eq!(cells[0], "Nighthawks");
        assert_eq!(cells[1], "-");
        assert_eq!(cells[2], "Edward Hopper");
        assert_eq!(cells[4], "1942");
        assert_eq!(cells[5], "-");
    }
}
