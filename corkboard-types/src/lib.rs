//! Shared note model and wire types for the corkboard client.
//!
//! The backend speaks a REST dialect in which tags may arrive either as
//! bare name strings or as structured `{id, name}` records depending on
//! the endpoint revision. Everything entering the in-memory model is
//! normalized to plain names here, at the wire boundary.

use serde::{Deserialize, Serialize};

/// Server-assigned note identifier. A locally created note has no id
/// until the create round trip returns one.
pub type NoteId = i64;

/// A sticky note as rendered on the board.
///
/// `x`/`y` are canvas-relative pixel coordinates of the note's anchor
/// point. `tags` is ordered and duplicates are permitted; the board
/// never deduplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub tags: Vec<String>,
}

/// A tag as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagWire {
    Name(String),
    Record { id: i64, name: String },
}

impl TagWire {
    pub fn into_name(self) -> String {
        match self {
            TagWire::Name(name) => name,
            TagWire::Record { name, .. } => name,
        }
    }
}

/// One row of the `GET /corkboard` response; also the shape of the
/// `POST /corkboard` response. `content`/`x`/`y` are optional on the
/// wire (the server fills defaults for sparse rows).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NoteRecord {
    pub id: NoteId,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub tags: Vec<TagWire>,
}

impl NoteRecord {
    /// Normalize the wire shape into the in-memory model.
    pub fn into_note(self) -> Note {
        Note {
            id: self.id,
            content: self.content.unwrap_or_default(),
            x: self.x.unwrap_or(0.0),
            y: self.y.unwrap_or(0.0),
            tags: self.tags.into_iter().map(TagWire::into_name).collect(),
        }
    }
}

/// Body of `POST /corkboard`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteCreate {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub tags: Vec<String>,
}

/// Partial body of `PUT /corkboard/{id}`. Unset fields stay off the
/// wire, so a content sync never re-sends position or tags and a drag
/// commit never re-sends content. Tag updates always carry the full
/// replacement array, never a delta.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl NotePatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn tags(tags: Vec<String>) -> Self {
        Self {
            tags: Some(tags),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_normalize_from_both_wire_shapes() {
        let raw = r#"{
            "id": 7,
            "content": "buy milk",
            "x": 120.0,
            "y": 40.0,
            "tags": ["work", {"id": 3, "name": "errands"}]
        }"#;

        let record: NoteRecord = serde_json::from_str(raw).unwrap();
        let note = record.into_note();
        assert_eq!(note.tags, vec!["work".to_string(), "errands".to_string()]);
    }

    #[test]
    fn sparse_record_falls_back_to_defaults() {
        let record: NoteRecord = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        let note = record.into_note();
        assert_eq!(note.content, "");
        assert_eq!((note.x, note.y), (0.0, 0.0));
        assert!(note.tags.is_empty());
    }

    #[test]
    fn unknown_wire_fields_are_ignored() {
        // The backend also serializes timestamps and an owner; the
        // spatial client carries none of them.
        let raw = r#"{
            "id": 2,
            "content": "call mom",
            "x": 1.5,
            "y": 2.5,
            "tags": [],
            "created_at": "2026-01-05T10:00:00Z",
            "owner": {"id": 1, "username": "sam"}
        }"#;

        let record: NoteRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.into_note().content, "call mom");
    }

    #[test]
    fn position_patch_serializes_only_coordinates() {
        let body = serde_json::to_value(NotePatch::position(130.0, 35.0)).unwrap();
        assert_eq!(body, serde_json::json!({"x": 130.0, "y": 35.0}));
    }

    #[test]
    fn content_patch_serializes_only_content() {
        let body = serde_json::to_value(NotePatch::content("draft")).unwrap();
        assert_eq!(body, serde_json::json!({"content": "draft"}));
    }

    #[test]
    fn tag_patch_carries_full_array_including_duplicates() {
        let body =
            serde_json::to_value(NotePatch::tags(vec!["a".into(), "b".into(), "a".into()]))
                .unwrap();
        assert_eq!(body, serde_json::json!({"tags": ["a", "b", "a"]}));
    }
}
