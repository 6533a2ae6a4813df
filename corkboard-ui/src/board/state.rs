use corkboard_types::{Note, NoteId, NoteRecord};

/// Field-level patch applied to one note locally. Mirrors the wire
/// `NotePatch` but stays a separate type: live drag previews patch the
/// collection on every mousemove without ever touching the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFields {
    pub content: Option<String>,
    pub position: Option<(f64, f64)>,
    pub tags: Option<Vec<String>>,
}

impl NoteFields {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn position(x: f64, y: f64) -> Self {
        Self {
            position: Some((x, y)),
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

/// Replace the collection wholesale from the initial fetch.
pub fn load_notes(notes: &mut Vec<Note>, fetched: Vec<NoteRecord>) {
    *notes = fetched.into_iter().map(NoteRecord::into_note).collect();
}

/// Append a freshly created note. Two racing creates land in whatever
/// order their responses arrive, not the order they were requested.
pub fn insert_note(notes: &mut Vec<Note>, note: Note) {
    notes.push(note);
}

/// Merge fields into the note with `id`. An absent id is silently
/// ignored: a debounce timer may fire after its note was deleted.
pub fn patch_note(notes: &mut Vec<Note>, id: NoteId, fields: NoteFields) {
    let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
        return;
    };

    if let Some(content) = fields.content {
        note.content = content;
    }
    if let Some((x, y)) = fields.position {
        note.x = x;
        note.y = y;
    }
    if let Some(tags) = fields.tags {
        note.tags = tags;
    }
}

pub fn remove_note(notes: &mut Vec<Note>, id: NoteId) {
    notes.retain(|n| n.id != id);
}

/// Tag array after appending `tag`: the full replacement array the
/// wire write carries. Duplicates are permitted and preserved.
pub fn tags_with_added(notes: &[Note], id: NoteId, tag: &str) -> Option<Vec<String>> {
    let note = notes.iter().find(|n| n.id == id)?;
    let mut tags = note.tags.clone();
    tags.push(tag.to_string());
    Some(tags)
}

/// Tag array after removing every occurrence of `tag`, or `None` when
/// the tag was not present (no write is issued then).
pub fn tags_with_removed(notes: &[Note], id: NoteId, tag: &str) -> Option<Vec<String>> {
    let note = notes.iter().find(|n| n.id == id)?;
    if !note.tags.iter().any(|t| t == tag) {
        return None;
    }
    Some(
        note.tags
            .iter()
            .filter(|t| t.as_str() != tag)
            .cloned()
            .collect(),
    )
}
