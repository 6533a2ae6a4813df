//! Debounced content write-back.
//!
//! One slot per note id. Every input event re-arms the slot by bumping
//! its epoch; a timer that wakes to a stale epoch does nothing, so a
//! burst of keystrokes collapses into a single network write carrying
//! the value present at the end of the quiet window.

use std::collections::HashMap;

use corkboard_types::NoteId;

/// Debounce window for content edits, in milliseconds.
pub const CONTENT_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, Default, PartialEq)]
struct EditSlot {
    epoch: u64,
    /// Newest value not yet handed to the network.
    dirty: Option<String>,
    /// Last value handed to the network (or seen at load).
    synced: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentSync {
    slots: HashMap<NoteId, EditSlot>,
}

impl ContentSync {
    /// Mark `value` as already persisted (initial load, post-create).
    pub fn record_synced(&mut self, id: NoteId, value: String) {
        let slot = self.slots.entry(id).or_default();
        slot.dirty = None;
        slot.synced = Some(value);
    }

    /// Record the note's newest content and arm (or re-arm) its slot.
    /// Returns the epoch the caller's timer must present to `take_due`.
    pub fn note_edited(&mut self, id: NoteId, value: String) -> u64 {
        let slot = self.slots.entry(id).or_default();
        slot.epoch += 1;
        slot.dirty = Some(value);
        slot.epoch
    }

    /// Claim the value to dispatch, if this timer is still the current
    /// one and the value actually changed since the last dispatch.
    /// `None` means the timer was superseded, the note is gone, or
    /// there is nothing new to send. All of these are safe no-ops.
    pub fn take_due(&mut self, id: NoteId, epoch: u64) -> Option<String> {
        let slot = self.slots.get_mut(&id)?;
        if slot.epoch != epoch {
            return None;
        }

        let value = slot.dirty.take()?;
        if slot.synced.as_deref() == Some(value.as_str()) {
            return None;
        }

        slot.synced = Some(value.clone());
        Some(value)
    }

    /// Drop all bookkeeping for a deleted note; a timer that fires
    /// afterwards finds nothing and exits quietly.
    pub fn forget(&mut self, id: NoteId) {
        self.slots.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_edits_coalesce_into_one_dispatch_with_the_final_value() {
        let mut sync = ContentSync::default();
        let first = sync.note_edited(1, "b".into());
        let second = sync.note_edited(1, "bu".into());
        let third = sync.note_edited(1, "buy".into());

        // Timers fire in the order they were armed.
        assert_eq!(sync.take_due(1, first), None);
        assert_eq!(sync.take_due(1, second), None);
        assert_eq!(sync.take_due(1, third), Some("buy".to_string()));
    }

    #[test]
    fn unchanged_value_is_not_redispatched() {
        let mut sync = ContentSync::default();
        sync.record_synced(1, "hello".into());

        let epoch = sync.note_edited(1, "hello".into());
        assert_eq!(sync.take_due(1, epoch), None);
    }

    #[test]
    fn dispatch_updates_the_synced_baseline() {
        let mut sync = ContentSync::default();
        let epoch = sync.note_edited(1, "draft".into());
        assert_eq!(sync.take_due(1, epoch), Some("draft".to_string()));

        // Editing back to the dispatched value sends nothing.
        let epoch = sync.note_edited(1, "draft".into());
        assert_eq!(sync.take_due(1, epoch), None);

        // A genuinely new value goes out.
        let epoch = sync.note_edited(1, "draft 2".into());
        assert_eq!(sync.take_due(1, epoch), Some("draft 2".to_string()));
    }

    #[test]
    fn forgotten_notes_make_late_timers_safe_noops() {
        let mut sync = ContentSync::default();
        let epoch = sync.note_edited(7, "doomed".into());
        sync.forget(7);
        assert_eq!(sync.take_due(7, epoch), None);
    }

    #[test]
    fn notes_debounce_independently() {
        let mut sync = ContentSync::default();
        let a = sync.note_edited(1, "alpha".into());
        let b = sync.note_edited(2, "beta".into());

        assert_eq!(sync.take_due(1, a), Some("alpha".to_string()));
        assert_eq!(sync.take_due(2, b), Some("beta".to_string()));
    }
}
