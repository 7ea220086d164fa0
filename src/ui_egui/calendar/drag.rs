// Drag-to-create gesture engine
// Tracks one pointer interaction over the grid: Idle until a press on an
// empty cell, Dragging while the pointer moves, Resolved on release.

use chrono::{NaiveDate, NaiveTime};

use super::time_grid::{TimeSlot, SLOT_MINUTES};

/// Transient selection while a drag is in progress. The day is fixed at
/// press time; only the end slot follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSelection {
    pub day: NaiveDate,
    pub start_slot: TimeSlot,
    pub end_slot: TimeSlot,
}

/// Resolved half-open interval produced when a drag is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    pub day: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Default)]
pub struct DragController {
    active: Option<DragSelection>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn selection(&self) -> Option<&DragSelection> {
        self.active.as_ref()
    }

    /// Start a gesture. The caller has already verified the cell is empty
    /// and a counsellor is selected; a press that fails those checks never
    /// reaches here.
    pub fn begin(&mut self, day: NaiveDate, slot: TimeSlot) {
        self.active = Some(DragSelection {
            day,
            start_slot: slot,
            end_slot: slot,
        });
    }

    /// Move the selection end to the slot under the pointer. No-op while
    /// idle; the day never changes mid-gesture.
    pub fn update(&mut self, slot: TimeSlot) {
        if let Some(selection) = self.active.as_mut() {
            selection.end_slot = slot;
        }
    }

    /// Whether a cell should render as part of the in-progress selection.
    pub fn covers(&self, day: NaiveDate, slot: TimeSlot) -> bool {
        let Some(selection) = self.active else {
            return false;
        };
        if selection.day != day {
            return false;
        }
        let lo = selection.start_slot.minutes().min(selection.end_slot.minutes());
        let hi = selection.start_slot.minutes().max(selection.end_slot.minutes());
        (lo..=hi).contains(&slot.minutes())
    }

    /// Release the gesture. Normalizes an upward drag, then extends the end
    /// by one slot so the stored end is exclusive of the last highlighted
    /// slot. Returns `None` (and stays idle) if no gesture was active.
    pub fn finish(&mut self) -> Option<SlotRange> {
        let selection = self.active.take()?;
        let lo = selection.start_slot.minutes().min(selection.end_slot.minutes());
        let hi = selection.start_slot.minutes().max(selection.end_slot.minutes());
        let end_minutes = hi + SLOT_MINUTES;
        Some(SlotRange {
            day: selection.day,
            start: TimeSlot::from_minutes(lo).time(),
            end: TimeSlot::from_minutes(end_minutes).time(),
        })
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}
