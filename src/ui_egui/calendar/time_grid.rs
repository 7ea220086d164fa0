// Time-grid model
// The fixed sequence of bookable 30-minute slots and the conversions
// between clock time and grid rows.

use chrono::NaiveTime;

use crate::config::{PortalConfig, EARLY_SLOT_HOUR, EARLY_SLOT_MINUTE};

pub const SLOT_MINUTES: u32 = 30;

/// One bookable 30-minute slot, identified by its wall-clock start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub hour: u32,
    pub minute: u32,
}

impl TimeSlot {
    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).expect("slot within a day")
    }
}

/// Ordered slot sequence spanning business hours, with the single 7:30
/// early slot prepended.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    slots: Vec<TimeSlot>,
    end_minutes: u32,
}

impl TimeGrid {
    pub fn new(config: &PortalConfig) -> Self {
        let early = EARLY_SLOT_HOUR * 60 + EARLY_SLOT_MINUTE;
        let mut slots = Vec::new();
        if early < config.business_start_hour * 60 {
            slots.push(TimeSlot::from_minutes(early));
        }
        let mut minutes = config.business_start_hour * 60;
        let end_minutes = config.business_end_hour * 60;
        while minutes < end_minutes {
            slots.push(TimeSlot::from_minutes(minutes));
            minutes += SLOT_MINUTES;
        }
        Self { slots, end_minutes }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn row_count(&self) -> usize {
        self.slots.len()
    }

    /// Start of the first (early) slot in minutes since midnight.
    pub fn first_minutes(&self) -> u32 {
        self.slots[0].minutes()
    }

    /// Exclusive end of the bookable range in minutes since midnight.
    pub fn end_minutes(&self) -> u32 {
        self.end_minutes
    }

    /// Whether a clock time lies within the bookable range.
    pub fn contains(&self, hour: u32, minute: u32) -> bool {
        let minutes = hour * 60 + minute;
        minutes >= self.first_minutes() && minutes < self.end_minutes
    }

    /// Row index for a clock time. Rounds down to the slot containing the
    /// time, never up; times before the first slot map to row 0.
    pub fn time_to_row(&self, hour: u32, minute: u32) -> usize {
        let minutes = hour * 60 + minute;
        self.slots
            .iter()
            .rposition(|slot| slot.minutes() <= minutes)
            .unwrap_or(0)
    }

    /// Slot at a row index, clamped to the grid.
    pub fn slot_at_row(&self, row: usize) -> TimeSlot {
        self.slots[row.min(self.slots.len() - 1)]
    }

    /// Project a pointer's vertical position onto the slot sequence. The
    /// offset is clamped to the grid's extent, then quantized downward, so
    /// out-of-range positions resolve to the first or last slot.
    pub fn slot_at_y(&self, grid_top: f32, y: f32, row_height: f32) -> TimeSlot {
        let offset = (y - grid_top).max(0.0);
        let row = (offset / row_height).floor() as usize;
        self.slot_at_row(row)
    }
}

/// 12-hour clock with lowercase am/pm and no leading zero on the hour,
/// e.g. "9:30 am". Locale-independent.
pub fn format_time(hour: u32, minute: u32) -> String {
    let suffix = if hour < 12 { "am" } else { "pm" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn grid() -> TimeGrid {
        TimeGrid::new(&PortalConfig::default())
    }

    #[test]
    fn slot_sequence_starts_early_and_covers_business_hours() {
        let grid = grid();
        let slots = grid.slots();
        assert_eq!(slots[0], TimeSlot { hour: 7, minute: 30 });
        assert_eq!(slots[1], TimeSlot { hour: 8, minute: 0 });
        assert_eq!(*slots.last().unwrap(), TimeSlot { hour: 17, minute: 30 });
        // 7:30 plus two slots per hour from 8 to 18.
        assert_eq!(grid.row_count(), 21);
        // Strictly increasing.
        assert!(slots.windows(2).all(|pair| pair[0].minutes() < pair[1].minutes()));
    }

    #[test_case(7, 30 => 0; "early slot")]
    #[test_case(8, 0 => 1; "first business slot")]
    #[test_case(9, 29 => 3; "rounds down within slot")]
    #[test_case(9, 30 => 4; "half-hour boundary")]
    #[test_case(17, 59 => 20; "last slot")]
    fn time_to_row_rounds_down(hour: u32, minute: u32) -> usize {
        grid().time_to_row(hour, minute)
    }

    #[test]
    fn time_to_row_clamps_before_first_slot() {
        assert_eq!(grid().time_to_row(6, 0), 0);
    }

    #[test]
    fn contains_is_half_open() {
        let grid = grid();
        assert!(grid.contains(7, 30));
        assert!(grid.contains(17, 30));
        assert!(!grid.contains(18, 0));
        assert!(!grid.contains(7, 0));
    }

    #[test]
    fn slot_at_y_clamps_to_grid() {
        let grid = grid();
        let row_height = 28.0;
        // Above the grid resolves to the first slot.
        assert_eq!(grid.slot_at_y(100.0, 40.0, row_height), TimeSlot { hour: 7, minute: 30 });
        // Below the grid resolves to the last slot.
        assert_eq!(
            grid.slot_at_y(100.0, 100.0 + 40.0 * row_height, row_height),
            TimeSlot { hour: 17, minute: 30 }
        );
        // Inside a row quantizes downward.
        assert_eq!(
            grid.slot_at_y(100.0, 100.0 + 1.9 * row_height, row_height),
            TimeSlot { hour: 8, minute: 0 }
        );
    }

    #[test_case(9, 30, "9:30 am")]
    #[test_case(7, 30, "7:30 am")]
    #[test_case(0, 0, "12:00 am")]
    #[test_case(12, 0, "12:00 pm")]
    #[test_case(12, 30, "12:30 pm")]
    #[test_case(17, 30, "5:30 pm")]
    fn format_time_matches_portal_style(hour: u32, minute: u32, expected: &str) {
        assert_eq!(format_time(hour, minute), expected);
    }

    #[test]
    fn custom_business_hours_shift_the_sequence() {
        let config = PortalConfig {
            business_start_hour: 9,
            business_end_hour: 12,
        };
        let grid = TimeGrid::new(&config);
        assert_eq!(grid.slots()[0], TimeSlot { hour: 7, minute: 30 });
        assert_eq!(grid.slots()[1], TimeSlot { hour: 9, minute: 0 });
        assert_eq!(grid.end_minutes(), 720);
        assert_eq!(grid.row_count(), 7);
    }
}
